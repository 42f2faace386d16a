//! Geodesic computations over [`GeoPoint`](crate::GeoPoint) values.

pub mod haversine;
