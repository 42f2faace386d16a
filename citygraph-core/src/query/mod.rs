//! Radius-bounded neighbor queries

mod nearby;

pub use nearby::{DEFAULT_RADIUS_KM, NearbyResult, find_nearby, find_nearby_many};
