//! Data model for city graphs
//!
//! Contains the point and node types, and the immutable graph built from them.

pub mod city;
pub mod graph;
pub mod point;
mod to_geojson;

pub use city::{AdjacencyEntry, CityNode};
pub use graph::{CityGraph, CityGraphMeta};
pub use point::GeoPoint;
