//! Great-circle distances and small undirected city graphs with
//! radius-bounded neighbor queries.
//!
//! The crate is split the same way the data flows: raw records are
//! validated and turned into an immutable [`CityGraph`] by
//! [`build_graph`], and [`find_nearby`] answers queries against it.

pub mod algo;
mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod query;

pub use algo::haversine::{EARTH_RADIUS_KM, haversine_km};
pub use error::Error;
pub use loading::{
    CityGraphConfig, CityNodeInput, EdgeInput, build_graph, build_graph_with_config,
};
pub use model::{AdjacencyEntry, CityGraph, CityGraphMeta, CityNode, GeoPoint};
pub use query::{DEFAULT_RADIUS_KM, NearbyResult, find_nearby, find_nearby_many};

/// Identifier of a city node
pub type CityId = String;
