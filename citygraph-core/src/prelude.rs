// Re-export key components
pub use crate::algo::haversine::haversine_km;
pub use crate::loading::{
    CityGraphConfig, CityNodeInput, EdgeInput, build_graph, build_graph_with_config,
};
pub use crate::model::{AdjacencyEntry, CityGraph, CityNode, GeoPoint};
pub use crate::query::{NearbyResult, find_nearby, find_nearby_many};

pub use crate::CityId;
pub use crate::Error;
