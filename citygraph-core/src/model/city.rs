use serde::{Deserialize, Serialize};

use super::GeoPoint;
use crate::CityId;

/// City graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityNode {
    pub id: CityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl CityNode {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Great-circle distance to another city in kilometers
    pub fn distance_km(&self, other: &CityNode) -> f64 {
        self.location().distance_km(&other.location())
    }
}

/// One directed half of an undirected link between two cities.
/// Both halves of a link carry the same distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjacencyEntry {
    pub to: CityId,
    pub distance_km: f64,
}
