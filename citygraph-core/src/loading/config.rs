use serde::Deserialize;

use crate::model::CityGraphMeta;
use crate::query::DEFAULT_RADIUS_KM;

/// Settings applied when building a [`CityGraph`](crate::CityGraph)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CityGraphConfig {
    /// Radius in kilometers used by `find_nearby` when the caller passes none
    pub default_radius_km: f64,
}

impl Default for CityGraphConfig {
    fn default() -> Self {
        Self {
            default_radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

impl From<&CityGraphConfig> for CityGraphMeta {
    fn from(config: &CityGraphConfig) -> Self {
        Self {
            default_radius_km: config.default_radius_km,
        }
    }
}
