use serde::Deserialize;

use crate::CityId;

/// Raw city record as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CityNodeInput {
    /// Empty when the record carried no id, rejected by the builder
    #[serde(default)]
    pub id: CityId,
    #[serde(default)]
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl CityNodeInput {
    pub fn new(id: impl Into<CityId>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            lat,
            lon,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Raw link between two cities, direction is ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EdgeInput {
    pub from: CityId,
    pub to: CityId,
}

impl EdgeInput {
    pub fn new(from: impl Into<CityId>, to: impl Into<CityId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
