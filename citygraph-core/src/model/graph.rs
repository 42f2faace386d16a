//! Immutable undirected city graph

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{AdjacencyEntry, CityNode};
use crate::query::{DEFAULT_RADIUS_KM, NearbyResult, find_nearby};
use crate::{CityId, Error};

/// Settings captured from [`CityGraphConfig`](crate::CityGraphConfig) at build time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityGraphMeta {
    /// Radius used by queries that do not pass one
    pub default_radius_km: f64,
}

impl Default for CityGraphMeta {
    fn default() -> Self {
        Self {
            default_radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

/// Undirected weighted graph of cities.
///
/// Built once by [`build_graph`](crate::build_graph) and read-only afterwards,
/// so a single instance can be shared between threads and queried in parallel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityGraph {
    /// Nodes by id
    pub(crate) by_id: HashMap<CityId, CityNode>,
    /// Adjacency sequence per node, in edge processing order
    pub(crate) adj: HashMap<CityId, Vec<AdjacencyEntry>>,
    #[serde(default)]
    pub(crate) meta: CityGraphMeta,
}

impl CityGraph {
    pub fn node(&self, id: &str) -> Option<&CityNode> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Adjacency sequence of `id`, `None` for unknown ids
    pub fn neighbors(&self, id: &str) -> Option<&[AdjacencyEntry]> {
        self.adj.get(id).map(Vec::as_slice)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &CityNode> {
        self.by_id.values()
    }

    pub fn node_count(&self) -> usize {
        self.by_id.len()
    }

    /// Number of undirected links
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.adj.is_empty()
    }

    pub fn meta(&self) -> &CityGraphMeta {
        &self.meta
    }

    /// Neighbors of `city_id` within `max_km` (inclusive), nearest first.
    /// `None` uses the graph's default radius.
    pub fn find_nearby(
        &self,
        city_id: &str,
        max_km: Option<f64>,
    ) -> Result<Vec<NearbyResult>, Error> {
        find_nearby(self, city_id, max_km)
    }
}

impl fmt::Display for CityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CityGraph with {} cities and {} links",
            self.node_count(),
            self.edge_count()
        )
    }
}
