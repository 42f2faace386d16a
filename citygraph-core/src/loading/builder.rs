use hashbrown::{HashMap, HashSet};
use log::{debug, info, trace};

use super::config::CityGraphConfig;
use super::input::{CityNodeInput, EdgeInput};
use crate::model::{AdjacencyEntry, CityGraph, CityNode};
use crate::{CityId, Error};

/// Builds an undirected city graph with the default configuration
///
/// # Errors
///
/// Returns an error if a node has no id or non-finite coordinates,
/// or if an edge references an unknown node
pub fn build_graph(nodes: &[CityNodeInput], edges: &[EdgeInput]) -> Result<CityGraph, Error> {
    build_graph_with_config(nodes, edges, &CityGraphConfig::default())
}

/// Builds an undirected city graph.
///
/// Self-loops are skipped, and `A-B` / `B-A` count as one link: only the
/// first occurrence is kept. The distance of each link is computed once
/// and shared by both adjacency entries.
///
/// # Errors
///
/// Returns an error on the first invalid node, the first edge that
/// references an unknown node, or an invalid configuration
pub fn build_graph_with_config(
    nodes: &[CityNodeInput],
    edges: &[EdgeInput],
    config: &CityGraphConfig,
) -> Result<CityGraph, Error> {
    validate_config(config)?;

    info!(
        "Building city graph from {} nodes and {} edges",
        nodes.len(),
        edges.len()
    );

    for (idx, node) in nodes.iter().enumerate() {
        validate_node(idx, node)?;
    }

    let mut by_id: HashMap<CityId, CityNode> = HashMap::with_capacity(nodes.len());
    let mut adj: HashMap<CityId, Vec<AdjacencyEntry>> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        let city = CityNode {
            id: node.id.clone(),
            name: node.name.clone(),
            lat: node.lat,
            lon: node.lon,
        };
        if by_id.insert(node.id.clone(), city).is_some() {
            debug!("Duplicate node id {} - keeping the last record", node.id);
        }
        adj.entry(node.id.clone()).or_default();
    }

    // Undirected links already added, keyed by the sorted id pair
    let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(edges.len());

    for (idx, edge) in edges.iter().enumerate() {
        let (Some(from), Some(to)) = (by_id.get(&edge.from), by_id.get(&edge.to)) else {
            return Err(Error::UnknownReference(format!(
                "edge {idx} ({} -> {}) references unknown node",
                edge.from, edge.to
            )));
        };

        if from.id == to.id {
            trace!("Skipping self-loop on {}", from.id);
            continue;
        }

        let key = if edge.from <= edge.to {
            (edge.from.as_str(), edge.to.as_str())
        } else {
            (edge.to.as_str(), edge.from.as_str())
        };
        if !seen.insert(key) {
            trace!("Skipping duplicate edge {} - {}", edge.from, edge.to);
            continue;
        }

        let distance_km = from.distance_km(to);
        push_entry(&mut adj, &from.id, &to.id, distance_km);
        push_entry(&mut adj, &to.id, &from.id, distance_km);
    }

    let graph = CityGraph {
        by_id,
        adj,
        meta: config.into(),
    };
    info!("{graph} built successfully");

    Ok(graph)
}

fn push_entry(
    adj: &mut HashMap<CityId, Vec<AdjacencyEntry>>,
    from: &str,
    to: &str,
    distance_km: f64,
) {
    if let Some(entries) = adj.get_mut(from) {
        entries.push(AdjacencyEntry {
            to: to.to_owned(),
            distance_km,
        });
    }
}

fn validate_config(config: &CityGraphConfig) -> Result<(), Error> {
    if config.default_radius_km.is_nan() {
        return Err(Error::InvalidArgument(
            "default_radius_km must be a number".to_string(),
        ));
    }
    Ok(())
}

fn validate_node(idx: usize, node: &CityNodeInput) -> Result<(), Error> {
    if node.id.is_empty() {
        return Err(Error::MissingField(format!("node {idx}: id required")));
    }
    if !node.lat.is_finite() || !node.lon.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "node {}: lat/lon must be finite numbers, got ({}, {})",
            node.id, node.lat, node.lon
        )));
    }
    Ok(())
}
