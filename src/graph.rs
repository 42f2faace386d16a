use serde::Deserialize;
use serde_json::Value;

use citygraph_core::prelude::*;

/// Restores a graph from its serialized form (`{"byId": {...}, "adj": {...}}`)
///
/// # Errors
///
/// `InvalidGraph` if the value lacks either mapping or does not describe a graph
pub fn graph_from_value(value: &Value) -> Result<CityGraph, Error> {
    let has_mapping = |key: &str| value.get(key).is_some_and(Value::is_object);
    if !has_mapping("byId") || !has_mapping("adj") {
        return Err(Error::InvalidGraph(
            "expected an object with byId and adj mappings".to_string(),
        ));
    }

    CityGraph::deserialize(value).map_err(|e| Error::InvalidGraph(e.to_string()))
}

/// Runs a neighbor query against a serialized graph
///
/// # Errors
///
/// `InvalidGraph` for malformed graph values, otherwise the errors of
/// [`find_nearby`]
pub fn find_nearby_value(
    graph: &Value,
    city_id: &str,
    max_km: Option<f64>,
) -> Result<Vec<NearbyResult>, Error> {
    find_nearby(&graph_from_value(graph)?, city_id, max_km)
}
