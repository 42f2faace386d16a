use hashbrown::HashSet;
use log::debug;
use serde_json::{Map, Value};

use citygraph_core::prelude::*;

/// Builds a city graph from loosely typed node and edge records
///
/// `nodes` must be an array of `{id, name?, lat, lon}` objects and `edges`
/// an array of `{from, to}` objects. Ids are strings; `name` is optional
/// but must be a string when present.
///
/// # Errors
///
/// - `InvalidArgument` if either argument is not an array, a record is not
///   an object, an id or name is not a string, or a coordinate is not a
///   finite number
/// - `MissingField` if a node has no id, a null id or an empty one
/// - `UnknownReference` if an edge endpoint is not the string id of a node
pub fn build_graph_from_values(nodes: &Value, edges: &Value) -> Result<CityGraph, Error> {
    build_graph_from_values_with_config(nodes, edges, &CityGraphConfig::default())
}

/// Same as [`build_graph_from_values`] with an explicit configuration
///
/// # Errors
///
/// See [`build_graph_from_values`]
pub fn build_graph_from_values_with_config(
    nodes: &Value,
    edges: &Value,
    config: &CityGraphConfig,
) -> Result<CityGraph, Error> {
    let (Some(nodes), Some(edges)) = (nodes.as_array(), edges.as_array()) else {
        return Err(Error::InvalidArgument(
            "nodes and edges must be arrays".to_string(),
        ));
    };

    let nodes = nodes
        .iter()
        .enumerate()
        .map(|(idx, record)| node_from_value(idx, record))
        .collect::<Result<Vec<_>, _>>()?;

    // Edge shape and references are checked together, in input order
    let known: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let edges = edges
        .iter()
        .enumerate()
        .map(|(idx, record)| edge_from_value(idx, record, &known))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} node and {} edge records", nodes.len(), edges.len());

    build_graph_with_config(&nodes, &edges, config)
}

fn node_from_value(idx: usize, record: &Value) -> Result<CityNodeInput, Error> {
    let record = as_object(record, || format!("node {idx} must be an object"))?;

    let id = match record.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            return Err(Error::MissingField(format!("node {idx}: id required")));
        }
        Some(other) => {
            return Err(Error::InvalidArgument(format!(
                "node {idx}: id must be a string, got {other}"
            )));
        }
    };

    let coordinate = |key: &str| {
        record
            .get(key)
            .and_then(Value::as_f64)
            .filter(|value| value.is_finite())
            .ok_or_else(|| {
                Error::InvalidArgument(format!("node {id}: {key} must be a finite number"))
            })
    };
    let lat = coordinate("lat")?;
    let lon = coordinate("lon")?;

    let name = match record.get("name") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(name.clone()),
        Some(other) => {
            return Err(Error::InvalidArgument(format!(
                "node {id}: name must be a string, got {other}"
            )));
        }
    };

    Ok(CityNodeInput { id, name, lat, lon })
}

fn edge_from_value(
    idx: usize,
    record: &Value,
    known: &HashSet<&str>,
) -> Result<EdgeInput, Error> {
    let record = as_object(record, || format!("edge {idx} must be an object"))?;

    // Node ids are strings, so any other endpoint value cannot match
    let endpoint = |key: &str| -> Result<CityId, Error> {
        match record.get(key).and_then(Value::as_str) {
            Some(id) if known.contains(id) => Ok(id.to_string()),
            _ => Err(Error::UnknownReference(format!(
                "edge {idx}: {key} references unknown node {}",
                record.get(key).unwrap_or(&Value::Null)
            ))),
        }
    };
    let from = endpoint("from")?;
    let to = endpoint("to")?;

    Ok(EdgeInput { from, to })
}

fn as_object(
    record: &Value,
    message: impl FnOnce() -> String,
) -> Result<&Map<String, Value>, Error> {
    record
        .as_object()
        .ok_or_else(|| Error::InvalidArgument(message()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builds_from_json_records() {
        let graph = build_graph_from_values(
            &json!([
                {"id": "MTY", "name": "Monterrey", "lat": 25.6866, "lon": -100.3161},
                {"id": "SAL", "name": "Saltillo", "lat": 25.4383, "lon": -100.9737}
            ]),
            &json!([{"from": "MTY", "to": "SAL"}]),
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node("MTY").unwrap().name.as_deref(), Some("Monterrey"));
        assert_eq!(graph.neighbors("SAL").unwrap()[0].to, "MTY");
    }

    #[test]
    fn non_string_ids_are_rejected() {
        for id in [json!(1), json!(2.0), json!(true), json!(["A"]), json!({"id": "A"})] {
            let err = build_graph_from_values(
                &json!([{"id": id, "lat": 1, "lon": 1}]),
                &json!([]),
            )
            .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{id}");
        }

        // 1 and "1" never collapse into one node
        let err = build_graph_from_values(
            &json!([{"id": 1, "lat": 1, "lon": 1}, {"id": "1", "lat": 2, "lon": 2}]),
            &json!([]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument("node 0: id must be a string, got 1".to_string())
        );
    }

    #[test]
    fn non_string_endpoints_do_not_match_string_ids() {
        let nodes = json!([{"id": "1", "lat": 1, "lon": 1}, {"id": "2", "lat": 2, "lon": 2}]);

        let err = build_graph_from_values(&nodes, &json!([{"from": 1, "to": "2"}])).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownReference("edge 0: from references unknown node 1".to_string())
        );

        let graph = build_graph_from_values(&nodes, &json!([{"from": "1", "to": "2"}])).unwrap();
        assert_eq!(graph.neighbors("1").unwrap()[0].to, "2");
    }

    #[test]
    fn name_must_be_a_string_when_present() {
        let graph = build_graph_from_values(
            &json!([{"id": "A", "name": null, "lat": 1, "lon": 1}]),
            &json!([]),
        )
        .unwrap();
        assert!(graph.node("A").unwrap().name.is_none());

        let err = build_graph_from_values(
            &json!([{"id": "A", "name": 5, "lat": 1, "lon": 1}]),
            &json!([]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn arrays_required() {
        for (nodes, edges) in [
            (Value::Null, json!([])),
            (json!([]), json!({})),
            (json!({}), json!([])),
            (json!("nodes"), json!(42)),
        ] {
            let err = build_graph_from_values(&nodes, &edges).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{nodes} / {edges}");
        }
    }

    #[test]
    fn node_must_be_object() {
        for record in [Value::Null, json!("invalid"), json!(123), json!([1, 2])] {
            let err = build_graph_from_values(&json!([record]), &json!([])).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidArgument("node 0 must be an object".to_string())
            );
        }
    }

    #[test]
    fn node_id_required() {
        for record in [
            json!({"lat": 25, "lon": -100}),
            json!({"id": null, "lat": 25, "lon": -100}),
            json!({"id": "", "lat": 25, "lon": -100}),
        ] {
            let err = build_graph_from_values(&json!([record]), &json!([])).unwrap_err();
            assert!(matches!(err, Error::MissingField(_)), "{record}");
        }
    }

    #[test]
    fn coordinates_must_be_numbers() {
        for record in [
            json!({"id": "X", "lat": "25", "lon": -100}),
            json!({"id": "X", "lat": 25, "lon": "invalid"}),
            json!({"id": "X", "lat": null, "lon": -100}),
            json!({"id": "X", "lon": -100}),
        ] {
            let err = build_graph_from_values(&json!([record]), &json!([])).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{record}");
        }
    }

    #[test]
    fn edge_must_be_object() {
        let nodes = json!([{"id": "A", "lat": 1, "lon": 1}, {"id": "B", "lat": 2, "lon": 2}]);
        for record in [Value::Null, json!(42)] {
            let err = build_graph_from_values(&nodes, &json!([record])).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
    }

    #[test]
    fn edge_errors_follow_input_order() {
        let nodes = json!([{"id": "A", "lat": 1, "lon": 1}]);

        let err = build_graph_from_values(&nodes, &json!([{"from": "A", "to": "X"}, null]))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownReference(_)));

        let err = build_graph_from_values(&nodes, &json!([null, {"from": "A", "to": "X"}]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = build_graph_from_values(&nodes, &json!([{"from": "A"}])).unwrap_err();
        assert!(matches!(err, Error::UnknownReference(_)));
    }
}
