use geo::LineString;
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use itertools::Itertools;
use serde_json::json;

use super::{AdjacencyEntry, CityGraph, CityNode};
use crate::Error;

impl CityGraph {
    /// Converts the graph to a `GeoJSON` `FeatureCollection`.
    ///
    /// Cities become `Point` features and every undirected link a single
    /// `LineString` feature. Cities are emitted in id order, then links in
    /// the adjacency order of their lexicographically smaller endpoint.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let cities = self.by_id.values().sorted_by(|a, b| a.id.cmp(&b.id));

        let mut features = Vec::with_capacity(self.node_count() + self.edge_count());
        let mut links = Vec::new();

        for city in cities {
            features.push(city_feature(city)?);

            for entry in self.adj.get(&city.id).into_iter().flatten() {
                if city.id < entry.to {
                    links.push(link_feature(city, entry, self)?);
                }
            }
        }
        features.extend(links);

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn city_feature(city: &CityNode) -> Result<Feature, Error> {
    let point: geo::Point<f64> = city.location().into();

    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&point)),
        "properties": {
            "id": city.id,
            "name": city.name,
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn link_feature(
    from: &CityNode,
    entry: &AdjacencyEntry,
    graph: &CityGraph,
) -> Result<Feature, Error> {
    let to = graph
        .node(&entry.to)
        .ok_or_else(|| Error::InvalidGraph(format!("link to unknown city {}", entry.to)))?;

    let line = LineString::new(vec![from.location().into(), to.location().into()]);

    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&line)),
        "properties": {
            "from": from.id,
            "to": to.id,
            "distance_km": entry.distance_km,
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::{CityNodeInput, EdgeInput, build_graph};

    #[test]
    fn features_for_cities_and_links() {
        let nodes = vec![
            CityNodeInput::new("NYC", 40.7128, -74.0060),
            CityNodeInput::new("LAX", 34.0522, -118.2437),
            CityNodeInput::new("CHI", 41.8781, -87.6298),
            CityNodeInput::new("MIA", 25.7617, -80.1918),
        ];
        let edges = vec![
            EdgeInput::new("NYC", "CHI"),
            EdgeInput::new("NYC", "MIA"),
            EdgeInput::new("CHI", "LAX"),
            EdgeInput::new("MIA", "LAX"),
        ];
        let graph = build_graph(&nodes, &edges).unwrap();

        let collection = graph.to_geojson().unwrap();
        assert_eq!(collection.features.len(), 4 + 4);

        let first = &collection.features[0];
        assert_eq!(first.property("id").and_then(|v| v.as_str()), Some("CHI"));

        // CHI was linked to NYC before LAX
        let link = &collection.features[4];
        assert_eq!(link.property("from").and_then(|v| v.as_str()), Some("CHI"));
        assert_eq!(link.property("to").and_then(|v| v.as_str()), Some("NYC"));

        let link = &collection.features[5];
        assert_eq!(link.property("to").and_then(|v| v.as_str()), Some("LAX"));
        assert!(link.property("distance_km").and_then(|v| v.as_f64()).unwrap() > 2000.0);
    }

    #[test]
    fn geojson_string_is_a_feature_collection() {
        let graph = build_graph(&[CityNodeInput::new("A", 1.0, 2.0)], &[]).unwrap();
        let text = graph.to_geojson_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["geometry"]["type"], "Point");
        assert_eq!(value["features"][0]["geometry"]["coordinates"][0], 2.0);
    }
}
