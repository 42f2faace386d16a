//! Host-facing entry points for `citygraph_core`.
//!
//! Hosts that hold loosely typed records (parsed JSON, scripting-language
//! objects converted to [`serde_json::Value`]) hand them over as they are.
//! The shape checks the typed core cannot express happen here, everything
//! else is delegated to the core.

pub mod graph;
pub mod records;

pub use citygraph_core::prelude::*;
pub use citygraph_core::{CityGraphMeta, DEFAULT_RADIUS_KM, EARTH_RADIUS_KM};

pub use graph::{find_nearby_value, graph_from_value};
pub use records::{build_graph_from_values, build_graph_from_values_with_config};
