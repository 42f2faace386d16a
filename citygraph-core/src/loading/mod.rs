//! This module is responsible for validating raw node and edge records
//! and building an immutable city graph from them.

mod builder;
mod config;
mod input;

pub use builder::{build_graph, build_graph_with_config};
pub use config::CityGraphConfig;
pub use input::{CityNodeInput, EdgeInput};
