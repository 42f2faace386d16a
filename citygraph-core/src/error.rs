use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Edge references unknown node: {0}")]
    UnknownReference(String),
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
