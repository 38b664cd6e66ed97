use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),
    #[error("Invalid traffic volume {volume}")]
    InvalidVolume { volume: f64 },
    #[error("Destination set is empty")]
    EmptyDestinations,
    #[error("Duplicate directed edge {0} -> {1}")]
    DuplicateEdge(NodeId, NodeId),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
