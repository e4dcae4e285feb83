//! Board error types

use thiserror::Error;

use crate::node::NodeId;

/// Rejected graph edit. The graph is left unchanged whenever one is returned.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node already on the board: {0}")]
    DuplicateNode(NodeId),

    /// An edge refers to a node that is not on the board
    #[error("Edge endpoint not found: {0}")]
    MissingEndpoint(NodeId),

    #[error("Edge already exists: {0}")]
    DuplicateEdge(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
