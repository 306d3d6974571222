//! Graph error types.
//!
//! Returned by `Node::execute` when a node's behavior fails, and by the
//! document loader when a persisted graph cannot be read.

use thiserror::Error;

use crate::graph::BuildError;

/// Graph error.
///
/// A node returning `ExecutionFailed` ends only its own branch of the
/// propagation; siblings and other roots keep running.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Node execution failed with a message (e.g. an external resource was unavailable).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// A graph document could not be read or parsed.
    #[error("load failed: {0}")]
    Load(String),

    /// The node list of a document did not form a valid graph.
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Load(err.to_string())
    }
}
