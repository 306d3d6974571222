//! Graph build error.
//!
//! Returned by `GraphBuilder::build` when the node list is not a valid graph.
//! Dangling edges are not an error: they are kept and yield empty traversal.

use thiserror::Error;

use super::NodeId;

/// Error when building a trigger graph.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Two nodes were added with the same id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),
}
