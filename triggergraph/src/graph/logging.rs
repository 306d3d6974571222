//! Logging utilities for graph execution.
//!
//! Structured `tracing` events for dispatch, node execution and authoring faults.

use super::{EdgeData, NodeId, TriggerKind};

/// Log a filtered signal and how many roots it launched.
pub fn log_dispatch(kind: TriggerKind, tag: &str, matched: usize) {
    tracing::debug!(%kind, tag, matched, "Dispatching signal");
}

/// Log a signal dropped because the graph is disabled.
pub fn log_dispatch_suppressed(kind: TriggerKind, tag: &str) {
    tracing::debug!(%kind, tag, "Graph disabled, signal suppressed");
}

/// Log node execution start.
pub fn log_node_start(node_id: &NodeId, depth: usize) {
    tracing::debug!(node_id = %node_id, depth, "Starting node execution");
}

/// Log node execution completion with the ports it continues on.
pub fn log_node_complete(node_id: &NodeId, ports: &[String]) {
    tracing::debug!(node_id = %node_id, ?ports, "Node execution complete");
}

/// Log a failed or panicked node. The branch below it is abandoned.
pub fn log_node_error(node_id: &NodeId, error: &str) {
    tracing::error!(node_id = %node_id, error, "Node execution failed");
}

/// Log an edge whose endpoint does not resolve.
pub fn log_dangling_edge(edge: &EdgeData) {
    tracing::warn!(
        output_id = %edge.output_id,
        output_port = %edge.output_port,
        input_id = %edge.input_id,
        input_port = %edge.input_port,
        "Dangling edge"
    );
}

/// Log a continuation dropped by the depth guard.
pub fn log_depth_exceeded(node_id: &NodeId, depth: usize) {
    tracing::warn!(node_id = %node_id, depth, "Propagation depth limit reached");
}
