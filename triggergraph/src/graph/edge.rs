//! Edge data: directed connection from an output port to an input port.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Directed edge `(output_id, output_port) -> (input_id, input_port)`.
///
/// Several edges may share an output port (fan-out) or an input port (fan-in).
/// An edge whose ids do not resolve is dangling and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Source node id.
    pub output_id: NodeId,
    /// Port name on the source node.
    #[serde(alias = "output_port_name")]
    pub output_port: String,
    /// Target node id.
    pub input_id: NodeId,
    /// Port name on the target node.
    #[serde(alias = "input_port_name")]
    pub input_port: String,
}

impl EdgeData {
    pub fn new(
        output_id: impl Into<NodeId>,
        output_port: impl Into<String>,
        input_id: impl Into<NodeId>,
        input_port: impl Into<String>,
    ) -> Self {
        Self {
            output_id: output_id.into(),
            output_port: output_port.into(),
            input_id: input_id.into(),
            input_port: input_port.into(),
        }
    }

    /// True when this edge leaves `node` through `port`.
    pub fn leaves(&self, node: &NodeId, port: &str) -> bool {
        self.output_id == *node && self.output_port == port
    }

    /// True when this edge enters `node` through `port`.
    pub fn enters(&self, node: &NodeId, port: &str) -> bool {
        self.input_id == *node && self.input_port == port
    }
}
