//! Persisted graph document: the node list and edge list written by an editor.
//!
//! JSON layout:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "type": "trigger", "id": "start1", "kind": "start", "tag": "" },
//!     { "type": "log", "id": "log1", "message": "started" }
//!   ],
//!   "edges": [
//!     { "output_id": "start1", "output_port": "out", "input_id": "log1", "input_port": "in" }
//!   ]
//! }
//! ```
//!
//! Unknown edge endpoints are kept (they match nothing). Editor view state is
//! carried through load/save but never read by the engine.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{EdgeData, GraphBuilder, GraphConfig, Node, NodeId, TriggerGraph, TriggerKind};
use crate::nodes::{DelayNode, InvokeEventNode, LogNode, TriggerNode, YieldNode};

/// One persisted node, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeSpec {
    Trigger {
        id: NodeId,
        kind: TriggerKind,
        #[serde(default)]
        tag: String,
    },
    Log {
        id: NodeId,
        #[serde(default)]
        message: String,
    },
    Delay {
        id: NodeId,
        millis: u64,
    },
    Yield {
        id: NodeId,
        steps: u32,
    },
    InvokeEvent {
        id: NodeId,
        tag: String,
    },
}

impl NodeSpec {
    pub fn id(&self) -> &NodeId {
        match self {
            NodeSpec::Trigger { id, .. }
            | NodeSpec::Log { id, .. }
            | NodeSpec::Delay { id, .. }
            | NodeSpec::Yield { id, .. }
            | NodeSpec::InvokeEvent { id, .. } => id,
        }
    }

    /// Instantiates the built-in node for this entry.
    pub fn into_node(self) -> Arc<dyn Node> {
        match self {
            NodeSpec::Trigger { id, kind, tag } => Arc::new(TriggerNode::new(id, kind, tag)),
            NodeSpec::Log { id, message } => Arc::new(LogNode::new(id, message)),
            NodeSpec::Delay { id, millis } => {
                Arc::new(DelayNode::new(id, Duration::from_millis(millis)))
            }
            NodeSpec::Yield { id, steps } => Arc::new(YieldNode::new(id, steps)),
            NodeSpec::InvokeEvent { id, tag } => Arc::new(InvokeEventNode::new(id, tag)),
        }
    }
}

/// Editor camera state; stored, never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub position: [f32; 3],
    pub scale: [f32; 3],
}

/// Node list plus edge list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewState>,
}

impl GraphDocument {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GraphError::Load(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder holding this document's nodes and edges; add custom nodes before building.
    pub fn into_builder(self) -> GraphBuilder {
        let mut builder = GraphBuilder::new();
        for spec in self.nodes {
            builder.add_node(spec.into_node());
        }
        for edge in self.edges {
            builder.add_edge_data(edge);
        }
        builder
    }

    pub fn build(self, config: GraphConfig) -> Result<TriggerGraph, GraphError> {
        Ok(self.into_builder().with_config(config).build()?)
    }
}
