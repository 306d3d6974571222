//! Node contract: id, optional trigger capability, async execute.
//!
//! `execute` may finish immediately or suspend across any number of scheduler
//! steps (timers, waits). It reports which output ports propagation continues on.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GraphError;

use super::{NodeId, TriggerContext, TriggerGraph, TriggerSpec};

/// Auxiliary value passed along edges, independent of the context. Roots receive `Null`.
pub type Payload = Value;

/// One output port to continue on, with an optional replacement payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeOutput {
    pub port: String,
    /// `None` forwards the node's input payload unchanged.
    pub payload: Option<Payload>,
}

/// Ordered output ports returned by `Node::execute`.
///
/// Continuations are launched in this order. The same port may appear twice,
/// in which case its successors run twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outputs(Vec<NodeOutput>);

impl Outputs {
    /// No continuation: propagation ends at this node.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Continue on one port, forwarding the input payload.
    pub fn port(port: impl Into<String>) -> Self {
        Self::none().and(port)
    }

    /// Continue on one port with a new payload.
    pub fn with_payload(port: impl Into<String>, payload: Payload) -> Self {
        Self::none().and_payload(port, payload)
    }

    /// Continue on several ports, forwarding the input payload.
    pub fn ports<I, P>(ports: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        ports.into_iter().fold(Self::none(), |acc, port| acc.and(port))
    }

    pub fn and(mut self, port: impl Into<String>) -> Self {
        self.0.push(NodeOutput {
            port: port.into(),
            payload: None,
        });
        self
    }

    pub fn and_payload(mut self, port: impl Into<String>, payload: Payload) -> Self {
        self.0.push(NodeOutput {
            port: port.into(),
            payload: Some(payload),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeOutput> {
        self.0.iter()
    }

    pub fn port_names(&self) -> Vec<String> {
        self.0.iter().map(|o| o.port.clone()).collect()
    }
}

impl IntoIterator for Outputs {
    type Item = NodeOutput;
    type IntoIter = std::vec::IntoIter<NodeOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A unit of behavior in a trigger graph.
///
/// Action nodes only implement `id` and `execute`; trigger nodes also return a
/// `TriggerSpec` from `trigger` and may use the enable/disable hooks to set up
/// or release node-local resources. Hooks are called by the lifecycle entry
/// points only, never by propagation.
///
/// **Interaction**: stored as `Arc<dyn Node>` in `GraphStore`; executed by the
/// propagator with the dispatch's shared `TriggerContext`.
#[async_trait]
pub trait Node: Send + Sync {
    fn id(&self) -> &NodeId;

    /// Trigger capability; `None` for nodes reached only through edges.
    fn trigger(&self) -> Option<&TriggerSpec> {
        None
    }

    async fn execute(&self, ctx: &TriggerContext, payload: Payload) -> Result<Outputs, GraphError>;

    fn on_graph_enabled(&self, _graph: &TriggerGraph) {}

    fn on_graph_disabled(&self, _graph: &TriggerGraph) {}
}
