//! Trigger node: entry point selected by signal kind and tag.

use async_trait::async_trait;
use serde_json::json;

use crate::error::GraphError;
use crate::graph::{Node, NodeId, Outputs, Payload, TriggerContext, TriggerKind, TriggerSpec};

use super::OUT;

/// Trigger node: continues on [`OUT`] when its signal arrives.
///
/// When the signal has an invoker (collision partner, event sender, graph
/// owner), successors receive `{"invoker": <name>, "tag": <tag>}` as payload;
/// otherwise the payload is forwarded unchanged.
pub struct TriggerNode {
    id: NodeId,
    spec: TriggerSpec,
}

impl TriggerNode {
    pub fn new(id: impl Into<NodeId>, kind: TriggerKind, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            spec: TriggerSpec::new(kind, tag),
        }
    }
}

#[async_trait]
impl Node for TriggerNode {
    fn id(&self) -> &NodeId {
        &self.id
    }

    fn trigger(&self) -> Option<&TriggerSpec> {
        Some(&self.spec)
    }

    async fn execute(&self, ctx: &TriggerContext, _payload: Payload) -> Result<Outputs, GraphError> {
        Ok(match ctx.invoker() {
            Some(invoker) => Outputs::with_payload(
                OUT,
                json!({ "invoker": invoker.as_str(), "tag": ctx.tag() }),
            ),
            None => Outputs::port(OUT),
        })
    }
}
