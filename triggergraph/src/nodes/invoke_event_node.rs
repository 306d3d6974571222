//! Invoke-event node: fires a named event back into the graph it runs in.

use async_trait::async_trait;

use crate::error::GraphError;
use crate::graph::{Node, NodeId, Outputs, Payload, TriggerContext};

use super::OUT;

/// Re-entrant dispatch: fires `tag` as a generic event on the context's graph,
/// passing the context invoker along, then continues on [`OUT`].
pub struct InvokeEventNode {
    id: NodeId,
    tag: String,
}

impl InvokeEventNode {
    pub fn new(id: impl Into<NodeId>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
        }
    }
}

#[async_trait]
impl Node for InvokeEventNode {
    fn id(&self) -> &NodeId {
        &self.id
    }

    async fn execute(&self, ctx: &TriggerContext, _payload: Payload) -> Result<Outputs, GraphError> {
        let graph = ctx.graph();
        match ctx.invoker() {
            Some(invoker) => graph.invoke_event_from(invoker.clone(), &self.tag),
            None => graph.invoke_event(&self.tag),
        };
        Ok(Outputs::port(OUT))
    }
}
