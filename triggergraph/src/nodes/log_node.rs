//! Log node: writes a message to the log and continues.

use async_trait::async_trait;

use crate::error::GraphError;
use crate::graph::{Node, NodeId, Outputs, Payload, TriggerContext};

use super::OUT;

pub struct LogNode {
    id: NodeId,
    message: String,
}

impl LogNode {
    pub fn new(id: impl Into<NodeId>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl Node for LogNode {
    fn id(&self) -> &NodeId {
        &self.id
    }

    async fn execute(&self, ctx: &TriggerContext, payload: Payload) -> Result<Outputs, GraphError> {
        tracing::info!(
            node_id = %self.id,
            tag = ctx.tag(),
            invoker = ctx.invoker().map(|o| o.as_str()),
            %payload,
            "{}",
            self.message
        );
        Ok(Outputs::port(OUT))
    }
}
