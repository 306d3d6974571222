//! Delay node: suspends for a wall-clock duration, then continues.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::GraphError;
use crate::graph::{Node, NodeId, Outputs, Payload, TriggerContext};

use super::OUT;

pub struct DelayNode {
    id: NodeId,
    duration: Duration,
}

impl DelayNode {
    pub fn new(id: impl Into<NodeId>, duration: Duration) -> Self {
        Self {
            id: id.into(),
            duration,
        }
    }
}

#[async_trait]
impl Node for DelayNode {
    fn id(&self) -> &NodeId {
        &self.id
    }

    async fn execute(&self, _ctx: &TriggerContext, _payload: Payload) -> Result<Outputs, GraphError> {
        tokio::time::sleep(self.duration).await;
        Ok(Outputs::port(OUT))
    }
}
