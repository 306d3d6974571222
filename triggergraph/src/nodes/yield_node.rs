//! Yield node: suspends for a number of scheduler steps, then continues.
//!
//! Each step hands control back to the runtime once, letting sibling tasks
//! progress; the frame-stepped counterpart of a timer.

use async_trait::async_trait;

use crate::error::GraphError;
use crate::graph::{Node, NodeId, Outputs, Payload, TriggerContext};

use super::OUT;

pub struct YieldNode {
    id: NodeId,
    steps: u32,
}

impl YieldNode {
    pub fn new(id: impl Into<NodeId>, steps: u32) -> Self {
        Self {
            id: id.into(),
            steps,
        }
    }
}

#[async_trait]
impl Node for YieldNode {
    fn id(&self) -> &NodeId {
        &self.id
    }

    async fn execute(&self, _ctx: &TriggerContext, _payload: Payload) -> Result<Outputs, GraphError> {
        for _ in 0..self.steps {
            tokio::task::yield_now().await;
        }
        Ok(Outputs::port(OUT))
    }
}
