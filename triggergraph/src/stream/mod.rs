//! Execution events for observing a running graph.
//!
//! Every dispatch and node execution is published on a broadcast bus. Subscribe
//! with `TriggerGraph::subscribe`; a subscriber that falls behind the channel
//! capacity skips the oldest events.

use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::graph::{NodeId, TriggerKind};

/// Event emitted while dispatching signals and running propagations.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutionEvent {
    /// A signal was filtered; `matched` roots were launched.
    Dispatched {
        kind: TriggerKind,
        tag: String,
        matched: usize,
    },
    /// A node's `execute` began. Roots have depth 0.
    NodeStarted { node_id: NodeId, depth: usize },
    /// A node's `execute` returned these ports.
    NodeCompleted { node_id: NodeId, ports: Vec<String> },
    /// A node's `execute` returned an error or panicked; its branch ended.
    NodeFailed { node_id: NodeId, error: String },
    /// A continuation into `node_id` was dropped by the depth guard.
    DepthExceeded { node_id: NodeId, depth: usize },
}

/// Broadcast bus for execution events. All subscribers receive all events.
pub(crate) struct EventBus {
    tx: broadcast::Sender<ExecutionEvent>,
}

impl EventBus {
    pub(crate) fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub(crate) fn publish(&self, event: ExecutionEvent) {
        // No receivers is fine.
        let _ = self.tx.send(event);
    }

    pub(crate) fn subscribe(&self) -> BroadcastStream<ExecutionEvent> {
        BroadcastStream::new(self.tx.subscribe())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
