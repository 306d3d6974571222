//! Session summary collected from the graph's execution events.

use std::fmt;

use triggergraph::{ExecutionEvent, NodeId, TriggerKind};

/// What a session dispatched and executed, in event order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// `(kind, tag, roots launched)` per dispatch.
    pub dispatched: Vec<(TriggerKind, String, usize)>,
    /// Nodes whose execute completed, once per execution.
    pub executed: Vec<NodeId>,
    /// Nodes whose execute failed, with the error text.
    pub failed: Vec<(NodeId, String)>,
    /// Continuations dropped by the depth guard.
    pub depth_exceeded: usize,
}

impl RunSummary {
    pub(crate) fn record(&mut self, event: ExecutionEvent) {
        match event {
            ExecutionEvent::Dispatched { kind, tag, matched } => {
                self.dispatched.push((kind, tag, matched))
            }
            ExecutionEvent::NodeStarted { .. } => {}
            ExecutionEvent::NodeCompleted { node_id, .. } => self.executed.push(node_id),
            ExecutionEvent::NodeFailed { node_id, error } => self.failed.push((node_id, error)),
            ExecutionEvent::DepthExceeded { .. } => self.depth_exceeded += 1,
        }
    }

    /// Times `id` completed.
    pub fn count(&self, id: &str) -> usize {
        self.executed.iter().filter(|n| n.as_str() == id).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, tag, matched) in &self.dispatched {
            writeln!(f, "[dispatch] {} tag={:?} matched={}", kind, tag, matched)?;
        }
        for id in &self.executed {
            writeln!(f, "[ran] {}", id)?;
        }
        for (id, error) in &self.failed {
            writeln!(f, "[failed] {}: {}", id, error)?;
        }
        if self.depth_exceeded > 0 {
            writeln!(f, "[depth] {} continuation(s) dropped", self.depth_exceeded)?;
        }
        write!(
            f,
            "{} execution(s), {} failure(s)",
            self.executed.len(),
            self.failed.len()
        )
    }
}
