//! Built trigger graph: immutable store plus runtime state.
//!
//! Cheap to clone; every clone refers to the same store, task tracker and
//! event bus. Signal entry points live in `dispatch`, the propagation walk in
//! `propagate`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio_stream::wrappers::BroadcastStream;
use tokio_util::task::TaskTracker;

use crate::stream::{EventBus, ExecutionEvent};

use super::{GraphConfig, GraphStore};

/// Executable graph.
///
/// Created by `GraphBuilder::build()` or `GraphDocument::build()`. Structure is
/// read-only; executions run as tokio tasks on the ambient runtime, so the
/// dispatch entry points must be called from within a runtime.
#[derive(Clone)]
pub struct TriggerGraph {
    pub(super) inner: Arc<Inner>,
}

impl std::fmt::Debug for TriggerGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerGraph").finish_non_exhaustive()
    }
}

pub(super) struct Inner {
    pub(super) store: GraphStore,
    pub(super) config: GraphConfig,
    pub(super) enabled: AtomicBool,
    pub(super) tracker: TaskTracker,
    pub(super) events: EventBus,
}

impl TriggerGraph {
    pub(super) fn new(store: GraphStore, config: GraphConfig) -> Self {
        let enabled = AtomicBool::new(config.start_enabled);
        let events = EventBus::new(config.event_capacity);
        // Closing only affects `wait`: spawning still works, and `wait` resolves
        // whenever the tracker is empty.
        let tracker = TaskTracker::new();
        tracker.close();
        Self {
            inner: Arc::new(Inner {
                store,
                config,
                enabled,
                tracker,
                events,
            }),
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.inner.store
    }

    pub fn config(&self) -> &GraphConfig {
        &self.inner.config
    }

    /// Whether signals other than lifecycle enable/disable are accepted.
    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::SeqCst)
    }

    pub(super) fn set_enabled(&self, enabled: bool) {
        self.inner.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Stream of execution events from now on.
    pub fn subscribe(&self) -> BroadcastStream<ExecutionEvent> {
        self.inner.events.subscribe()
    }

    pub(super) fn publish(&self, event: ExecutionEvent) {
        self.inner.events.publish(event);
    }

    /// Number of propagation tasks still running (root or continuation).
    pub fn in_flight(&self) -> usize {
        self.inner.tracker.len()
    }

    /// Waits until no propagation task is running.
    ///
    /// Continuations are spawned before their parent task exits, so the graph
    /// is idle only once every reachable branch has finished. Never resolves
    /// for a graph running an unbounded cycle.
    pub async fn wait_idle(&self) {
        self.inner.tracker.wait().await;
    }
}
