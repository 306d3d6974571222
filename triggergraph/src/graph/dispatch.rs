//! Signal dispatcher: host lifecycle, collision and event entry points.
//!
//! Each signal builds one `TriggerContext`, selects the trigger nodes of its
//! kind whose tag is empty or equal to the context tag, and launches one root
//! propagation per match without waiting for any of them. Every entry point
//! returns the number of roots launched.

use std::sync::Arc;

use crate::stream::ExecutionEvent;

use super::logging::{log_dispatch, log_dispatch_suppressed};
use super::{Node, ObjectRef, Payload, TriggerContext, TriggerGraph, TriggerKind};

impl TriggerGraph {
    /// Context for a signal on this graph.
    pub fn context(&self, invoker: Option<ObjectRef>, tag: impl Into<String>) -> TriggerContext {
        TriggerContext::new(self.clone(), invoker, tag)
    }

    /// Launches a root propagation for every trigger node of `kind` matching `ctx.tag()`.
    ///
    /// Ignores the enabled flag; the host entry points below apply it.
    pub fn dispatch(&self, kind: TriggerKind, ctx: TriggerContext) -> usize {
        let roots: Vec<Arc<dyn Node>> = self
            .store()
            .nodes_of_kind(kind)
            .filter(|n| n.trigger().is_some_and(|t| t.matches_tag(ctx.tag())))
            .cloned()
            .collect();
        let matched = roots.len();
        log_dispatch(kind, ctx.tag(), matched);
        self.publish(ExecutionEvent::Dispatched {
            kind,
            tag: ctx.tag().to_string(),
            matched,
        });

        let ctx = Arc::new(ctx);
        for node in roots {
            self.spawn_propagation(node, ctx.clone(), Payload::Null, 0);
        }
        matched
    }

    fn dispatch_if_enabled(&self, kind: TriggerKind, invoker: Option<ObjectRef>, tag: &str) -> usize {
        if !self.is_enabled() {
            log_dispatch_suppressed(kind, tag);
            return 0;
        }
        self.dispatch(kind, self.context(invoker, tag))
    }

    fn lifecycle_context(&self, kind: TriggerKind) -> TriggerContext {
        self.context(
            self.config().owner.clone(),
            kind.signal_tag().unwrap_or_default(),
        )
    }

    /// Host lifecycle: start.
    pub fn start(&self) -> usize {
        let tag = TriggerKind::Start.signal_tag().unwrap_or_default();
        self.dispatch_if_enabled(TriggerKind::Start, self.config().owner.clone(), tag)
    }

    /// Host lifecycle: enable. Re-enables dispatch, runs every trigger node's
    /// enable hook, then dispatches the enable signal.
    pub fn on_enable(&self) -> usize {
        self.set_enabled(true);
        for node in self.store().trigger_nodes() {
            node.on_graph_enabled(self);
        }
        self.dispatch(TriggerKind::Enable, self.lifecycle_context(TriggerKind::Enable))
    }

    /// Host lifecycle: disable. Runs every trigger node's disable hook,
    /// dispatches the disable signal, then suppresses further signals.
    ///
    /// Executions already in flight keep running.
    pub fn on_disable(&self) -> usize {
        for node in self.store().trigger_nodes() {
            node.on_graph_disabled(self);
        }
        let launched =
            self.dispatch(TriggerKind::Disable, self.lifecycle_context(TriggerKind::Disable));
        self.set_enabled(false);
        launched
    }

    /// Fires a generic named event without invoker.
    pub fn invoke_event(&self, tag: &str) -> usize {
        self.dispatch_if_enabled(TriggerKind::Event, None, tag)
    }

    /// Fires a generic named event on behalf of `invoker`.
    pub fn invoke_event_from(&self, invoker: ObjectRef, tag: &str) -> usize {
        self.dispatch_if_enabled(TriggerKind::Event, Some(invoker), tag)
    }

    /// `other` entered a non-physical trigger volume.
    pub fn on_trigger_enter(&self, other: ObjectRef) -> usize {
        self.collision(TriggerKind::TriggerEnter, other)
    }

    /// `other` left a non-physical trigger volume.
    pub fn on_trigger_exit(&self, other: ObjectRef) -> usize {
        self.collision(TriggerKind::TriggerExit, other)
    }

    /// A solid collision with `other` began.
    pub fn on_collision_enter(&self, other: ObjectRef) -> usize {
        self.collision(TriggerKind::CollisionEnter, other)
    }

    /// A solid collision with `other` ended.
    pub fn on_collision_exit(&self, other: ObjectRef) -> usize {
        self.collision(TriggerKind::CollisionExit, other)
    }

    fn collision(&self, kind: TriggerKind, other: ObjectRef) -> usize {
        self.dispatch_if_enabled(kind, Some(other), kind.signal_tag().unwrap_or_default())
    }
}
