//! Execution propagator: run a node, then launch every successor on the
//! returned ports as an independent task.
//!
//! No deduplication: a node reachable along two paths (or through two edges
//! from the same port) runs once per path. Siblings never wait on each other,
//! and a failing or panicking node ends only its own branch.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::GraphError;
use crate::stream::ExecutionEvent;

use super::logging::{log_depth_exceeded, log_node_complete, log_node_error, log_node_start};
use super::{Node, Payload, TriggerContext, TriggerGraph};

impl TriggerGraph {
    /// Starts a root propagation at `start` without waiting for it.
    ///
    /// Dispatch uses this for every matching trigger node; hosts and tests can
    /// call it to run any node (trigger or not) with their own context.
    pub fn propagate(&self, start: Arc<dyn Node>, ctx: TriggerContext, payload: Payload) {
        self.spawn_propagation(start, Arc::new(ctx), payload, 0);
    }

    pub(super) fn spawn_propagation(
        &self,
        node: Arc<dyn Node>,
        ctx: Arc<TriggerContext>,
        payload: Payload,
        depth: usize,
    ) {
        self.inner
            .tracker
            .spawn(self.clone().run_node(node, ctx, payload, depth));
    }

    /// One step of the walk: execute `node`, then spawn its successors.
    fn run_node(
        self,
        node: Arc<dyn Node>,
        ctx: Arc<TriggerContext>,
        payload: Payload,
        depth: usize,
    ) -> BoxFuture<'static, ()> {
        async move {
            let node_id = node.id().clone();
            log_node_start(&node_id, depth);
            self.publish(ExecutionEvent::NodeStarted {
                node_id: node_id.clone(),
                depth,
            });

            let result = AssertUnwindSafe(node.execute(&ctx, payload.clone()))
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(GraphError::ExecutionFailed(panic_message(&*panic))));

            let outputs = match result {
                Ok(outputs) => outputs,
                Err(err) => {
                    let error = err.to_string();
                    log_node_error(&node_id, &error);
                    self.publish(ExecutionEvent::NodeFailed { node_id, error });
                    return;
                }
            };

            let ports = outputs.port_names();
            log_node_complete(&node_id, &ports);
            self.publish(ExecutionEvent::NodeCompleted {
                node_id: node_id.clone(),
                ports,
            });

            let next_depth = depth + 1;
            for output in outputs {
                let next_payload = output.payload.unwrap_or_else(|| payload.clone());
                for next in self.store().next_nodes(&node_id, &output.port) {
                    if self.config().max_depth.is_some_and(|max| next_depth > max) {
                        log_depth_exceeded(next.id(), next_depth);
                        self.publish(ExecutionEvent::DepthExceeded {
                            node_id: next.id().clone(),
                            depth: next_depth,
                        });
                        continue;
                    }
                    self.spawn_propagation(next, ctx.clone(), next_payload.clone(), next_depth);
                }
            }
        }
        .boxed()
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("node panicked: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("node panicked: {}", s)
    } else {
        "node panicked".to_string()
    }
}
