//! Graph runtime config: owner object, depth guard, initial enabled state.

use super::ObjectRef;

/// Config for a built graph.
///
/// **Interaction**: passed to `GraphBuilder::with_config` or `GraphDocument::build`.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Host object owning the graph; lifecycle signals carry it as invoker.
    pub owner: Option<ObjectRef>,
    /// Maximum propagation depth below a root. `None` leaves termination to the
    /// graph author: running tasks hold their own graph handle, so a reachable
    /// cycle runs until the runtime shuts down.
    ///
    /// Depth counts within one root propagation only. An event re-dispatched from
    /// inside the graph (`InvokeEventNode`) starts new roots at depth 0, so an
    /// event ping-pong between trigger nodes is not bounded by this guard.
    pub max_depth: Option<usize>,
    /// Whether the graph accepts signals before the first `on_enable`.
    pub start_enabled: bool,
    /// Capacity of the execution event channel (lagging subscribers skip events).
    pub event_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            owner: None,
            max_depth: None,
            start_enabled: true,
            event_capacity: 256,
        }
    }
}
