//! Trigger graph: node store, signal dispatch and async propagation.
//!
//! Build a graph with `GraphBuilder` (or load a `GraphDocument`), then feed it
//! host signals: lifecycle (`start`, `on_enable`, `on_disable`), collisions
//! and named events. Matching trigger nodes run as tokio tasks and propagation
//! continues along the edges of the ports each node returns.

mod build_error;
mod builder;
mod config;
mod context;
mod dispatch;
mod edge;
pub(crate) mod logging;
mod node;
mod node_id;
mod propagate;
mod store;
mod trigger;
mod trigger_graph;

pub use build_error::BuildError;
pub use builder::GraphBuilder;
pub use config::GraphConfig;
pub use context::{ObjectRef, TriggerContext};
pub use edge::EdgeData;
pub use node::{Node, NodeOutput, Outputs, Payload};
pub use node_id::NodeId;
pub use store::GraphStore;
pub use trigger::{TriggerKind, TriggerSpec};
pub use trigger_graph::TriggerGraph;
