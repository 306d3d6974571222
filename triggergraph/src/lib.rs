//! # Trigger graphs for Rust
//!
//! A directed graph of nodes connected by named ports. External signals (host
//! lifecycle, collisions, named events) select matching trigger nodes; each
//! match starts an asynchronous propagation that runs the node and continues
//! into every node connected to the output ports it returns.
//!
//! ## Design Principles
//!
//! - **Read-only graph**: nodes live in an id-indexed store; edges refer to
//!   node ids, never to nodes. Nothing mutates the graph while it runs.
//! - **Immutable context**: one `TriggerContext` per signal, shared by every
//!   node of the propagation. Per-edge data travels as a separate payload.
//! - **Independent branches**: every continuation is its own tokio task, so a
//!   suspended or failed branch never holds back its siblings.
//! - **One scheduling domain**: run graphs on a current-thread runtime or a
//!   `LocalSet`. Branches then interleave at await points instead of running
//!   in parallel, and nodes may share state without locking order concerns.
//!
//! ## Main Modules
//!
//! - [`graph`]: `GraphBuilder`, `TriggerGraph`, `Node`, `TriggerSpec`; build graphs and feed them signals.
//! - [`nodes`]: built-in `TriggerNode`, `LogNode`, `DelayNode`, `YieldNode`, `InvokeEventNode`.
//! - [`document`]: persisted node/edge lists (`GraphDocument`).
//! - [`stream`]: `ExecutionEvent`s published while graphs run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use triggergraph::{GraphBuilder, LogNode, TriggerKind, TriggerNode};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut builder = GraphBuilder::new();
//! builder
//!     .add_node(Arc::new(TriggerNode::new("start1", TriggerKind::Start, "")))
//!     .add_node(Arc::new(LogNode::new("log1", "graph started")))
//!     .add_edge("start1", "out", "log1", "in");
//! let graph = builder.build().unwrap();
//!
//! graph.start();
//! graph.wait_idle().await;
//! # }
//! ```

pub mod document;
pub mod error;
pub mod graph;
pub mod nodes;
pub mod stream;

pub use document::{GraphDocument, NodeSpec, ViewState};
pub use error::GraphError;
pub use graph::{
    BuildError, EdgeData, GraphBuilder, GraphConfig, GraphStore, Node, NodeId, NodeOutput,
    ObjectRef, Outputs, Payload, TriggerContext, TriggerGraph, TriggerKind, TriggerSpec,
};
pub use nodes::{DelayNode, InvokeEventNode, LogNode, TriggerNode, YieldNode, OUT};
pub use stream::ExecutionEvent;
