//! Built-in nodes: the trigger node and a few action/flow nodes.
//!
//! Each continues on the single port [`OUT`]. Custom behavior implements
//! [`Node`](crate::graph::Node) directly and is added through `GraphBuilder`.

mod delay_node;
mod invoke_event_node;
mod log_node;
mod trigger_node;
mod yield_node;

pub use delay_node::DelayNode;
pub use invoke_event_node::InvokeEventNode;
pub use log_node::LogNode;
pub use trigger_node::TriggerNode;
pub use yield_node::YieldNode;

/// Output port used by every built-in node.
pub const OUT: &str = "out";
