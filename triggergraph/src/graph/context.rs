//! Trigger context: one immutable value per signal occurrence.
//!
//! Created by the dispatcher and shared by every node of the propagation it starts.
//! Holds the originating graph (so nodes can query neighbors or fire events),
//! the optional invoker object, and the signal tag.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TriggerGraph;

/// Opaque identity of a host object (the invoker of an event, the other
/// participant of a collision, the owner of a graph).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectRef(String);

impl ObjectRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Immutable per-signal context. Fields are read-only after construction.
#[derive(Clone)]
pub struct TriggerContext {
    graph: TriggerGraph,
    invoker: Option<ObjectRef>,
    tag: String,
}

impl TriggerContext {
    pub fn new(graph: TriggerGraph, invoker: Option<ObjectRef>, tag: impl Into<String>) -> Self {
        Self {
            graph,
            invoker,
            tag: tag.into(),
        }
    }

    /// Graph the signal was dispatched on.
    pub fn graph(&self) -> &TriggerGraph {
        &self.graph
    }

    pub fn invoker(&self) -> Option<&ObjectRef> {
        self.invoker.as_ref()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Debug for TriggerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerContext")
            .field("invoker", &self.invoker)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
