//! Trigger kinds and the trigger sub-capability of a node.
//!
//! Dispatch selects nodes by comparing a discriminant, not by inspecting node types:
//! a node is a trigger when `Node::trigger` returns a `TriggerSpec`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of external signal a trigger node reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Host lifecycle: first start.
    Start,
    /// Host lifecycle: graph enabled.
    Enable,
    /// Host lifecycle: graph disabled.
    Disable,
    /// Another object entered a non-physical trigger volume.
    TriggerEnter,
    /// Another object left a non-physical trigger volume.
    TriggerExit,
    /// Solid collision began.
    CollisionEnter,
    /// Solid collision ended.
    CollisionExit,
    /// Generic named event fired by application code.
    Event,
}

impl TriggerKind {
    /// Tag carried by the context of a lifecycle or collision signal.
    ///
    /// `None` for `Event`, whose tag is chosen by the caller.
    pub fn signal_tag(&self) -> Option<&'static str> {
        match self {
            TriggerKind::Start => Some("Start"),
            TriggerKind::Enable => Some("OnEnable"),
            TriggerKind::Disable => Some("OnDisable"),
            TriggerKind::TriggerEnter => Some("TriggerEnter"),
            TriggerKind::TriggerExit => Some("TriggerExit"),
            TriggerKind::CollisionEnter => Some("CollisionEnter"),
            TriggerKind::CollisionExit => Some("CollisionExit"),
            TriggerKind::Event => None,
        }
    }

}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TriggerKind::Start => "start",
            TriggerKind::Enable => "enable",
            TriggerKind::Disable => "disable",
            TriggerKind::TriggerEnter => "trigger_enter",
            TriggerKind::TriggerExit => "trigger_exit",
            TriggerKind::CollisionEnter => "collision_enter",
            TriggerKind::CollisionExit => "collision_exit",
            TriggerKind::Event => "event",
        };
        f.write_str(name)
    }
}

/// Trigger capability of a node: which signal kind it reacts to, filtered by tag.
///
/// An empty tag matches any signal tag of the same kind; otherwise the match is
/// exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSpec {
    pub kind: TriggerKind,
    #[serde(default)]
    pub tag: String,
}

impl TriggerSpec {
    pub fn new(kind: TriggerKind, tag: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
        }
    }

    /// Matches every signal of `kind`.
    pub fn any(kind: TriggerKind) -> Self {
        Self::new(kind, "")
    }

    pub fn matches_tag(&self, tag: &str) -> bool {
        self.tag.is_empty() || self.tag == tag
    }
}
