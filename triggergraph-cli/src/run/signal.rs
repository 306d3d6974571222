//! Signals a session fires after start, parsed from `kind:value` strings.

use std::fmt;
use std::str::FromStr;

use triggergraph::{ObjectRef, TriggerGraph};

/// One host signal.
///
/// Text form: `event:TAG`, `event:TAG@INVOKER`, `trigger-enter:OBJ`,
/// `trigger-exit:OBJ`, `collision-enter:OBJ`, `collision-exit:OBJ`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    Event {
        tag: String,
        invoker: Option<String>,
    },
    TriggerEnter(String),
    TriggerExit(String),
    CollisionEnter(String),
    CollisionExit(String),
}

impl Signal {
    /// Fires this signal on `graph`; returns the number of roots launched.
    pub fn fire(&self, graph: &TriggerGraph) -> usize {
        match self {
            Signal::Event { tag, invoker: None } => graph.invoke_event(tag),
            Signal::Event {
                tag,
                invoker: Some(invoker),
            } => graph.invoke_event_from(ObjectRef::new(invoker.as_str()), tag),
            Signal::TriggerEnter(other) => graph.on_trigger_enter(ObjectRef::new(other.as_str())),
            Signal::TriggerExit(other) => graph.on_trigger_exit(ObjectRef::new(other.as_str())),
            Signal::CollisionEnter(other) => {
                graph.on_collision_enter(ObjectRef::new(other.as_str()))
            }
            Signal::CollisionExit(other) => graph.on_collision_exit(ObjectRef::new(other.as_str())),
        }
    }
}

impl FromStr for Signal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| format!("signal must look like kind:value, got {:?}", s))?;
        let object = || {
            if value.is_empty() {
                Err(format!("signal {:?} needs an object name", kind))
            } else {
                Ok(value.to_string())
            }
        };
        match kind {
            "event" => {
                let (tag, invoker) = match value.split_once('@') {
                    Some((tag, invoker)) => (tag, Some(invoker.to_string())),
                    None => (value, None),
                };
                Ok(Signal::Event {
                    tag: tag.to_string(),
                    invoker,
                })
            }
            "trigger-enter" => object().map(Signal::TriggerEnter),
            "trigger-exit" => object().map(Signal::TriggerExit),
            "collision-enter" => object().map(Signal::CollisionEnter),
            "collision-exit" => object().map(Signal::CollisionExit),
            other => Err(format!("unknown signal kind {:?}", other)),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Event { tag, invoker: None } => write!(f, "event:{}", tag),
            Signal::Event {
                tag,
                invoker: Some(invoker),
            } => write!(f, "event:{}@{}", tag, invoker),
            Signal::TriggerEnter(o) => write!(f, "trigger-enter:{}", o),
            Signal::TriggerExit(o) => write!(f, "trigger-exit:{}", o),
            Signal::CollisionEnter(o) => write!(f, "collision-enter:{}", o),
            Signal::CollisionExit(o) => write!(f, "collision-exit:{}", o),
        }
    }
}
