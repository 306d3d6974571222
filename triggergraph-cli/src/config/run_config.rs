//! Run config: graph path, owner, depth guard, logging. Can be filled from env.
//!
//! Interacts with [`RunOptions`](super::RunOptions) and converts into
//! triggergraph's [`GraphConfig`].

use std::path::PathBuf;

use triggergraph::{GraphConfig, ObjectRef};

use super::RunOptions;

/// Error type used for config loading and runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Run config for one session over one graph document.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Path of the JSON graph document.
    pub graph_path: PathBuf,
    /// Owner object name. Default: unset.
    pub owner: Option<String>,
    /// Propagation depth guard. Default: unbounded.
    pub max_depth: Option<usize>,
    /// Execution event buffer for the session summary. Default: 1024.
    pub event_capacity: usize,
    /// When true, log at debug level.
    pub verbose: bool,
}

impl RunConfig {
    /// Config for `graph_path` with every other field at its default.
    pub fn new(graph_path: impl Into<PathBuf>) -> Self {
        Self {
            graph_path: graph_path.into(),
            owner: None,
            max_depth: None,
            event_capacity: 1024,
            verbose: false,
        }
    }

    /// Fill config from env vars.
    ///
    /// `TRIGGERGRAPH_OWNER`, `TRIGGERGRAPH_MAX_DEPTH` and `TRIGGERGRAPH_EVENT_CAPACITY`
    /// are optional; a set but unparsable number is an error.
    pub fn from_env(graph_path: impl Into<PathBuf>) -> Result<Self, Error> {
        let mut config = Self::new(graph_path);
        config.owner = std::env::var("TRIGGERGRAPH_OWNER").ok();
        if let Ok(depth) = std::env::var("TRIGGERGRAPH_MAX_DEPTH") {
            config.max_depth = Some(depth.parse().map_err(|_| {
                format!("TRIGGERGRAPH_MAX_DEPTH must be a number, got {:?}", depth)
            })?);
        }
        if let Ok(capacity) = std::env::var("TRIGGERGRAPH_EVENT_CAPACITY") {
            config.event_capacity = capacity.parse().map_err(|_| {
                format!(
                    "TRIGGERGRAPH_EVENT_CAPACITY must be a number, got {:?}",
                    capacity
                )
            })?;
        }
        Ok(config)
    }

    /// Apply optional overrides from `RunOptions` to this config.
    pub fn apply_options(&mut self, options: &RunOptions) {
        if let Some(owner) = &options.owner {
            self.owner = Some(owner.clone());
        }
        if options.max_depth.is_some() {
            self.max_depth = options.max_depth;
        }
        self.verbose = options.verbose;
    }

    /// Graph config for the session.
    pub fn to_graph_config(&self) -> GraphConfig {
        GraphConfig {
            owner: self.owner.as_deref().map(ObjectRef::new),
            max_depth: self.max_depth,
            event_capacity: self.event_capacity,
            ..Default::default()
        }
    }
}
