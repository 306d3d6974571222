//! Optional overrides for a session (CLI args or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options). Only set
//! fields override the env-based config.

/// Optional overrides: owner object, depth guard, verbosity.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Owner object name; lifecycle signals carry it as invoker.
    pub owner: Option<String>,
    /// Maximum propagation depth below a trigger.
    pub max_depth: Option<usize>,
    /// Debug-level logging of dispatch and node execution.
    pub verbose: bool,
}
