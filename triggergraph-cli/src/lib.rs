//! triggergraph-cli library: reusable host session logic for other crates.
//!
//! Loads a graph document, plays the host lifecycle around a list of signals
//! (enable → start → signals → disable) and reports what ran.
//!
//! ## Usage
//!
//! ```rust,no_run,ignore
//! let config = triggergraph_cli::RunConfig::from_env("door.json")?;
//! let signals = vec!["event:open".parse()?];
//! let summary = triggergraph_cli::run_with_config(&config, &signals).await?;
//! println!("{}", summary);
//! ```

mod config;
mod run;

pub use config::{Error, RunConfig, RunOptions};
pub use run::{host_runtime, run_session, run_with_config, RunSummary, Signal};

#[cfg(test)]
mod tests;
