//! Run entry points: play a host session over a loaded graph.
//!
//! Re-exports [`host_runtime`], [`run_with_config`], [`run_session`], [`Signal`]
//! and [`RunSummary`].

mod signal;
mod summary;

use tokio_stream::StreamExt;
use triggergraph::{GraphDocument, TriggerGraph};

use crate::config::{Error, RunConfig};

pub use signal::Signal;
pub use summary::RunSummary;

/// Runtime for a host session: a single thread, so continuations interleave
/// at their await points and sibling nodes never run in parallel.
pub fn host_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Loads the document at `config.graph_path` and runs a session with `signals`.
pub async fn run_with_config(config: &RunConfig, signals: &[Signal]) -> Result<RunSummary, Error> {
    let graph = GraphDocument::from_path(&config.graph_path)?.build(config.to_graph_config())?;
    tracing::info!(
        path = %config.graph_path.display(),
        nodes = graph.store().nodes().len(),
        edges = graph.store().edges().len(),
        "Loaded graph"
    );
    Ok(run_session(graph, signals).await)
}

/// Plays the host lifecycle: enable, start, every signal in order, then disable.
///
/// Signals are fired back to back (their propagations overlap); the session
/// waits for the graph to go idle before disabling and again afterwards.
/// Consumes the graph so the event stream ends with it.
///
/// Expects a current-thread runtime ([`host_runtime`]) or a `LocalSet`; on a
/// multi-threaded runtime sibling continuations run in parallel.
pub async fn run_session(graph: TriggerGraph, signals: &[Signal]) -> RunSummary {
    let mut events = graph.subscribe();
    let collector = tokio::spawn(async move {
        let mut summary = RunSummary::default();
        while let Some(item) = events.next().await {
            match item {
                Ok(event) => summary.record(event),
                Err(err) => tracing::warn!(%err, "Summary missed execution events"),
            }
        }
        summary
    });

    graph.on_enable();
    graph.start();
    for signal in signals {
        let launched = signal.fire(&graph);
        tracing::debug!(%signal, launched, "Fired signal");
    }
    graph.wait_idle().await;
    graph.on_disable();
    graph.wait_idle().await;
    drop(graph);

    match collector.await {
        Ok(summary) => summary,
        Err(err) => {
            tracing::error!(%err, "Summary collector failed");
            RunSummary::default()
        }
    }
}
