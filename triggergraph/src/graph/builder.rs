//! Graph builder: add nodes and port-to-port edges, then build.
//!
//! `build` checks node ids are unique and logs dangling edges; it does not
//! reject them (they degrade to empty traversal).

use std::collections::HashSet;
use std::sync::Arc;

use super::logging::log_dangling_edge;
use super::{BuildError, EdgeData, GraphConfig, GraphStore, Node, NodeId, TriggerGraph};

/// Collects nodes and edges for a `TriggerGraph`.
///
/// **Interaction**: accepts `Arc<dyn Node>`; produces `TriggerGraph`. Used directly
/// for custom nodes and by `GraphDocument::build` for persisted graphs.
#[derive(Default)]
pub struct GraphBuilder {
    nodes: Vec<Arc<dyn Node>>,
    edges: Vec<EdgeData>,
    config: GraphConfig,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(self, config: GraphConfig) -> Self {
        Self { config, ..self }
    }

    /// Adds a node. Insertion order is kept for dispatch and lookup.
    pub fn add_node(&mut self, node: Arc<dyn Node>) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Adds an edge `(from, from_port) -> (to, to_port)`.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        from_port: impl Into<String>,
        to: impl Into<NodeId>,
        to_port: impl Into<String>,
    ) -> &mut Self {
        self.edges.push(EdgeData::new(from, from_port, to, to_port));
        self
    }

    pub fn add_edge_data(&mut self, edge: EdgeData) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Builds the immutable graph.
    ///
    /// Returns `BuildError::DuplicateNode` if two nodes share an id.
    pub fn build(self) -> Result<TriggerGraph, BuildError> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id().clone()) {
                return Err(BuildError::DuplicateNode(node.id().clone()));
            }
        }

        let store = GraphStore::new(self.nodes, self.edges);
        for edge in store.dangling_edges() {
            log_dangling_edge(edge);
        }
        Ok(TriggerGraph::new(store, self.config))
    }
}
