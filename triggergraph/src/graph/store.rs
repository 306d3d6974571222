//! Graph store: node arena plus edge list, with neighbor lookup by port.
//!
//! Nodes keep insertion order; an id index maps edge endpoints to nodes.
//! Read-only once built.

use std::collections::HashMap;
use std::sync::Arc;

use super::{EdgeData, Node, NodeId, TriggerKind};

/// Owns the nodes and edges of one graph.
pub struct GraphStore {
    nodes: Vec<Arc<dyn Node>>,
    index: HashMap<NodeId, usize>,
    edges: Vec<EdgeData>,
}

impl GraphStore {
    pub(super) fn new(nodes: Vec<Arc<dyn Node>>, edges: Vec<EdgeData>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id().clone(), i))
            .collect();
        Self {
            nodes,
            index,
            edges,
        }
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Arc<dyn Node>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeData] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Arc<dyn Node>> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Nodes carrying a trigger capability, in insertion order.
    pub fn trigger_nodes(&self) -> impl Iterator<Item = &Arc<dyn Node>> + '_ {
        self.nodes.iter().filter(|n| n.trigger().is_some())
    }

    /// Trigger nodes of `kind`, in insertion order.
    pub fn nodes_of_kind(&self, kind: TriggerKind) -> impl Iterator<Item = &Arc<dyn Node>> + '_ {
        self.nodes
            .iter()
            .filter(move |n| n.trigger().is_some_and(|t| t.kind == kind))
    }

    /// Nodes reached by edges leaving `(node, output_port)`, in edge order.
    ///
    /// One entry per edge: a target connected twice is returned twice.
    /// Dangling edges, at either end, yield nothing.
    pub fn next_nodes(&self, node: &NodeId, output_port: &str) -> Vec<Arc<dyn Node>> {
        if !self.index.contains_key(node) {
            return Vec::new();
        }
        self.edges
            .iter()
            .filter(|e| e.leaves(node, output_port))
            .filter_map(|e| self.node(&e.input_id).cloned())
            .collect()
    }

    /// Nodes reaching `(node, input_port)`, in edge order. Mirror of `next_nodes`.
    pub fn prev_nodes(&self, node: &NodeId, input_port: &str) -> Vec<Arc<dyn Node>> {
        if !self.index.contains_key(node) {
            return Vec::new();
        }
        self.edges
            .iter()
            .filter(|e| e.enters(node, input_port))
            .filter_map(|e| self.node(&e.output_id).cloned())
            .collect()
    }

    /// Edges with at least one endpoint that resolves to no node.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &EdgeData> + '_ {
        self.edges.iter().filter(|e| {
            !self.index.contains_key(&e.output_id) || !self.index.contains_key(&e.input_id)
        })
    }
}
