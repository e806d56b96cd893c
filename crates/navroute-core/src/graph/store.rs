//! In-memory graph store
//!
//! Nodes live in a slot table and are addressed by [`NodeId`]. Edges are
//! owned by their source node and point at targets by id, never by
//! ownership.

use crate::error::{Result, RouteError};
use crate::graph::types::{NodeId, Weight};
use std::collections::HashMap;

/// Directed weighted edge, owned by its source node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

/// Named vertex with its outgoing edges in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    edges: Vec<Edge>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    slots: Vec<Node>,
    by_name: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no outgoing edges.
    ///
    /// Re-adding an existing name allocates a fresh slot and re-points the
    /// name to it. The old slot is orphaned: it no longer resolves by name
    /// and is not listed by [`Graph::all_nodes`], but edges that already
    /// targeted it keep doing so.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        let id = NodeId(self.slots.len());
        self.slots.push(Node::new(name.clone()));
        if let Some(old) = self.by_name.insert(name, id) {
            tracing::debug!(name = %self.slots[id.0].name, old = %old, new = %id, "node replaced");
        }
        id
    }

    /// Append a directed edge between two named nodes.
    ///
    /// Silently ignored when either endpoint does not exist. Use
    /// [`Graph::try_add_edge`] to surface that as an error instead.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) {
        if let Err(e) = self.try_add_edge(from, to, weight) {
            tracing::debug!(error = %e, "edge ignored");
        }
    }

    /// Append a directed edge, failing with `DanglingEdge` if an endpoint is absent
    pub fn try_add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        let from_id = self
            .get_node(from)
            .ok_or_else(|| RouteError::dangling_edge(from, to, from))?;
        let to_id = self
            .get_node(to)
            .ok_or_else(|| RouteError::dangling_edge(from, to, to))?;

        self.slots[from_id.0].edges.push(Edge {
            target: to_id,
            weight,
        });
        Ok(())
    }

    pub fn get_node(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Like [`Graph::get_node`], but an unknown name is a `NodeNotFound` error
    pub fn require_node(&self, name: &str) -> Result<NodeId> {
        self.get_node(name)
            .ok_or_else(|| RouteError::node_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every live node, in insertion order
    pub fn all_nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.by_name.values().copied().collect();
        ids.sort();
        ids
    }

    /// Node stored in slot `id`, including orphaned slots
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0)
    }

    /// Name of the node in slot `id`, or `"?"` for an id from another graph
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).map(Node::name).unwrap_or("?")
    }

    pub fn edges(&self, id: NodeId) -> &[Edge] {
        self.node(id).map(Node::edges).unwrap_or(&[])
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.by_name.len()
    }

    /// Number of edges stored across all slots
    pub fn edge_count(&self) -> usize {
        self.slots.iter().map(|n| n.edges.len()).sum()
    }
}
