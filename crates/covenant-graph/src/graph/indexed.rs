//! petgraph::StableGraph wrapper holding trust node state.
//!
//! Node and edge indices are never reused (nothing is ever removed), so
//! ordering by index recovers creation order for nodes and registration
//! order for edges.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use covenant_core::models::{Edge, IdentityHash, TrustNode, TrustStatus};

/// Mutable per-agent state stored on a graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    pub identity_hash: IdentityHash,
    pub status: TrustStatus,
    pub breach_count: u64,
    pub last_breach_at: Option<DateTime<Utc>>,
}

impl NodeState {
    fn new(identity_hash: IdentityHash) -> Self {
        Self {
            identity_hash,
            status: TrustStatus::Trusted,
            breach_count: 0,
            last_breach_at: None,
        }
    }
}

/// The underlying directed graph type. Edges point from a dependency to its dependent.
pub type TrustStableGraph = StableGraph<NodeState, (), Directed>;

/// Wrapper providing indexed access to the trust graph.
#[derive(Debug, Default)]
pub struct IndexedTrustGraph {
    /// The petgraph stable graph.
    pub graph: TrustStableGraph,
    /// Map from identity hash → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl IndexedTrustGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `id`. New nodes start trusted with no breaches.
    pub fn ensure_node(&mut self, id: &IdentityHash) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id.as_str()) {
            return idx;
        }
        let idx = self.graph.add_node(NodeState::new(id.clone()));
        self.node_index.insert(id.0.clone(), idx);
        idx
    }

    /// Look up a node index by identity hash.
    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn state(&self, id: &str) -> Option<&NodeState> {
        self.get_node(id).and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn state_mut(&mut self, id: &str) -> Option<&mut NodeState> {
        let idx = self.get_node(id)?;
        self.graph.node_weight_mut(idx)
    }

    /// Add `parent → child` unless it already exists. Returns true if added.
    pub fn add_dependency(&mut self, parent: NodeIndex, child: NodeIndex) -> bool {
        if self.graph.find_edge(parent, child).is_some() {
            return false;
        }
        self.graph.add_edge(parent, child, ());
        true
    }

    /// Direct dependents of `idx`, in registration order.
    pub fn dependents(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.ordered_neighbors(idx, Direction::Outgoing)
    }

    /// Direct dependencies of `idx`, in registration order.
    pub fn dependencies(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.ordered_neighbors(idx, Direction::Incoming)
    }

    fn ordered_neighbors(&self, idx: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(idx, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (e.id(), other)
            })
            .collect();
        edges.sort_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, node)| node).collect()
    }

    pub fn identity(&self, idx: NodeIndex) -> Option<&IdentityHash> {
        self.graph.node_weight(idx).map(|n| &n.identity_hash)
    }

    fn identities(&self, nodes: Vec<NodeIndex>) -> Vec<IdentityHash> {
        nodes
            .into_iter()
            .filter_map(|n| self.identity(n).cloned())
            .collect()
    }

    /// Owned copy of one node with its adjacency.
    pub fn snapshot_node(&self, idx: NodeIndex) -> Option<TrustNode> {
        let state = self.graph.node_weight(idx)?;
        Some(TrustNode {
            identity_hash: state.identity_hash.clone(),
            status: state.status,
            dependents: self.identities(self.dependents(idx)),
            dependencies: self.identities(self.dependencies(idx)),
            breach_count: state.breach_count,
            last_breach_at: state.last_breach_at,
        })
    }

    /// Owned copies of every node, in creation order.
    pub fn snapshot_nodes(&self) -> Vec<TrustNode> {
        let mut indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        indices.sort();
        indices
            .into_iter()
            .filter_map(|idx| self.snapshot_node(idx))
            .collect()
    }

    /// Every edge, in registration order.
    pub fn snapshot_edges(&self) -> Vec<Edge> {
        let mut indices: Vec<EdgeIndex> = self.graph.edge_indices().collect();
        indices.sort();
        indices
            .into_iter()
            .filter_map(|e| {
                let (from, to) = self.graph.edge_endpoints(e)?;
                Some(Edge {
                    from: self.identity(from)?.clone(),
                    to: self.identity(to)?.clone(),
                })
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
