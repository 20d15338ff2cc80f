//! Graph node: a name plus an ordered adjacency list.

use std::collections::HashSet;

use super::error::{GraphError, GraphResult};
use super::NodeId;

/// A node of an undirected graph.
///
/// Neighbors are stored as [`NodeId`]s into the owning graph's node arena.
/// The list order is the order BFS discovers neighbors in; `neighbor_set`
/// mirrors the list for constant-time adjacency checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: String,
    neighbors: Vec<NodeId>,
    neighbor_set: HashSet<NodeId>,
}

impl Node {
    /// Create a node with no neighbors.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            neighbors: Vec::new(),
            neighbor_set: HashSet::new(),
        }
    }

    /// Create a node with a given neighbor list.
    ///
    /// No duplicate or self check is done here; graphs built from such
    /// nodes go through [`Graph::from_nodes`](crate::Graph::from_nodes),
    /// which validates them.
    pub fn with_neighbors(id: NodeId, name: impl Into<String>, neighbors: Vec<NodeId>) -> Self {
        let neighbor_set = neighbors.iter().copied().collect();
        Self {
            id,
            name: name.into(),
            neighbors,
            neighbor_set,
        }
    }

    /// Position of this node in its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `other` is a neighbor of this node.
    pub fn is_neighbor(&self, other: NodeId) -> bool {
        self.neighbor_set.contains(&other)
    }

    /// Neighbors in visitation order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Number of neighbors.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Append `other` to the end of the neighbor list.
    ///
    /// Only one side of the edge is recorded; graph construction code adds
    /// the reciprocal half.
    pub(crate) fn add_neighbor(&mut self, other: NodeId, other_name: &str) -> GraphResult<()> {
        if other == self.id {
            return Err(GraphError::SelfLoop(self.name.clone()));
        }
        if !self.neighbor_set.insert(other) {
            return Err(GraphError::DuplicateEdge {
                node: self.name.clone(),
                neighbor: other_name.to_string(),
            });
        }
        self.neighbors.push(other);
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (String, Vec<NodeId>) {
        (self.name, self.neighbors)
    }

    /// Whether `order` holds exactly the current neighbors, in any order.
    pub fn is_permutation(&self, order: &[NodeId]) -> bool {
        if order.len() != self.neighbors.len() {
            return false;
        }
        let mut seen = HashSet::with_capacity(order.len());
        order
            .iter()
            .all(|id| self.neighbor_set.contains(id) && seen.insert(*id))
    }

    /// Replace the neighbor order with a permutation of the same neighbors.
    pub fn replace_neighbor_order(&mut self, new_order: Vec<NodeId>) -> GraphResult<()> {
        if !self.is_permutation(&new_order) {
            return Err(GraphError::InvalidReorder {
                node: self.name.clone(),
            });
        }
        self.neighbor_set = new_order.iter().copied().collect();
        self.neighbors = new_order;
        Ok(())
    }
}
