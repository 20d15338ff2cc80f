//! Incremental construction of Graph instances.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::rearrange::Rearrange;
use super::Graph;

/// Builder that registers nodes on first mention and links them symmetrically.
///
/// Ids handed out by the builder are provisional: [`GraphBuilder::build`]
/// renumbers nodes into ascending name order.
pub struct GraphBuilder {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty builder sized for `node_count` nodes.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
        }
    }

    /// Number of nodes registered so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether a node with this name has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Register a node if it does not exist yet; returns its provisional id.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Link two nodes, creating either if needed.
    ///
    /// Returns `Ok(false)` when the edge already existed; duplicates are
    /// coalesced rather than rejected.
    pub fn link(&mut self, a: &str, b: &str) -> GraphResult<bool> {
        let a_id = self.add_node(a);
        let b_id = self.add_node(b);
        if a_id == b_id {
            return Err(GraphError::SelfLoop(a.to_string()));
        }
        if self.nodes[a_id].is_neighbor(b_id) {
            return Ok(false);
        }

        self.nodes[a_id].add_neighbor(b_id, b)?;
        if !self.nodes[b_id].is_neighbor(a_id) {
            self.nodes[b_id].add_neighbor(a_id, a)?;
        }
        Ok(true)
    }

    /// Ingest one edge-list record: `[node, neighbor_1, neighbor_2, ...]`.
    ///
    /// `record` is the 1-based position of the record in its source and is
    /// only used for diagnostics. The record is checked as a whole before
    /// anything is registered.
    pub fn add_record<S: AsRef<str>>(&mut self, record: usize, fields: &[S]) -> GraphResult<()> {
        let Some(first) = fields.first() else {
            return Err(GraphError::malformed(record, "node unnamed / empty line"));
        };
        let node = first.as_ref();

        for (col, field) in fields.iter().enumerate() {
            let name = field.as_ref();
            if name.is_empty() {
                return Err(GraphError::malformed(
                    record,
                    format!("field {} is an empty node name", col + 1),
                ));
            }
            if col > 0 && name == node {
                return Err(GraphError::malformed(
                    record,
                    format!("node {} lists itself as a neighbor", node),
                ));
            }
        }

        for field in fields {
            self.add_node(field.as_ref());
        }
        for neighbor in &fields[1..] {
            self.link(node, neighbor.as_ref())?;
        }
        Ok(())
    }

    /// Build the final Graph, with nodes renumbered in ascending name order.
    pub fn build(self) -> Graph {
        let count = self.nodes.len();
        let mut order: Vec<NodeId> = (0..count).collect();
        order.sort_unstable_by(|&a, &b| self.nodes[a].name().cmp(self.nodes[b].name()));

        let mut remap = vec![0; count];
        for (new_id, &old_id) in order.iter().enumerate() {
            remap[old_id] = new_id;
        }

        let mut nodes: Vec<Node> = self
            .nodes
            .into_iter()
            .map(|node| {
                let id = remap[node.id()];
                let neighbors = node.neighbors().iter().map(|&n| remap[n]).collect();
                let (name, _) = node.into_parts();
                Node::with_neighbors(id, name, neighbors)
            })
            .collect();
        nodes.sort_unstable_by_key(Node::id);

        Graph::from_sorted(nodes)
    }

    /// Build the Graph and apply an initial neighbor order.
    pub fn build_with<R: Rearrange + ?Sized>(self, policy: &mut R) -> GraphResult<Graph> {
        let mut graph = self.build();
        graph.rearrange(policy)?;
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
