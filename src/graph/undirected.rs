//! Core graph structure: a name-ordered arena of nodes.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::format::RecordReader;
use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::builder::GraphBuilder;
use super::rearrange::Rearrange;

/// An undirected, unweighted graph without self-loops or multi-edges.
///
/// Nodes live in a single vector sorted by name; a node's [`NodeId`] is its
/// position in that vector and adjacency lists hold ids, never references.
/// The node and edge sets are fixed once built. Only neighbor order may
/// change afterwards, through [`Graph::rearrange`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap nodes that are already sorted, numbered and consistent.
    pub(crate) fn from_sorted(nodes: Vec<Node>) -> Self {
        let index = nodes
            .iter()
            .map(|n| (n.name().to_string(), n.id()))
            .collect();
        Self { nodes, index }
    }

    /// Build a graph from edge-list records, then apply `policy` to every
    /// node's neighbor list.
    ///
    /// Each record is `[node, neighbor_1, neighbor_2, ...]`. Nodes are
    /// created on first mention and repeated edges are coalesced. A record
    /// with a single field declares an isolated node.
    pub fn from_records<I, R, S, P>(records: I, policy: &mut P) -> GraphResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
        P: Rearrange + ?Sized,
    {
        let mut builder = GraphBuilder::new();
        for (i, record) in records.into_iter().enumerate() {
            builder.add_record(i + 1, record.as_ref())?;
        }
        let graph = builder.build_with(policy)?;
        debug!(
            "built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Build a graph from CSV edge-list text.
    pub fn from_reader<P: Rearrange + ?Sized>(
        reader: &mut impl Read,
        policy: &mut P,
    ) -> GraphResult<Self> {
        let records = RecordReader::read_from(reader)?;
        Self::from_records(records, policy)
    }

    /// Build a graph from a CSV edge-list file.
    pub fn from_path<P: Rearrange + ?Sized>(path: &Path, policy: &mut P) -> GraphResult<Self> {
        let records = RecordReader::read_from_file(path)?;
        Self::from_records(records, policy)
    }

    /// Adopt an existing node list as the graph's arena.
    ///
    /// The list must already satisfy every graph invariant: node `i` has
    /// id `i`, names strictly ascending, adjacency symmetric, in range,
    /// without duplicates or self-membership.
    pub fn from_nodes(nodes: Vec<Node>) -> GraphResult<Self> {
        check_nodes(&nodes)?;
        Ok(Self::from_sorted(nodes))
    }

    /// Build a graph from fresh copies of `nodes`, re-linking each node's
    /// neighbors in the source order.
    pub fn copy_from(nodes: &[Node]) -> GraphResult<Self> {
        let mut fresh: Vec<Node> = nodes
            .iter()
            .enumerate()
            .map(|(id, n)| Node::new(id, n.name()))
            .collect();

        for (id, source) in nodes.iter().enumerate() {
            for &neighbor in source.neighbors() {
                let Some(linked) = nodes.get(neighbor) else {
                    return Err(GraphError::InconsistentNodes(format!(
                        "node {} links to unknown id {}",
                        source.name(),
                        neighbor
                    )));
                };
                if fresh[id].is_neighbor(neighbor) {
                    continue;
                }
                fresh[id].add_neighbor(neighbor, linked.name())?;
            }
        }

        Self::from_nodes(fresh)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        // every edge appears in two adjacency lists
        self.nodes.iter().map(Node::neighbor_count).sum::<usize>() / 2
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in ascending name order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a node by name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.id_of(name).map(|id| &self.nodes[id])
    }

    /// Resolve a name to its id.
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Resolve an id to its name.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(Node::name)
    }

    /// Whether a node with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All node names, in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(Node::name)
    }

    /// Neighbor names of a node, in visitation order.
    pub fn neighbor_names(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.nodes
            .get(id)
            .map(Node::neighbors)
            .unwrap_or(&[])
            .iter()
            .map(move |&n| self.nodes[n].name())
    }

    /// Resolve names to ids, failing with every name that does not exist.
    pub(crate) fn resolve(&self, names: &[&str]) -> GraphResult<Vec<NodeId>> {
        let mut ids = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for &name in names {
            match self.id_of(name) {
                Some(id) => ids.push(id),
                None if !missing.iter().any(|m| m == name) => missing.push(name.to_string()),
                None => {}
            }
        }
        if missing.is_empty() {
            Ok(ids)
        } else {
            Err(GraphError::NodeNotFound(missing))
        }
    }

    /// Apply a neighbor-order policy to every node independently.
    ///
    /// Every node's new order is checked before any node is updated; a
    /// policy that adds, drops or duplicates a neighbor fails with
    /// [`GraphError::InvalidReorder`] and leaves the graph untouched.
    pub fn rearrange<R: Rearrange + ?Sized>(&mut self, policy: &mut R) -> GraphResult<()> {
        let mut orders = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let mut order = node.neighbors().to_vec();
            policy.rearrange(&mut order);
            if !node.is_permutation(&order) {
                return Err(GraphError::InvalidReorder {
                    node: node.name().to_string(),
                });
            }
            orders.push(order);
        }

        for (node, order) in self.nodes.iter_mut().zip(orders) {
            node.replace_neighbor_order(order)?;
        }
        Ok(())
    }

    /// Create an independent copy of the graph without the named nodes.
    ///
    /// Every name must exist; otherwise nothing is done and the error lists
    /// all missing names. Surviving nodes keep the relative order of their
    /// surviving neighbors. `self` is not modified.
    pub fn remove<I, S>(&self, names: I) -> GraphResult<Graph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut removed = vec![false; self.nodes.len()];
        let mut missing = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            match self.id_of(name) {
                Some(id) => removed[id] = true,
                None => {
                    missing.insert(name.to_string());
                }
            }
        }
        if !missing.is_empty() {
            return Err(GraphError::NodeNotFound(missing.into_iter().collect()));
        }

        let mut remap: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut next = 0;
        for (old_id, gone) in removed.iter().enumerate() {
            if !gone {
                remap[old_id] = Some(next);
                next += 1;
            }
        }

        let nodes: Vec<Node> = self
            .nodes
            .iter()
            .filter(|n| !removed[n.id()])
            .enumerate()
            .map(|(id, old)| {
                let neighbors = old.neighbors().iter().filter_map(|&n| remap[n]).collect();
                Node::with_neighbors(id, old.name(), neighbors)
            })
            .collect();

        let graph = Self::from_sorted(nodes);
        debug!(
            "removed {} node(s): {} nodes / {} edges remain",
            self.nodes.len() - graph.node_count(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph {{")?;
        for node in &self.nodes {
            write!(f, "    {}: [", node.name())?;
            for (i, name) in self.neighbor_names(node.id()).enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", name)?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "}}")
    }
}

/// Check every arena invariant of a node list.
fn check_nodes(nodes: &[Node]) -> GraphResult<()> {
    let inconsistent = |msg: String| Err(GraphError::InconsistentNodes(msg));

    for (pos, node) in nodes.iter().enumerate() {
        if node.id() != pos {
            return inconsistent(format!(
                "node {} has id {} at position {}",
                node.name(),
                node.id(),
                pos
            ));
        }
        if pos > 0 && nodes[pos - 1].name() >= node.name() {
            return inconsistent(format!(
                "node {} is not in strictly ascending name order",
                node.name()
            ));
        }
        if !node.is_permutation(node.neighbors()) {
            return inconsistent(format!("node {} lists a neighbor twice", node.name()));
        }
        for &neighbor in node.neighbors() {
            if neighbor == pos {
                return Err(GraphError::SelfLoop(node.name().to_string()));
            }
            match nodes.get(neighbor) {
                None => {
                    return inconsistent(format!(
                        "node {} links to unknown id {}",
                        node.name(),
                        neighbor
                    ))
                }
                Some(other) if !other.is_neighbor(pos) => {
                    return inconsistent(format!(
                        "edge {} - {} is not symmetric",
                        node.name(),
                        other.name()
                    ))
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
