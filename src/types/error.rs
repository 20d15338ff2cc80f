//! Error types for the bfs-graph library.

use thiserror::Error;

/// All errors that can occur in the bfs-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An input record is structurally defective.
    #[error("record {record}: {reason}")]
    MalformedRecord {
        /// 1-based record number in the input.
        record: usize,
        /// What is wrong with the record.
        reason: String,
    },

    /// The two nodes are already linked.
    #[error("node {neighbor} is already a neighbor of node {node}")]
    DuplicateEdge { node: String, neighbor: String },

    /// A node was asked to link to itself.
    #[error("self-edge not allowed on node {0}")]
    SelfLoop(String),

    /// One or more names are not nodes of the graph.
    #[error("node(s) not found in graph: {}", .0.join(", "))]
    NodeNotFound(Vec<String>),

    /// A reorder tried to change which neighbors a node has.
    #[error("reorder of node {node} is not a permutation of its neighbors")]
    InvalidReorder { node: String },

    /// BFS never reached the requested target.
    #[error("target node {0} is not in the predecessor map")]
    TargetUnreachable(String),

    /// The predecessor chain ends (or loops) before reaching the source.
    #[error("predecessor chain broken at node {at}")]
    BrokenChain { at: String },

    /// A caller-supplied traversal collection was not empty on entry.
    #[error("BFS scratch collections must be empty on entry")]
    ScratchNotEmpty,

    /// A node list handed to the graph breaks a graph invariant.
    #[error("inconsistent node list: {0}")]
    InconsistentNodes(String),

    /// Benchmark configuration rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A benchmark draw could not find an acceptable graph.
    #[error("draw {draw}: gave up after {attempts} attempts")]
    RetriesExhausted { draw: usize, attempts: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for bfs-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    /// Shorthand for a [`GraphError::NodeNotFound`] naming a single node.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::NodeNotFound(vec![name.into()])
    }

    pub(crate) fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record,
            reason: reason.into(),
        }
    }
}
