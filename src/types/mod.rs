//! All data types for the bfs-graph library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Index of a node within the graph that owns it.
///
/// Ids are handed out in ascending name order, so comparing two ids of the
/// same graph compares the node names.
pub type NodeId = usize;
