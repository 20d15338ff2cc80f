//! bfs-graph: undirected graph engine for studying BFS cost.
//!
//! Builds graphs from CSV edge lists, derives copies with nodes removed,
//! reorders adjacency lists, and runs breadth-first search into
//! caller-owned collections so traversal can be timed on its own.

pub mod cli;
pub mod format;
pub mod graph;
pub mod harness;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeListWriter, GraphSummary, RecordReader};
pub use graph::{
    breadth_first_search, extract_path, Ascending, Descending, FileOrder, Graph, GraphBuilder,
    Rearrange, Shuffle, SortOrder,
};
pub use harness::{BenchConfig, BenchObserver, BenchReport, BenchRunner, NoopObserver};
pub use types::{GraphError, GraphResult, Node, NodeId};
