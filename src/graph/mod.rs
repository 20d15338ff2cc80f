//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod path;
pub mod rearrange;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use path::extract_path;
pub use rearrange::{Ascending, Descending, FileOrder, Rearrange, Shuffle, SortOrder};
pub use traversal::breadth_first_search;
pub use undirected::Graph;
