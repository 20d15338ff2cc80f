//! Text I/O for CSV edge lists.

pub mod reader;
pub mod writer;

pub use reader::RecordReader;
pub use writer::{escape_field, EdgeListWriter, GraphSummary};
