//! Writes graphs back out as CSV edge lists and JSON summaries.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::error::GraphResult;

/// Writer for CSV edge lists readable by [`RecordReader`](super::RecordReader).
///
/// One record per node in name order: the node followed by its neighbors in
/// current visitation order. Isolated nodes get a one-field record.
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Write a graph to a CSV file.
    pub fn write_to_file(graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    pub fn write_to(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        for node in graph.nodes() {
            writer.write_all(escape_field(node.name()).as_bytes())?;
            for name in graph.neighbor_names(node.id()) {
                writer.write_all(b",")?;
                writer.write_all(escape_field(name).as_bytes())?;
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render a graph as CSV text.
    pub fn to_csv_string(graph: &Graph) -> GraphResult<String> {
        let mut buf = Vec::new();
        Self::write_to(graph, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }
}

/// Quote a field if it holds a separator, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serializable snapshot of a graph, for JSON output.
#[derive(Debug, Serialize)]
pub struct GraphSummary<'a> {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
    /// Neighbor names per node, in visitation order.
    pub adjacency: BTreeMap<&'a str, Vec<&'a str>>,
}

impl<'a> GraphSummary<'a> {
    /// Capture a graph's counts and adjacency lists.
    pub fn of(graph: &'a Graph) -> Self {
        let adjacency = graph
            .nodes()
            .iter()
            .map(|n| (n.name(), graph.neighbor_names(n.id()).collect()))
            .collect();
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            adjacency,
        }
    }
}
