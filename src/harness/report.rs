//! Benchmark results.

use serde::Serialize;

use crate::graph::SortOrder;

/// One timed BFS run.
#[derive(Debug, Clone, Serialize)]
pub struct LoopSample {
    /// Draw this loop belongs to.
    pub draw: usize,
    /// Loop index within the draw, warmup loops first.
    pub loop_index: usize,
    /// Whether this loop is excluded from averages.
    pub warmup: bool,
    /// Edge count of the draw's graph.
    pub edges: usize,
    /// BFS wall time in nanoseconds.
    pub elapsed_ns: u64,
    /// Path found, or `None` when the endpoints are disconnected.
    pub path: Option<Vec<String>>,
}

/// Averages over the measured loops of one draw.
#[derive(Debug, Clone, Serialize)]
pub struct DrawSummary {
    pub draw: usize,
    /// Graphs drawn until one was accepted.
    pub attempts: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub path_exists: bool,
    pub average_edges: f64,
    pub average_ns: f64,
}

/// Result of a whole benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// When the run started (RFC 3339).
    pub started_at: String,
    pub source: String,
    pub target: String,
    pub size: usize,
    pub sort_order: SortOrder,
    /// Path in the full graph with file adjacency order.
    pub baseline_path: Vec<String>,
    pub draws: Vec<DrawSummary>,
    /// Mean of the per-draw edge averages.
    pub average_edges: f64,
    /// Mean of the per-draw time averages, in nanoseconds.
    pub average_ns: f64,
}

/// Arithmetic mean; zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Receives benchmark progress as it happens.
pub trait BenchObserver {
    /// The baseline path was found.
    fn on_baseline(&mut self, _path: &[String]) {}

    /// A draw was rejected and will be redrawn.
    fn on_retry(&mut self, _draw: usize, _reason: &str) {}

    /// A loop finished.
    fn on_loop(&mut self, _sample: &LoopSample) {}

    /// A draw finished.
    fn on_draw(&mut self, _summary: &DrawSummary) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl BenchObserver for NoopObserver {}
