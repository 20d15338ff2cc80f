//! Benchmark configuration.

use serde::Serialize;

use crate::graph::{Graph, SortOrder};
use crate::types::{GraphError, GraphResult};

/// Default number of warmup loops run before each draw's measured loops.
pub const DEFAULT_WARMUP_LOOPS: usize = 20;

/// Default cap on redraws while looking for an acceptable graph.
pub const DEFAULT_MAX_RETRIES: usize = 1000;

/// Parameters for a BFS benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchConfig {
    /// Number of nodes each draw keeps.
    pub size: usize,
    /// Number of random draws.
    pub draws: usize,
    /// Measured loops per draw.
    pub loops_per_draw: usize,
    /// Unmeasured loops per draw, run first.
    pub warmup_loops_per_draw: usize,
    /// Redraw until source and target are connected.
    pub preserve_path: bool,
    /// Neighbor ordering applied before every loop.
    pub sort_order: SortOrder,
    /// RNG seed; `None` seeds from system entropy.
    pub seed: Option<u64>,
    /// Draws tried per draw slot before giving up; only `preserve_path`
    /// rejects a draw.
    pub max_retries: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: 0,
            draws: 1,
            loops_per_draw: 1,
            warmup_loops_per_draw: DEFAULT_WARMUP_LOOPS,
            preserve_path: true,
            sort_order: SortOrder::Random,
            seed: None,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl BenchConfig {
    /// Check the configuration against the graph and endpoints it will run on.
    pub fn validate(&self, graph: &Graph, source: &str, target: &str) -> GraphResult<()> {
        if self.draws == 0 {
            return Err(GraphError::InvalidConfig(
                "number of draws must be positive".into(),
            ));
        }
        if self.loops_per_draw == 0 {
            return Err(GraphError::InvalidConfig(
                "loops per draw must be positive".into(),
            ));
        }
        if self.max_retries == 0 {
            return Err(GraphError::InvalidConfig(
                "max retries must be positive".into(),
            ));
        }
        if self.size > graph.node_count() {
            return Err(GraphError::InvalidConfig(format!(
                "target node count {} is larger than graph node count {}",
                self.size,
                graph.node_count()
            )));
        }
        let endpoints = if source == target { 1 } else { 2 };
        if self.size < endpoints {
            return Err(GraphError::InvalidConfig(format!(
                "size {} cannot keep both endpoints",
                self.size
            )));
        }
        graph.resolve(&[source, target])?;
        Ok(())
    }
}
