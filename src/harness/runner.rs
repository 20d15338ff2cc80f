//! Benchmark executor: random draws, warmup and measured loops.

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{breadth_first_search, Graph};
use crate::types::{GraphError, GraphResult, NodeId};

use super::config::BenchConfig;
use super::report::{mean, BenchObserver, BenchReport, DrawSummary, LoopSample};

/// Pick `count` distinct names uniformly at random.
pub fn select_distinct<'a, R: Rng + ?Sized>(
    names: &[&'a str],
    count: usize,
    rng: &mut R,
) -> GraphResult<Vec<&'a str>> {
    if count > names.len() {
        return Err(GraphError::InvalidConfig(format!(
            "cannot select {} of {} names",
            count,
            names.len()
        )));
    }
    Ok(rand::seq::index::sample(rng, names.len(), count)
        .into_iter()
        .map(|i| names[i])
        .collect())
}

/// Caller-owned BFS collections, reused across loops.
#[derive(Default)]
struct Scratch {
    pred: HashMap<NodeId, NodeId>,
    visited: HashSet<NodeId>,
    queue: VecDeque<NodeId>,
}

impl Scratch {
    fn clear(&mut self) {
        self.pred.clear();
        self.visited.clear();
        self.queue.clear();
    }

    fn search(&mut self, graph: &Graph, source: NodeId, target: NodeId) -> GraphResult<()> {
        self.clear();
        breadth_first_search(
            graph,
            source,
            target,
            &mut self.pred,
            &mut self.visited,
            &mut self.queue,
        )
    }

    fn path(&self, graph: &Graph, source: &str, target: &str) -> GraphResult<Vec<String>> {
        Ok(graph
            .path_names(source, target, &self.pred)?
            .into_iter()
            .map(String::from)
            .collect())
    }
}

/// Runs BFS benchmarks over randomly shrunk copies of a graph.
pub struct BenchRunner {
    config: BenchConfig,
    rng: StdRng,
}

impl BenchRunner {
    /// Create a runner, seeding its RNG from the config.
    pub fn new(config: BenchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// The configuration this runner uses.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Benchmark BFS from `source` to `target`.
    ///
    /// The full graph must connect the endpoints. Each draw removes random
    /// nodes down to `size`, keeping both endpoints; then every loop
    /// reorders adjacency lists and times one BFS.
    pub fn run(
        &mut self,
        graph: &Graph,
        source: &str,
        target: &str,
        observer: &mut dyn BenchObserver,
    ) -> GraphResult<BenchReport> {
        self.config.validate(graph, source, target)?;
        let started_at = chrono::Utc::now().to_rfc3339();
        let mut scratch = Scratch::default();

        let ends = graph.resolve(&[source, target])?;
        scratch.search(graph, ends[0], ends[1])?;
        let baseline_path = scratch.path(graph, source, target)?;
        observer.on_baseline(&baseline_path);

        info!(
            "benchmarking {} -> {} at {} node(s): {} draw(s) x {} loop(s) (+{} warmup), order {}",
            source,
            target,
            self.config.size,
            self.config.draws,
            self.config.loops_per_draw,
            self.config.warmup_loops_per_draw,
            self.config.sort_order
        );

        // endpoints are never drawn for removal
        let names: Vec<&str> = graph
            .names()
            .filter(|&name| name != source && name != target)
            .collect();
        let remove_count = graph.node_count() - self.config.size;
        let mut draws = Vec::with_capacity(self.config.draws);

        for draw in 0..self.config.draws {
            let summary = self.run_draw(
                graph,
                &names,
                remove_count,
                (source, target),
                draw,
                &mut scratch,
                observer,
            )?;
            observer.on_draw(&summary);
            draws.push(summary);
        }

        let edge_averages: Vec<f64> = draws.iter().map(|d| d.average_edges).collect();
        let time_averages: Vec<f64> = draws.iter().map(|d| d.average_ns).collect();

        Ok(BenchReport {
            started_at,
            source: source.to_string(),
            target: target.to_string(),
            size: self.config.size,
            sort_order: self.config.sort_order,
            baseline_path,
            draws,
            average_edges: mean(&edge_averages),
            average_ns: mean(&time_averages),
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn run_draw(
        &mut self,
        graph: &Graph,
        names: &[&str],
        remove_count: usize,
        (source, target): (&str, &str),
        draw: usize,
        scratch: &mut Scratch,
        observer: &mut dyn BenchObserver,
    ) -> GraphResult<DrawSummary> {
        let (mut sample, attempts, path_exists) =
            self.draw_graph(graph, names, remove_count, (source, target), draw, scratch, observer)?;

        let ends = sample.resolve(&[source, target])?;
        let edges = sample.edge_count();
        let warmup_loops = self.config.warmup_loops_per_draw;
        let sort_order = self.config.sort_order;
        let mut times = Vec::with_capacity(self.config.loops_per_draw);

        for loop_index in 0..warmup_loops + self.config.loops_per_draw {
            sort_order.apply(&mut sample, &mut self.rng)?;
            scratch.clear();

            let start = Instant::now();
            breadth_first_search(
                &sample,
                ends[0],
                ends[1],
                &mut scratch.pred,
                &mut scratch.visited,
                &mut scratch.queue,
            )?;
            let elapsed_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

            let path = if path_exists {
                Some(scratch.path(&sample, source, target)?)
            } else {
                None
            };
            let warmup = loop_index < warmup_loops;
            trace!(
                "draw {} loop {}: {} edges, {} ns",
                draw,
                loop_index,
                edges,
                elapsed_ns
            );
            observer.on_loop(&LoopSample {
                draw,
                loop_index,
                warmup,
                edges,
                elapsed_ns,
                path,
            });

            if !warmup {
                times.push(elapsed_ns as f64);
            }
        }

        let summary = DrawSummary {
            draw,
            attempts,
            node_count: sample.node_count(),
            edge_count: edges,
            path_exists,
            // edge count is fixed within a draw
            average_edges: edges as f64,
            average_ns: mean(&times),
        };
        debug!(
            "draw {}: {} edges, {:.1} ns average",
            draw, summary.edge_count, summary.average_ns
        );
        Ok(summary)
    }

    /// Remove random nodes until a graph acceptable for this draw appears.
    ///
    /// `names` excludes the endpoints, so every draw keeps them; only
    /// `preserve_path` can cause a redraw.
    ///
    /// Returns the graph, the number of attempts and whether the endpoints
    /// are connected in it.
    #[allow(clippy::too_many_arguments)]
    fn draw_graph(
        &mut self,
        graph: &Graph,
        names: &[&str],
        remove_count: usize,
        (source, target): (&str, &str),
        draw: usize,
        scratch: &mut Scratch,
        observer: &mut dyn BenchObserver,
    ) -> GraphResult<(Graph, usize, bool)> {
        for attempt in 1..=self.config.max_retries {
            let doomed = select_distinct(names, remove_count, &mut self.rng)?;
            let sample = graph.remove(doomed)?;

            let ends = sample.resolve(&[source, target])?;
            scratch.search(&sample, ends[0], ends[1])?;
            let path_exists = match scratch.path(&sample, source, target) {
                Ok(_) => true,
                Err(GraphError::TargetUnreachable(_)) => false,
                Err(e) => return Err(e),
            };
            if !path_exists && self.config.preserve_path {
                let reason = "no path between source and target";
                warn!("draw {}: {}, retrying", draw, reason);
                observer.on_retry(draw, reason);
                continue;
            }
            return Ok((sample, attempt, path_exists));
        }

        Err(GraphError::RetriesExhausted {
            draw,
            attempts: self.config.max_retries,
        })
    }
}
