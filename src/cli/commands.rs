//! CLI command implementations.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::format::{EdgeListWriter, GraphSummary};
use crate::graph::{FileOrder, Graph, SortOrder};
use crate::harness::{
    BenchConfig, BenchObserver, BenchRunner, DrawSummary, LoopSample, NoopObserver,
};
use crate::types::GraphResult;

/// Load a graph file and apply an adjacency ordering.
pub fn load_graph(path: &Path, order: SortOrder, seed: Option<u64>) -> GraphResult<Graph> {
    let mut graph = Graph::from_path(path, &mut FileOrder)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    order.apply(&mut graph, &mut rng)?;
    Ok(graph)
}

/// Display node and edge counts of a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = Graph::from_path(path, &mut FileOrder)?;
    let isolated = graph
        .nodes()
        .iter()
        .filter(|n| n.neighbor_count() == 0)
        .count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "isolated_nodes": isolated,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Isolated nodes: {}", isolated);
    }
    Ok(())
}

/// Print every node with its neighbors in visitation order.
pub fn cmd_show(path: &Path, order: SortOrder, seed: Option<u64>, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, order, seed)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&GraphSummary::of(&graph)).unwrap_or_default()
        );
    } else {
        println!("{}", graph);
    }
    Ok(())
}

/// Find and print the BFS path between two nodes.
pub fn cmd_path(
    path: &Path,
    order: SortOrder,
    seed: Option<u64>,
    source: &str,
    target: &str,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, order, seed)?;
    let found = graph.shortest_path(source, target)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "source": source,
                "target": target,
                "order": order.name(),
                "hops": found.len() - 1,
                "path": found,
            })
        );
    } else {
        println!("BFS path: {}", found.join(" -> "));
    }
    Ok(())
}

/// Write a copy of the graph with the named nodes removed.
pub fn cmd_remove(path: &Path, names: &[String], output: Option<&Path>) -> GraphResult<()> {
    let graph = Graph::from_path(path, &mut FileOrder)?;
    let reduced = graph.remove(names)?;

    match output {
        Some(out) => {
            EdgeListWriter::write_to_file(&reduced, out)?;
            eprintln!(
                "Wrote {} nodes and {} edges to {}",
                reduced.node_count(),
                reduced.edge_count(),
                out.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            EdgeListWriter::write_to(&reduced, &mut stdout.lock())?;
        }
    }
    Ok(())
}

/// Prints benchmark progress the way the text report reads.
struct ConsoleObserver;

impl BenchObserver for ConsoleObserver {
    fn on_baseline(&mut self, path: &[String]) {
        println!(
            "Path found using file adjacency list ordering: {}.",
            path.join(" -> ")
        );
    }

    fn on_loop(&mut self, sample: &LoopSample) {
        let path = sample
            .path
            .as_ref()
            .map(|p| p.join(" -> "))
            .unwrap_or_else(|| "no path".to_string());
        println!(
            "Draw {}: loop {}: {} edges: {} ns: path found: {}.",
            sample.draw, sample.loop_index, sample.edges, sample.elapsed_ns, path
        );
    }

    fn on_draw(&mut self, summary: &DrawSummary) {
        println!(
            "Draw {}: average edge count: {:.6}: average search time: {:.6} ns.",
            summary.draw, summary.average_edges, summary.average_ns
        );
    }
}

/// Run the BFS benchmark and report averages.
pub fn cmd_bench(
    path: &Path,
    source: &str,
    target: &str,
    config: BenchConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = Graph::from_path(path, &mut FileOrder)?;
    config.validate(&graph, source, target)?;

    if !json {
        println!(
            "Loaded graph with {} nodes and {} edges.",
            graph.node_count(),
            graph.edge_count()
        );
        println!(
            "Benchmarking using a graph size of {} node(s).",
            config.size
        );
        println!(
            "Using {} draw(s) with {} loop(s) per draw (and {} warmup loops per draw).",
            config.draws, config.loops_per_draw, config.warmup_loops_per_draw
        );
        println!("Using adjacency list sort mode {}.", config.sort_order);
        println!(
            "{} a path between the destination node and source node every draw.",
            if config.preserve_path {
                "Ensuring"
            } else {
                "Not ensuring"
            }
        );
    }

    let mut runner = BenchRunner::new(config);
    let report = if json {
        runner.run(&graph, source, target, &mut NoopObserver)?
    } else {
        runner.run(&graph, source, target, &mut ConsoleObserver)?
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!(
            "Overall: node count: {}, average edge count: {:.6}: average search time: {:.6} ns.",
            report.size, report.average_edges, report.average_ns
        );
    }
    Ok(())
}
