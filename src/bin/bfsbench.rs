//! CLI entry point for the `bfsbench` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use bfs_graph::cli::commands;
use bfs_graph::graph::SortOrder;
use bfs_graph::harness::{BenchConfig, DEFAULT_MAX_RETRIES, DEFAULT_WARMUP_LOOPS};
use bfs_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "bfsbench",
    version,
    about = "Benchmark the performance of BFS under different adjacency orderings"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show node and edge counts of a graph file
    Info {
        /// Path to the CSV edge list (UTF-8)
        #[arg(long)]
        graph: PathBuf,
    },
    /// Print every node with its neighbors in visitation order
    Show {
        /// Path to the CSV edge list (UTF-8)
        #[arg(long)]
        graph: PathBuf,
        /// Adjacency order: file, ascending, descending, random
        #[arg(long, default_value = "file")]
        sort_order: String,
        /// Seed for the random order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Find the BFS path between two nodes
    Path {
        /// Path to the CSV edge list (UTF-8)
        #[arg(long)]
        graph: PathBuf,
        /// Adjacency order: file, ascending, descending, random
        #[arg(long, default_value = "file")]
        sort_order: String,
        /// Seed for the random order
        #[arg(long)]
        seed: Option<u64>,
        /// Node to start the search at
        source: String,
        /// Node to find
        target: String,
    },
    /// Write the graph with some nodes removed, as a CSV edge list
    Remove {
        /// Path to the CSV edge list (UTF-8)
        #[arg(long)]
        graph: PathBuf,
        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Nodes to remove
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Time BFS over randomly shrunk copies of the graph
    Bench {
        /// Path to the CSV edge list (UTF-8)
        #[arg(long)]
        graph: PathBuf,
        /// Number of nodes each draw keeps
        #[arg(long)]
        size: usize,
        /// Number of random draws to perform
        #[arg(long)]
        draws: usize,
        /// Measured loops per draw
        #[arg(long)]
        loops_per_draw: usize,
        /// Unmeasured warmup loops per draw
        #[arg(long, default_value_t = DEFAULT_WARMUP_LOOPS)]
        warmup_loops_per_draw: usize,
        /// Adjacency order: file, ascending, descending, random
        #[arg(long, default_value = "random")]
        sort_order: String,
        /// Allow draws where source and target are disconnected
        #[arg(long)]
        no_preserve_path: bool,
        /// Seed for node selection and random orders
        #[arg(long)]
        seed: Option<u64>,
        /// Redraws allowed per draw
        #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
        max_retries: usize,
        /// Node to start the search at
        source: String,
        /// Node to find
        target: String,
    },
}

fn parse_order(name: &str) -> SortOrder {
    match SortOrder::from_name(name) {
        Some(order) => order,
        None => {
            eprintln!("Invalid sort order: {}", name);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Info { graph } => commands::cmd_info(&graph, json),
        Commands::Show {
            graph,
            sort_order,
            seed,
        } => commands::cmd_show(&graph, parse_order(&sort_order), seed, json),
        Commands::Path {
            graph,
            sort_order,
            seed,
            source,
            target,
        } => commands::cmd_path(
            &graph,
            parse_order(&sort_order),
            seed,
            &source,
            &target,
            json,
        ),
        Commands::Remove {
            graph,
            output,
            names,
        } => commands::cmd_remove(&graph, &names, output.as_deref()),
        Commands::Bench {
            graph,
            size,
            draws,
            loops_per_draw,
            warmup_loops_per_draw,
            sort_order,
            no_preserve_path,
            seed,
            max_retries,
            source,
            target,
        } => {
            let config = BenchConfig {
                size,
                draws,
                loops_per_draw,
                warmup_loops_per_draw,
                preserve_path: !no_preserve_path,
                sort_order: parse_order(&sort_order),
                seed,
                max_retries,
            };
            commands::cmd_bench(&graph, &source, &target, config, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedRecord { .. } | GraphError::InconsistentNodes(_) => 2,
            GraphError::NodeNotFound(_) | GraphError::TargetUnreachable(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
