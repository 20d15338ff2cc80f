//! Criterion benchmarks for bfs-graph.

use std::collections::{HashMap, HashSet, VecDeque};

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use bfs_graph::format::EdgeListWriter;
use bfs_graph::graph::{breadth_first_search, Ascending, Descending, FileOrder, Graph, Shuffle};
use bfs_graph::harness::select_distinct;

/// Random edge-list records: each node links to `edges_per_node` random others.
fn make_records(node_count: usize, edges_per_node: usize) -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..node_count)
        .map(|i| {
            let mut record = vec![format!("node_{:06}", i)];
            for _ in 0..edges_per_node {
                let target = rng.gen_range(0..node_count);
                if target != i {
                    record.push(format!("node_{:06}", target));
                }
            }
            record
        })
        .collect()
}

fn make_graph(node_count: usize, edges_per_node: usize) -> Graph {
    Graph::from_records(make_records(node_count, edges_per_node), &mut FileOrder).unwrap()
}

fn bench_from_records_10k(c: &mut Criterion) {
    let records = make_records(10_000, 3);

    c.bench_function("from_records_10k", |b| {
        b.iter(|| Graph::from_records(&records, &mut FileOrder).unwrap())
    });
}

fn bench_bfs_orders(c: &mut Criterion) {
    let mut graph = make_graph(100_000, 3);
    let source = 0;
    let target = graph.node_count() - 1;
    let mut pred = HashMap::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let mut run = |graph: &Graph| {
        pred.clear();
        visited.clear();
        queue.clear();
        breadth_first_search(graph, source, target, &mut pred, &mut visited, &mut queue).unwrap();
    };

    graph.rearrange(&mut Ascending).unwrap();
    c.bench_function("bfs_100k_ascending", |b| b.iter(|| run(&graph)));

    graph.rearrange(&mut Descending).unwrap();
    c.bench_function("bfs_100k_descending", |b| b.iter(|| run(&graph)));

    graph
        .rearrange(&mut Shuffle::new(StdRng::seed_from_u64(7)))
        .unwrap();
    c.bench_function("bfs_100k_random", |b| b.iter(|| run(&graph)));
}

fn bench_shuffle_100k(c: &mut Criterion) {
    let mut graph = make_graph(100_000, 3);
    let mut rng = StdRng::seed_from_u64(3);

    c.bench_function("shuffle_100k", |b| {
        b.iter(|| graph.rearrange(&mut Shuffle::new(&mut rng)).unwrap())
    });
}

fn bench_remove_half_10k(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let names: Vec<&str> = graph.names().collect();
    let mut rng = StdRng::seed_from_u64(11);
    let doomed = select_distinct(&names, 5_000, &mut rng).unwrap();

    c.bench_function("remove_half_10k", |b| {
        b.iter(|| graph.remove(&doomed).unwrap())
    });
}

fn bench_read_file_10k(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let tmp = NamedTempFile::new().unwrap();
    EdgeListWriter::write_to_file(&graph, tmp.path()).unwrap();

    c.bench_function("read_file_10k", |b| {
        b.iter(|| Graph::from_path(tmp.path(), &mut FileOrder).unwrap())
    });
}

criterion_group!(
    benches,
    bench_from_records_10k,
    bench_bfs_orders,
    bench_shuffle_100k,
    bench_remove_half_10k,
    bench_read_file_10k,
);
criterion_main!(benches);
