//! Basic load -> search -> remove flow.

use std::collections::{HashMap, HashSet, VecDeque};

use bfs_graph::*;

fn main() -> GraphResult<()> {
    // Load a small graph from CSV text
    let text = "Singapore,Perth\r\nPerth,Greenland,Iceland\r\nIceland,Greenland";
    let mut graph = Graph::from_reader(&mut text.as_bytes(), &mut FileOrder)?;
    println!("Graph read:\n{}", graph);

    // Search with alphabetical adjacency order
    graph.rearrange(&mut Ascending)?;
    let mut pred = HashMap::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    graph.bfs("Singapore", "Greenland", &mut pred, &mut visited, &mut queue)?;

    let path = graph.path_names("Singapore", "Greenland", &pred)?;
    println!("BFS path: {}", path.join("->"));

    // Derive a graph without Perth
    let reduced = graph.remove(["Perth"])?;
    println!(
        "Without Perth: {} nodes, {} edges",
        reduced.node_count(),
        reduced.edge_count()
    );
    match reduced.shortest_path("Singapore", "Greenland") {
        Ok(path) => println!("BFS path: {}", path.join("->")),
        Err(e) => println!("No path: {}", e),
    }

    Ok(())
}
