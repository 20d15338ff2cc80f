//! Phase 3 tests: Node removal and arena adoption.

use bfs_graph::graph::{Ascending, FileOrder, Graph};
use bfs_graph::types::{GraphError, Node};

// ==================== Helper ====================

fn sample_graph() -> Graph {
    let records = vec![
        vec!["Singapore", "Perth"],
        vec!["Perth", "Greenland", "Iceland"],
        vec!["Iceland", "Greenland"],
    ];
    Graph::from_records(records, &mut FileOrder).unwrap()
}

fn neighbor_names<'a>(graph: &'a Graph, name: &str) -> Vec<&'a str> {
    graph.neighbor_names(graph.id_of(name).unwrap()).collect()
}

// ==================== Remove Tests ====================

#[test]
fn test_remove_hub() {
    let graph = sample_graph();
    let reduced = graph.remove(["Perth"]).unwrap();

    assert_eq!(reduced.node_count(), 3);
    assert_eq!(reduced.edge_count(), 1);
    assert!(!reduced.contains("Perth"));
    assert_eq!(neighbor_names(&reduced, "Singapore"), Vec::<&str>::new());
    assert_eq!(neighbor_names(&reduced, "Greenland"), vec!["Iceland"]);
    assert_eq!(neighbor_names(&reduced, "Iceland"), vec!["Greenland"]);

    assert!(matches!(
        reduced.shortest_path("Singapore", "Greenland"),
        Err(GraphError::TargetUnreachable(_))
    ));
}

#[test]
fn test_remove_renumbers_densely() {
    let graph = sample_graph();
    let reduced = graph.remove(["Iceland"]).unwrap();

    let names: Vec<&str> = reduced.names().collect();
    assert_eq!(names, vec!["Greenland", "Perth", "Singapore"]);
    for (i, node) in reduced.nodes().iter().enumerate() {
        assert_eq!(node.id(), i);
        assert_eq!(reduced.id_of(node.name()), Some(i));
        for &n in node.neighbors() {
            assert!(n < reduced.node_count());
        }
    }
}

#[test]
fn test_remove_leaves_original_untouched() {
    let graph = sample_graph();
    let before = graph.clone();
    let _ = graph.remove(["Perth", "Iceland"]).unwrap();
    assert_eq!(graph, before);
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_remove_result_is_independent() {
    let graph = sample_graph();
    let mut reduced = graph.remove(["Singapore"]).unwrap();
    reduced.rearrange(&mut Ascending).unwrap();
    assert_eq!(neighbor_names(&graph, "Perth"), vec!["Singapore", "Greenland", "Iceland"]);
    assert_eq!(neighbor_names(&reduced, "Perth"), vec!["Greenland", "Iceland"]);
}

#[test]
fn test_remove_preserves_relative_order() {
    let records = vec![vec!["hub", "e", "b", "d", "a", "c"]];
    let graph = Graph::from_records(records, &mut FileOrder).unwrap();

    let reduced = graph.remove(["b", "a"]).unwrap();
    assert_eq!(neighbor_names(&reduced, "hub"), vec!["e", "d", "c"]);
}

#[test]
fn test_remove_nothing_copies_graph() {
    let graph = sample_graph();
    let copy = graph.remove(Vec::<String>::new()).unwrap();
    assert_eq!(copy, graph);
}

#[test]
fn test_remove_duplicate_names_count_once() {
    let graph = sample_graph();
    let reduced = graph.remove(["Iceland", "Iceland"]).unwrap();
    assert_eq!(reduced.node_count(), 3);
    assert_eq!(reduced.edge_count(), 2);
}

#[test]
fn test_remove_everything() {
    let graph = sample_graph();
    let names: Vec<String> = graph.names().map(String::from).collect();
    let empty = graph.remove(&names).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.edge_count(), 0);
}

#[test]
fn test_remove_reports_all_missing_names_sorted() {
    let graph = sample_graph();
    match graph.remove(["Zanzibar", "Perth", "Atlantis", "Zanzibar"]) {
        Err(GraphError::NodeNotFound(names)) => assert_eq!(names, vec!["Atlantis", "Zanzibar"]),
        other => panic!("Expected NodeNotFound, got {:?}", other),
    }
}

#[test]
fn test_remove_keeps_symmetry() {
    let records = vec![
        vec!["a", "b", "c", "d"],
        vec!["b", "c", "e"],
        vec!["d", "e", "f"],
        vec!["f", "a"],
    ];
    let graph = Graph::from_records(records, &mut FileOrder).unwrap();
    let reduced = graph.remove(["c", "f"]).unwrap();

    for node in reduced.nodes() {
        for &n in node.neighbors() {
            assert!(reduced.node(n).unwrap().is_neighbor(node.id()));
        }
    }
    let degree_sum: usize = reduced.nodes().iter().map(Node::neighbor_count).sum();
    assert_eq!(degree_sum, reduced.edge_count() * 2);
    // a-b, a-d, b-e, d-e
    assert_eq!(reduced.edge_count(), 4);
}

// ==================== Adoption Tests ====================

#[test]
fn test_from_nodes_accepts_consistent_arena() {
    let nodes = vec![
        Node::with_neighbors(0, "A", vec![1, 2]),
        Node::with_neighbors(1, "B", vec![0]),
        Node::with_neighbors(2, "C", vec![0]),
    ];
    let graph = Graph::from_nodes(nodes).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.id_of("C"), Some(2));
    assert_eq!(neighbor_names(&graph, "A"), vec!["B", "C"]);
}

#[test]
fn test_from_nodes_rejects_asymmetric_edge() {
    let nodes = vec![
        Node::with_neighbors(0, "A", vec![1]),
        Node::with_neighbors(1, "B", vec![]),
    ];
    assert!(matches!(
        Graph::from_nodes(nodes),
        Err(GraphError::InconsistentNodes(_))
    ));
}

#[test]
fn test_from_nodes_rejects_unsorted_names() {
    let nodes = vec![Node::new(0, "B"), Node::new(1, "A")];
    assert!(matches!(
        Graph::from_nodes(nodes),
        Err(GraphError::InconsistentNodes(_))
    ));
}

#[test]
fn test_from_nodes_rejects_wrong_id() {
    let nodes = vec![Node::new(0, "A"), Node::new(5, "B")];
    assert!(matches!(
        Graph::from_nodes(nodes),
        Err(GraphError::InconsistentNodes(_))
    ));
}

#[test]
fn test_from_nodes_rejects_dangling_id() {
    let nodes = vec![Node::with_neighbors(0, "A", vec![7])];
    assert!(matches!(
        Graph::from_nodes(nodes),
        Err(GraphError::InconsistentNodes(_))
    ));
}

#[test]
fn test_from_nodes_rejects_self_loop() {
    let nodes = vec![Node::with_neighbors(0, "A", vec![0])];
    match Graph::from_nodes(nodes) {
        Err(GraphError::SelfLoop(name)) => assert_eq!(name, "A"),
        other => panic!("Expected SelfLoop, got {:?}", other),
    }
}

#[test]
fn test_copy_from_matches_source() {
    let mut graph = sample_graph();
    graph.rearrange(&mut Ascending).unwrap();

    let copy = Graph::copy_from(graph.nodes()).unwrap();
    assert_eq!(copy, graph);
}

#[test]
fn test_copy_from_rejects_dangling_id() {
    let nodes = vec![Node::with_neighbors(0, "A", vec![3])];
    assert!(matches!(
        Graph::copy_from(&nodes),
        Err(GraphError::InconsistentNodes(_))
    ));
}
