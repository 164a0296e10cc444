//! Phase 3 tests: depth-first and breadth-first traversal.

use adjgraph::graph::{bfs_traverse, dfs_traverse, Graph, GraphBuilder, TraversalOrder};
use adjgraph::types::{GraphError, Node, NodeId};

// ==================== Helpers ====================

const SAMPLE_EDGES: [(usize, usize, i64); 15] = [
    (1, 2, 9),
    (1, 3, 5),
    (2, 1, 3),
    (2, 4, 18),
    (3, 4, 12),
    (4, 2, 2),
    (4, 8, 8),
    (5, 4, 9),
    (5, 6, 2),
    (5, 7, 5),
    (5, 8, 3),
    (6, 7, 1),
    (7, 5, 4),
    (7, 8, 6),
    (8, 5, 3),
];

/// Directed, weighted graph with nodes 1..=8 and the given one-based links.
fn build(edges: &[(usize, usize, i64)]) -> (Graph<i32>, Vec<NodeId>) {
    let mut graph = Graph::new(true, true);
    let ids: Vec<NodeId> = (1..=8).map(|v| graph.add_node(v)).collect();
    for &(from, to, weight) in edges {
        graph.add_edge(ids[from - 1], ids[to - 1], weight).unwrap();
    }
    (graph, ids)
}

fn payloads(nodes: &[&Node<i32>]) -> Vec<i32> {
    nodes.iter().map(|n| *n.data()).collect()
}

// ==================== Sample Graph Tests ====================

#[test]
fn test_sample_traversal_orders() {
    // 8 -> 5 makes 5, 6 and 7 reachable from 1 as well
    let (graph, _) = build(&SAMPLE_EDGES);

    assert_eq!(payloads(&graph.dfs().unwrap()), vec![1, 2, 4, 8, 5, 6, 7, 3]);
    assert_eq!(payloads(&graph.bfs().unwrap()), vec![1, 2, 3, 4, 8, 5, 6, 7]);
}

#[test]
fn test_sample_without_return_link() {
    let edges: Vec<_> = SAMPLE_EDGES
        .iter()
        .copied()
        .filter(|&(from, to, _)| (from, to) != (8, 5))
        .collect();
    let (graph, _) = build(&edges);

    assert_eq!(payloads(&graph.dfs().unwrap()), vec![1, 2, 4, 8, 3]);
    assert_eq!(payloads(&graph.bfs().unwrap()), vec![1, 2, 3, 4, 8]);
}

#[test]
fn test_traversal_from_other_start() {
    let (graph, ids) = build(&SAMPLE_EDGES);

    assert_eq!(payloads(&graph.dfs_from(ids[4]).unwrap()), vec![5, 4, 2, 1, 3, 8, 6, 7]);
    assert_eq!(payloads(&graph.bfs_from(ids[4]).unwrap()), vec![5, 4, 6, 7, 8, 2, 1, 3]);
    assert_eq!(
        payloads(&graph.traverse_from(ids[5], TraversalOrder::BreadthFirst).unwrap()),
        vec![6, 7, 5, 8, 4, 2, 1, 3]
    );
}

#[test]
fn test_bfs_marks_on_enqueue() {
    // Diamond: 4 is reachable through both 2 and 3 but must appear once
    let mut builder = GraphBuilder::new().directed(true);
    builder.nodes([1, 2, 3, 4]).link(0, 1, 0).link(0, 2, 0).link(1, 3, 0).link(2, 3, 0);
    let graph = builder.build().unwrap();

    assert_eq!(payloads(&graph.bfs().unwrap()), vec![1, 2, 3, 4]);
    assert_eq!(payloads(&graph.dfs().unwrap()), vec![1, 2, 4, 3]);
}

// ==================== Edge Case Tests ====================

#[test]
fn test_single_node_traversal() {
    let mut graph = Graph::directed(false);
    graph.add_node(42);

    assert_eq!(payloads(&graph.dfs().unwrap()), vec![42]);
    assert_eq!(payloads(&graph.bfs().unwrap()), vec![42]);
}

#[test]
fn test_self_loop_traversal() {
    let mut graph = Graph::undirected(false);
    let a = graph.add_node(1);
    graph.add_edge(a, a, 0).unwrap();

    assert_eq!(graph[a].degree(), 2);
    assert_eq!(payloads(&graph.dfs().unwrap()), vec![1]);
    assert_eq!(payloads(&graph.bfs().unwrap()), vec![1]);
}

#[test]
fn test_empty_graph_traversal_fails() {
    let graph: Graph<i32> = Graph::new(true, true);

    assert_eq!(graph.dfs().unwrap_err(), GraphError::EmptyGraph);
    assert_eq!(graph.bfs().unwrap_err(), GraphError::EmptyGraph);
}

#[test]
fn test_positional_traversal_reports_errors() {
    let empty: Graph<i32> = Graph::new(true, true);
    assert_eq!(dfs_traverse(&empty, 0).unwrap_err(), GraphError::EmptyGraph);
    assert_eq!(bfs_traverse(&empty, 0).unwrap_err(), GraphError::EmptyGraph);

    let (graph, _) = build(&SAMPLE_EDGES);
    assert!(matches!(
        dfs_traverse(&graph, 8),
        Err(GraphError::IndexOutOfRange { index: 8, len: 8 })
    ));
    assert!(matches!(
        bfs_traverse(&graph, 20),
        Err(GraphError::IndexOutOfRange { index: 20, len: 8 })
    ));
    assert_eq!(bfs_traverse(&graph, 5).unwrap(), vec![5, 6, 4, 7, 3, 1, 0, 2]);
}

#[test]
fn test_traversal_after_removal_uses_new_indices() {
    let (mut graph, ids) = build(&SAMPLE_EDGES);
    graph.remove_node(ids[0]).unwrap();

    // Node 2 now sits at index 0
    assert_eq!(graph.nodes()[0].data(), &2);
    assert_eq!(payloads(&graph.dfs().unwrap()), vec![2, 4, 8, 5, 6, 7]);
    assert_eq!(payloads(&graph.bfs().unwrap()), vec![2, 4, 8, 5, 6, 7]);
}

#[test]
fn test_undirected_traversal_reaches_component() {
    let mut graph = Graph::undirected(false);
    let ids: Vec<_> = (0..6).map(|v| graph.add_node(v)).collect();
    graph.add_edge(ids[3], ids[0], 0).unwrap();
    graph.add_edge(ids[3], ids[4], 0).unwrap();
    graph.add_edge(ids[1], ids[2], 0).unwrap();

    assert_eq!(payloads(&graph.dfs().unwrap()), vec![0, 3, 4]);
    assert_eq!(payloads(&graph.bfs_from(ids[1]).unwrap()), vec![1, 2]);
}

#[test]
fn test_traversal_with_foreign_start_fails() {
    let (graph, _) = build(&SAMPLE_EDGES);
    let mut other = Graph::directed(false);
    let foreign = other.add_node(0);

    assert_eq!(graph.dfs_from(foreign).unwrap_err(), GraphError::NotAMember(foreign));
}

#[test]
fn test_traversal_with_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (graph, _) = build(&SAMPLE_EDGES);

    assert_eq!(graph.traverse(TraversalOrder::DepthFirst).unwrap().len(), 8);
}
