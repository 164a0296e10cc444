//! CLI command implementations.

use std::fmt::Display;

use crate::graph::{Graph, TraversalOrder};
use crate::types::{Edge, GraphResult, Node};

/// Print the node list followed by every edge.
pub fn cmd_show<T: Display>(graph: &Graph<T>, json: bool) -> GraphResult<()> {
    if json {
        let info = serde_json::json!({
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "nodes": graph.nodes().iter().map(node_json).collect::<Vec<_>>(),
            "edges": graph.edges_iter().map(|e| edge_json(&e)).collect::<Vec<_>>(),
        });
        print_json(&info);
    } else {
        print!("{}", render_graph(graph));
    }
    Ok(())
}

/// Print every node with its index and neighbor count.
pub fn cmd_nodes<T: Display>(graph: &Graph<T>, json: bool) -> GraphResult<()> {
    if json {
        let nodes: Vec<_> = graph.nodes().iter().map(node_json).collect();
        print_json(&serde_json::Value::Array(nodes));
    } else {
        for node in graph.nodes() {
            println!("{}", node);
        }
    }
    Ok(())
}

/// Print every edge, one per stored adjacency entry.
pub fn cmd_edges<T: Display>(graph: &Graph<T>, json: bool) -> GraphResult<()> {
    if json {
        let edges: Vec<_> = graph.edges_iter().map(|e| edge_json(&e)).collect();
        print_json(&serde_json::Value::Array(edges));
    } else {
        for edge in graph.edges_iter() {
            println!("{}", edge);
        }
    }
    Ok(())
}

/// Run a traversal from position `start` (index 0 when absent) and print
/// the visited nodes in order.
pub fn cmd_traverse<T: Display>(
    graph: &Graph<T>,
    order: TraversalOrder,
    start: Option<usize>,
    json: bool,
) -> GraphResult<()> {
    let visited = match start {
        Some(index) => graph.traverse_from(graph.node_at(index)?.id(), order)?,
        None => graph.traverse(order)?,
    };

    if json {
        let info = serde_json::json!({
            "order": order.name(),
            "visited": visited.iter().map(|n| node_json(n)).collect::<Vec<_>>(),
        });
        print_json(&info);
    } else {
        for node in &visited {
            println!("{}", node);
        }
    }
    Ok(())
}

/// Look up the edge between two positions.
pub fn cmd_edge<T: Display>(graph: &Graph<T>, from: usize, to: usize, json: bool) -> GraphResult<()> {
    let edge = graph.edge_at(from, to)?;

    if json {
        let info = match &edge {
            Some(e) => edge_json(e),
            None => serde_json::Value::Null,
        };
        print_json(&info);
    } else {
        match edge {
            Some(e) => println!("{}", e),
            None => println!("No edge from index {} to index {}", from, to),
        }
    }
    Ok(())
}

/// Text rendering of the whole graph: a node line, then one line per edge.
pub fn render_graph<T: Display>(graph: &Graph<T>) -> String {
    let mut out = String::from("Graph\nNodes: ");
    for node in graph.nodes() {
        out.push_str(&format!("{}; ", node.data()));
    }
    out.push_str("\nEdges:\n");
    for edge in graph.edges_iter() {
        out.push_str(&format!("{}\n", edge));
    }
    out
}

fn node_json<T: Display>(node: &Node<T>) -> serde_json::Value {
    serde_json::json!({
        "index": node.index(),
        "data": node.data().to_string(),
        "neighbors": node.degree(),
    })
}

fn edge_json<T: Display>(edge: &Edge<'_, T>) -> serde_json::Value {
    serde_json::json!({
        "from": edge.from.data().to_string(),
        "to": edge.to.data().to_string(),
        "weight": edge.weight,
    })
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Sample;
    use crate::types::GraphConfig;

    #[test]
    fn render_lists_nodes_then_edges() {
        let graph = Sample::Weighted
            .build(GraphConfig::new(true, true))
            .unwrap();
        let text = render_graph(&graph);

        assert!(text.starts_with("Graph\nNodes: 1; 2; 3; 4; 5; 6; 7; 8; \nEdges:\n"));
        assert!(text.contains("1 -> 2 | weight: 9\n"));
        assert!(text.ends_with("8 -> 5 | weight: 3\n"));
        assert_eq!(text.lines().count(), 3 + 15);
    }

    #[test]
    fn json_node_shape() {
        let graph = Sample::Basic.build(GraphConfig::new(true, false)).unwrap();
        let value = node_json(&graph.nodes()[4]);

        assert_eq!(value["index"], 4);
        assert_eq!(value["data"], "5");
        assert_eq!(value["neighbors"], 3);
    }
}
