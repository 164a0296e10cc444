//! Graph traversal algorithms (DFS, BFS).

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::Graph;

/// Order in which a traversal visits reachable nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Pre-order depth-first.
    DepthFirst,
    /// Level-order breadth-first.
    BreadthFirst,
}

impl TraversalOrder {
    /// Parse an order from a short name ("dfs", "bfs", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Depth-first pre-order from the node at position `start`, returning
/// visited positions.
///
/// Uses an explicit stack of `(node, next adjacency slot)` frames, which
/// visits nodes in exactly the order the recursive formulation would.
/// Fails with `EmptyGraph` on an empty graph and `IndexOutOfRange` when
/// `start` is not a valid position.
pub fn dfs_traverse<T>(graph: &Graph<T>, start: usize) -> GraphResult<Vec<usize>> {
    check_start(graph, start)?;
    let nodes = graph.nodes();
    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    visited[start] = true;
    order.push(start);
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (current, slot) = *frame;
        let adjacency = nodes[current].adjacency();
        if slot >= adjacency.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let next = graph.index_of(adjacency[slot].target);
        if !visited[next] {
            visited[next] = true;
            order.push(next);
            stack.push((next, 0));
        }
    }

    log::trace!("dfs from {} visited {} nodes", start, order.len());
    Ok(order)
}

/// Breadth-first level order from the node at position `start`, returning
/// visited positions.
///
/// Nodes are marked visited when enqueued, so a node reachable through two
/// predecessors is queued only once. Fails like [`dfs_traverse`].
pub fn bfs_traverse<T>(graph: &Graph<T>, start: usize) -> GraphResult<Vec<usize>> {
    check_start(graph, start)?;
    let nodes = graph.nodes();
    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for entry in nodes[current].adjacency() {
            let next = graph.index_of(entry.target);
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    log::trace!("bfs from {} visited {} nodes", start, order.len());
    Ok(order)
}

fn check_start<T>(graph: &Graph<T>, start: usize) -> GraphResult<()> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    graph.node_at(start).map(|_| ())
}

impl<T> Graph<T> {
    /// Depth-first traversal from the node at index 0.
    pub fn dfs(&self) -> GraphResult<Vec<&Node<T>>> {
        self.traverse(TraversalOrder::DepthFirst)
    }

    /// Breadth-first traversal from the node at index 0.
    pub fn bfs(&self) -> GraphResult<Vec<&Node<T>>> {
        self.traverse(TraversalOrder::BreadthFirst)
    }

    /// Depth-first traversal from an arbitrary node.
    pub fn dfs_from(&self, start: NodeId) -> GraphResult<Vec<&Node<T>>> {
        self.traverse_from(start, TraversalOrder::DepthFirst)
    }

    /// Breadth-first traversal from an arbitrary node.
    pub fn bfs_from(&self, start: NodeId) -> GraphResult<Vec<&Node<T>>> {
        self.traverse_from(start, TraversalOrder::BreadthFirst)
    }

    /// Traverse from the node at index 0. Fails with `EmptyGraph` when
    /// there is no such node.
    pub fn traverse(&self, order: TraversalOrder) -> GraphResult<Vec<&Node<T>>> {
        self.collect_order(0, order)
    }

    /// Traverse from `start`. Only nodes reachable from it are produced.
    pub fn traverse_from(&self, start: NodeId, order: TraversalOrder) -> GraphResult<Vec<&Node<T>>> {
        let start = self.position(start)?;
        self.collect_order(start, order)
    }

    fn collect_order(&self, start: usize, order: TraversalOrder) -> GraphResult<Vec<&Node<T>>> {
        let positions = match order {
            TraversalOrder::DepthFirst => dfs_traverse(self, start)?,
            TraversalOrder::BreadthFirst => bfs_traverse(self, start)?,
        };
        Ok(positions.into_iter().map(|i| &self.nodes()[i]).collect())
    }
}
