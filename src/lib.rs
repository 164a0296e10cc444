//! adjgraph — a generic, mutable adjacency-list graph.
//!
//! A [`Graph`] owns its nodes and is configured at construction as directed
//! or undirected and weighted or unweighted. Nodes are addressed through
//! copyable [`NodeId`] handles or by their dense position index; edges are
//! borrowed [`Edge`] views materialized from per-node adjacency lists.
//! Depth-first and breadth-first traversals start from the node at index 0.

#[cfg(feature = "cli")]
pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs_traverse, dfs_traverse, Graph, GraphBuilder, TraversalOrder};
pub use types::{
    Adjacent, Edge, GraphConfig, GraphError, GraphResult, Node, NodeId, Weight,
};
