//! Fluent API for building Graph instances from positional descriptions.

use crate::types::{GraphConfig, GraphError, GraphResult, NodeId, Weight};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes are referred to by the position returned from [`node`](Self::node);
/// edges are validated only when [`build`](Self::build) runs.
pub struct GraphBuilder<T> {
    config: GraphConfig,
    values: Vec<T>,
    edges: Vec<(usize, usize, Weight)>,
}

impl<T> GraphBuilder<T> {
    /// Create a builder for an undirected, unweighted graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a builder with a specific configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            values: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.config.directed = directed;
        self
    }

    pub fn weighted(mut self, weighted: bool) -> Self {
        self.config.weighted = weighted;
        self
    }

    /// Add a node, returns the position it will occupy.
    pub fn node(&mut self, value: T) -> usize {
        self.values.push(value);
        self.values.len() - 1
    }

    /// Add several nodes in order.
    pub fn nodes<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        self.values.extend(values);
        self
    }

    /// Add an edge between two node positions.
    pub fn link(&mut self, from: usize, to: usize, weight: Weight) -> &mut Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Build the final graph. Edges are added in declaration order.
    pub fn build(self) -> GraphResult<Graph<T>> {
        let len = self.values.len();
        if let Some(&(from, to, _)) = self.edges.iter().find(|(f, t, _)| *f >= len || *t >= len) {
            let index = if from >= len { from } else { to };
            return Err(GraphError::IndexOutOfRange { index, len });
        }

        let mut graph = Graph::with_config(self.config);
        let ids: Vec<NodeId> = self.values.into_iter().map(|v| graph.add_node(v)).collect();
        for (from, to, weight) in self.edges {
            graph.add_edge(ids[from], ids[to], weight)?;
        }

        log::debug!(
            "built {} graph with {} nodes and {} adjacency entries",
            graph.config(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
