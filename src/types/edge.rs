//! Borrowed edge views.

use super::{Node, Weight};

/// A directed link between two nodes, materialized on demand from the
/// source node's adjacency list.
///
/// An `Edge` borrows the graph, so it cannot outlive a structural change.
#[derive(Debug)]
pub struct Edge<'a, T> {
    /// Source node.
    pub from: &'a Node<T>,
    /// Target node.
    pub to: &'a Node<T>,
    /// Weight of the link (0 for unweighted graphs).
    pub weight: Weight,
}

impl<'a, T> Edge<'a, T> {
    pub(crate) fn new(from: &'a Node<T>, to: &'a Node<T>, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Positional indices of the endpoints as `(from, to)`.
    pub fn indices(&self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

impl<T> Clone for Edge<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Edge<'_, T> {}

impl<T: std::fmt::Display> std::fmt::Display for Edge<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} | weight: {}",
            self.from.data(),
            self.to.data(),
            self.weight
        )
    }
}
