//! Error types for graph operations.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur while mutating, querying or traversing a graph.
///
/// A missing edge is never an error: lookups return `Ok(None)` and removals
/// return `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Positional access outside `[0, len)`.
    #[error("Index {index} out of range for graph with {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    /// The handle belongs to another graph or its node was already removed.
    #[error("Node {0} is not a member of this graph")]
    NotAMember(NodeId),

    /// Traversal was requested on a graph with no nodes.
    #[error("Cannot traverse an empty graph")]
    EmptyGraph,
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
