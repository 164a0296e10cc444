//! Data types shared by the graph and its views.

pub mod config;
pub mod edge;
pub mod error;
pub mod node;

pub use config::GraphConfig;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::{Adjacent, Node, NodeId};

/// Integer weight carried by an edge of a weighted graph.
pub type Weight = i64;
