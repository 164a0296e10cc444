//! Nodes, node handles and adjacency entries.

use super::Weight;

/// A non-owning handle to a node of one particular graph.
///
/// Handles stay valid across insertions and removals of other nodes. A
/// handle is rejected with [`GraphError::NotAMember`](super::GraphError)
/// once its node is removed or when it is used on a different graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    /// Identity of the owning graph.
    pub(crate) graph: u64,
    /// Per-graph key, never reused.
    pub(crate) key: u64,
}

impl NodeId {
    pub(crate) fn new(graph: u64, key: u64) -> Self {
        Self { graph, key }
    }

    /// The per-graph key of this handle. Keys are assigned in insertion
    /// order and are not reused after removal.
    pub fn key(&self) -> u64 {
        self.key
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}@g{}", self.key, self.graph)
    }
}

/// One outgoing adjacency entry: the neighbor and, in weighted graphs, the
/// weight of the link to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjacent {
    /// The neighbor this entry points to.
    pub target: NodeId,
    /// Stored weight; `None` in unweighted graphs.
    pub weight: Option<Weight>,
}

impl Adjacent {
    /// The reported weight of this entry (0 when unweighted).
    pub fn weight_or_zero(&self) -> Weight {
        self.weight.unwrap_or(0)
    }
}

/// A node owned by a [`Graph`](crate::Graph).
///
/// Nodes are only created by `Graph::add_node` and only destroyed by
/// `Graph::remove_node`.
#[derive(Debug)]
pub struct Node<T> {
    /// Offset of this node in the graph's node sequence.
    pub(crate) index: usize,
    pub(crate) id: NodeId,
    pub(crate) data: T,
    /// Outgoing links in insertion order. Multi-edges are separate entries.
    pub(crate) adjacency: Vec<Adjacent>,
}

impl<T> Node<T> {
    pub(crate) fn new(index: usize, id: NodeId, data: T) -> Self {
        Self {
            index,
            id,
            data,
            adjacency: Vec::new(),
        }
    }

    /// Current position of this node in the graph's node sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The stable handle of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Outgoing adjacency entries in insertion order.
    pub fn adjacency(&self) -> &[Adjacent] {
        &self.adjacency
    }

    /// Neighbor handles in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.iter().map(|a| a.target)
    }

    /// Stored weights in insertion order. Empty for unweighted graphs,
    /// one per neighbor otherwise.
    pub fn weights(&self) -> impl Iterator<Item = Weight> + '_ {
        self.adjacency.iter().filter_map(|a| a.weight)
    }

    /// Number of outgoing adjacency entries.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether `target` appears at least once among the neighbors.
    pub fn has_neighbor(&self, target: NodeId) -> bool {
        self.adjacency.iter().any(|a| a.target == target)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node with index {}: {}, neighbors: {}",
            self.index,
            self.data,
            self.adjacency.len()
        )
    }
}
