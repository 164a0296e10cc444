//! Core graph structure — owned nodes with per-node adjacency lists.

use std::collections::HashMap;
use std::ops::Index;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{
    Adjacent, Edge, GraphConfig, GraphError, GraphResult, Node, NodeId, Weight,
};

/// Source of process-unique graph identities, used to reject foreign handles.
static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// A mutable graph of `T` payloads connected by adjacency links.
///
/// Nodes live in a dense sequence. Each node's position index equals its
/// offset in that sequence at all times, which keeps index-sized traversal
/// bookkeeping valid. Appending a node touches only the new slot; removing
/// one re-derives the index of every node after it, O(n) per removal.
#[derive(Debug)]
pub struct Graph<T> {
    /// Identity stamped into every handle this graph hands out.
    id: u64,
    config: GraphConfig,
    /// All nodes in insertion order.
    nodes: Vec<Node<T>>,
    /// Handle key -> position in `nodes`, kept in step with node indices.
    positions: HashMap<u64, usize>,
    /// Next handle key. Keys are never reused.
    next_key: u64,
}

impl<T> Graph<T> {
    /// Create an empty graph. Both flags are fixed for its lifetime.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_config(GraphConfig::new(directed, weighted))
    }

    /// Create an empty graph from a configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            config,
            nodes: Vec::new(),
            positions: HashMap::new(),
            next_key: 0,
        }
    }

    /// Create an empty directed graph.
    pub fn directed(weighted: bool) -> Self {
        Self::new(true, weighted)
    }

    /// Create an empty undirected graph.
    pub fn undirected(weighted: bool) -> Self {
        Self::new(false, weighted)
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of adjacency entries across all nodes. An undirected link
    /// counts twice, once per stored direction.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in sequence order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Handles of all nodes in sequence order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(Node::id)
    }

    /// Whether the handle refers to a live node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.graph == self.id && self.positions.contains_key(&id.key)
    }

    /// Current position of a node in the sequence.
    pub fn position(&self, id: NodeId) -> GraphResult<usize> {
        if id.graph != self.id {
            return Err(GraphError::NotAMember(id));
        }
        self.positions
            .get(&id.key)
            .copied()
            .ok_or(GraphError::NotAMember(id))
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> GraphResult<&Node<T>> {
        let pos = self.position(id)?;
        Ok(&self.nodes[pos])
    }

    /// Get a node by handle (mutable). Only the payload can be changed
    /// through the returned reference.
    pub fn node_mut(&mut self, id: NodeId) -> GraphResult<&mut Node<T>> {
        let pos = self.position(id)?;
        Ok(&mut self.nodes[pos])
    }

    /// Get a node by position.
    pub fn node_at(&self, index: usize) -> GraphResult<&Node<T>> {
        self.nodes.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Append a node holding `value` and return its handle.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId::new(self.id, self.next_key);
        self.next_key += 1;

        self.nodes.push(Node::new(self.nodes.len(), id, value));
        self.update_indices(self.nodes.len() - 1);

        log::debug!("added node {} at index {}", id, self.nodes.len() - 1);
        id
    }

    /// Remove a node and every adjacency entry pointing to it, returning
    /// its payload. Edge views taken before the call cannot survive it.
    ///
    /// Unlike [`remove_edge`](Self::remove_edge), which drops only the first
    /// matching entry, this strips all parallel links to the node.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<T> {
        let pos = self.position(id)?;

        let removed = self.nodes.remove(pos);
        self.positions.remove(&id.key);
        self.update_indices(pos);

        let mut dropped = 0;
        for node in &mut self.nodes {
            let before = node.adjacency.len();
            node.adjacency.retain(|a| a.target != id);
            dropped += before - node.adjacency.len();
        }

        log::debug!(
            "removed node {} from index {} ({} incoming entries dropped)",
            id,
            pos,
            dropped
        );
        Ok(removed.data)
    }

    /// Add a link from `from` to `to`. Undirected graphs also store the
    /// mirrored link on `to`. The weight is kept only when the graph is
    /// weighted. Adding the same pair twice creates two entries.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> GraphResult<()> {
        // Validate both ends before touching either list
        let from_pos = self.position(from)?;
        let to_pos = self.position(to)?;

        let weight = self.config.weighted.then_some(weight);
        self.nodes[from_pos].adjacency.push(Adjacent { target: to, weight });
        if !self.config.directed {
            self.nodes[to_pos].adjacency.push(Adjacent {
                target: from,
                weight,
            });
        }

        log::debug!("added edge {} -> {} ({:?})", from, to, weight);
        Ok(())
    }

    /// Add a link with weight 0.
    pub fn add_unweighted_edge(&mut self, from: NodeId, to: NodeId) -> GraphResult<()> {
        self.add_edge(from, to, 0)
    }

    /// Remove the first `from -> to` adjacency entry.
    ///
    /// Only that one direction and only one multi-edge instance is removed;
    /// an undirected link needs a second call with the ends swapped.
    /// Returns `false` when there was no such entry.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> GraphResult<bool> {
        let from_pos = self.position(from)?;
        self.position(to)?;

        let adjacency = &mut self.nodes[from_pos].adjacency;
        match adjacency.iter().position(|a| a.target == to) {
            Some(slot) => {
                adjacency.remove(slot);
                log::debug!("removed edge {} -> {}", from, to);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Look up the link between two positions. Only the first entry is
    /// reported when several links join the same pair.
    pub fn edge_at(&self, from_index: usize, to_index: usize) -> GraphResult<Option<Edge<'_, T>>> {
        let from = self.node_at(from_index)?;
        let to = self.node_at(to_index)?;
        Ok(Self::edge_between(from, to))
    }

    /// Look up the link between two handles.
    pub fn edge(&self, from: NodeId, to: NodeId) -> GraphResult<Option<Edge<'_, T>>> {
        let from = self.node(from)?;
        let to = self.node(to)?;
        Ok(Self::edge_between(from, to))
    }

    fn edge_between<'a>(from: &'a Node<T>, to: &'a Node<T>) -> Option<Edge<'a, T>> {
        from.adjacency
            .iter()
            .find(|a| a.target == to.id)
            .map(|a| Edge::new(from, to, a.weight_or_zero()))
    }

    /// Every adjacency entry as an edge, node by node in sequence order.
    /// Undirected links appear once per direction.
    pub fn edges_iter(&self) -> impl Iterator<Item = Edge<'_, T>> + '_ {
        self.nodes.iter().flat_map(move |from| {
            from.adjacency
                .iter()
                .map(move |a| Edge::new(from, self.resolve(a.target), a.weight_or_zero()))
        })
    }

    /// Collect [`edges_iter`](Self::edges_iter).
    pub fn edges(&self) -> Vec<Edge<'_, T>> {
        self.edges_iter().collect()
    }

    /// Position of an adjacency target. Targets are always live members:
    /// node removal strips every entry pointing at the removed node.
    pub(crate) fn index_of(&self, target: NodeId) -> usize {
        self.positions[&target.key]
    }

    pub(crate) fn resolve(&self, target: NodeId) -> &Node<T> {
        &self.nodes[self.index_of(target)]
    }

    /// Re-derive the index of every node from offset `start` onward.
    /// Offsets before `start` are unaffected by an append or a removal.
    fn update_indices(&mut self, start: usize) {
        for (i, node) in self.nodes.iter_mut().enumerate().skip(start) {
            node.index = i;
            self.positions.insert(node.id.key, i);
        }
    }
}

impl<T> Index<NodeId> for Graph<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match self.position(id) {
            Ok(pos) => &self.nodes[pos],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> Index<usize> for Graph<T> {
    type Output = Node<T>;

    fn index(&self, index: usize) -> &Node<T> {
        match self.node_at(index) {
            Ok(node) => node,
            Err(e) => panic!("{}", e),
        }
    }
}
