//! Immutable adjacency storage.
//!
//! ## Edge Order
//!
//! Successor order matters: BFS expands neighbors in the order they were
//! listed, so it decides which of several equally short paths is
//! reconstructed. petgraph walks a node's out-edges newest first, so
//! [`GraphBuilder::build`] inserts each successor list in reverse to make
//! [`GraphStore::neighbors`] yield the order the caller wrote.
//!
//! ## Keys
//!
//! Key nodes are inserted into the petgraph graph before any successor-only
//! node, so a node is a key iff its index is below the key count.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, instrument};

/// Identifier capability required of graph nodes.
///
/// Anything cloneable, hashable and comparable for equality qualifies:
/// `String`, `&str`, integers, opaque handles.
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeKey for T {}

// ---------------------------------------------------------------------------
// GraphStore
// ---------------------------------------------------------------------------

/// A directed, unit-weight graph: key node → ordered successors.
///
/// Built once through [`GraphBuilder`] and never mutated afterwards, so it
/// can be shared by reference between any number of traversals.
#[derive(Debug, Clone)]
pub struct GraphStore<N> {
    graph: DiGraph<N, ()>,
    node_map: HashMap<N, NodeIndex>,
    key_count: usize,
}

impl<N: NodeKey> GraphStore<N> {
    /// Build from `(node, successors)` pairs.
    ///
    /// A node listed twice keeps one entry and its successor lists are
    /// concatenated in order.
    pub fn from_adjacency<I, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        S: IntoIterator<Item = N>,
    {
        let mut builder = GraphBuilder::new();
        for (node, successors) in adjacency {
            builder.add_successors(node, successors);
        }
        builder.build()
    }

    /// Build from `(from, to)` edges. Every `from` becomes a key node.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut builder = GraphBuilder::new();
        for (from, to) in edges {
            builder.add_edge(from, to);
        }
        builder.build()
    }

    /// Successors of `node` in adjacency order.
    ///
    /// Nodes without recorded out-edges, including nodes the graph has never
    /// seen, yield nothing.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + use<'a, N> {
        self.index_of(node)
            .into_iter()
            .flat_map(move |idx| self.graph.neighbors_directed(idx, Direction::Outgoing))
            .map(move |succ| &self.graph[succ])
    }

    /// Key nodes in insertion order. These are the nodes that get scored.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.graph
            .node_indices()
            .take(self.key_count)
            .map(move |idx| &self.graph[idx])
    }

    /// Number of key nodes.
    #[must_use]
    pub const fn key_count(&self) -> usize {
        self.key_count
    }

    /// Number of distinct nodes, successor-only nodes included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, duplicates and self loops included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `node` appears anywhere in the graph, as a key or a successor.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.node_map.contains_key(node)
    }

    /// Whether `node` has an entry of its own in the adjacency mapping.
    #[must_use]
    pub fn is_key(&self, node: &N) -> bool {
        self.index_of(node)
            .is_some_and(|idx| self.is_key_index(idx))
    }

    /// Length of `node`'s successor list; 0 for unknown nodes.
    #[must_use]
    pub fn out_degree(&self, node: &N) -> usize {
        self.neighbors(node).count()
    }

    /// Borrow the underlying petgraph graph.
    #[must_use]
    pub const fn as_petgraph(&self) -> &DiGraph<N, ()> {
        &self.graph
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<NodeIndex> {
        self.node_map.get(node).copied()
    }

    pub(crate) fn node(&self, idx: NodeIndex) -> &N {
        &self.graph[idx]
    }

    pub(crate) fn is_key_index(&self, idx: NodeIndex) -> bool {
        idx.index() < self.key_count
    }

    pub(crate) fn key_indices(&self) -> impl Iterator<Item = NodeIndex> + use<N> {
        (0..self.key_count).map(NodeIndex::new)
    }

    pub(crate) fn successor_indices(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }
}

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Accumulates adjacency entries, then freezes them into a [`GraphStore`].
#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    keys: Vec<N>,
    position: HashMap<N, usize>,
    successors: Vec<Vec<N>>,
}

impl<N> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            position: HashMap::new(),
            successors: Vec::new(),
        }
    }
}

impl<N: NodeKey> GraphBuilder<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining form of [`Self::add_successors`].
    #[must_use]
    pub fn with_successors<S>(mut self, node: N, successors: S) -> Self
    where
        S: IntoIterator<Item = N>,
    {
        self.add_successors(node, successors);
        self
    }

    /// Register `node` as a key with no out-edges (if not already a key).
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.slot(node);
        self
    }

    /// Append `successors` to `node`'s adjacency list, making it a key.
    pub fn add_successors<S>(&mut self, node: N, successors: S) -> &mut Self
    where
        S: IntoIterator<Item = N>,
    {
        let slot = self.slot(node);
        self.successors[slot].extend(successors);
        self
    }

    /// Append a single edge `from → to`.
    pub fn add_edge(&mut self, from: N, to: N) -> &mut Self {
        let slot = self.slot(from);
        self.successors[slot].push(to);
        self
    }

    fn slot(&mut self, node: N) -> usize {
        if let Some(&slot) = self.position.get(&node) {
            return slot;
        }
        let slot = self.keys.len();
        self.position.insert(node.clone(), slot);
        self.keys.push(node);
        self.successors.push(Vec::new());
        slot
    }

    /// Freeze the accumulated adjacency into a [`GraphStore`].
    #[instrument(skip_all)]
    pub fn build(self) -> GraphStore<N> {
        let edge_count = self.successors.iter().map(Vec::len).sum();
        let mut graph = DiGraph::with_capacity(self.keys.len(), edge_count);
        let mut node_map = HashMap::with_capacity(self.keys.len());

        // Step 1: keys first, so key indices are 0..key_count.
        let key_count = self.keys.len();
        for key in self.keys {
            let idx = graph.add_node(key.clone());
            node_map.insert(key, idx);
        }

        // Step 2: edges, each list reversed (see module docs).
        for (slot, successors) in self.successors.into_iter().enumerate() {
            let from = NodeIndex::new(slot);
            for succ in successors.into_iter().rev() {
                let to = match node_map.get(&succ) {
                    Some(&idx) => idx,
                    None => {
                        let idx = graph.add_node(succ.clone());
                        node_map.insert(succ, idx);
                        idx
                    }
                };
                graph.add_edge(from, to, ());
            }
        }

        debug!(
            keys = key_count,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );

        GraphStore {
            graph,
            node_map,
            key_count,
        }
    }
}
