//! BFS over a [`GraphStore`] with parent and depth tracking.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::{instrument, trace};

use crate::graph::{GraphStore, NodeKey};

/// Discovery record of one breadth-first traversal.
///
/// A node is present iff it is reachable from the source; the source is
/// always present and is its own parent. Depths are hop counts from the
/// source.
///
/// Per-node state lives in vectors indexed by petgraph node index. A source
/// the graph has never seen is still present, with nothing else reachable.
#[derive(Debug, Clone)]
pub struct ParentMap<'g, N> {
    graph: &'g GraphStore<N>,
    source: N,
    source_idx: Option<NodeIndex>,
    parent: Vec<Option<NodeIndex>>,
    depth: Vec<Option<usize>>,
    /// Reached nodes in discovery order, with their depth.
    order: Vec<(NodeIndex, usize)>,
}

/// Run BFS from `source`.
///
/// Neighbors are expanded in adjacency order; the first node to discover a
/// neighbor becomes its parent. When `stop_at` is given, discovery stops as
/// soon as that node is dequeued. Nodes already discovered keep their entries,
/// so the result for `stop_at` is identical to a full traversal.
#[instrument(level = "trace", skip(graph))]
pub fn breadth_first<'g, N: NodeKey>(
    graph: &'g GraphStore<N>,
    source: &N,
    stop_at: Option<&N>,
) -> ParentMap<'g, N> {
    let n = graph.node_count();
    let mut map = ParentMap {
        graph,
        source: source.clone(),
        source_idx: graph.index_of(source),
        parent: vec![None; n],
        depth: vec![None; n],
        order: Vec::new(),
    };

    let Some(src) = map.source_idx else {
        trace!("source not in graph");
        return map;
    };

    let stop = stop_at.and_then(|dst| graph.index_of(dst));

    map.discover(src, src, 0);
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
    queue.push_back((src, 0));

    while let Some((position, depth)) = queue.pop_front() {
        if Some(position) == stop {
            break;
        }

        for neighbor in graph.successor_indices(position) {
            if map.parent[neighbor.index()].is_none() {
                map.discover(neighbor, position, depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    trace!(reached = map.order.len(), "bfs complete");
    map
}

impl<'g, N: NodeKey> ParentMap<'g, N> {
    fn discover(&mut self, node: NodeIndex, parent: NodeIndex, depth: usize) {
        self.parent[node.index()] = Some(parent);
        self.depth[node.index()] = Some(depth);
        self.order.push((node, depth));
    }

    /// The traversal's source node.
    #[must_use]
    pub const fn source(&self) -> &N {
        &self.source
    }

    /// The graph this traversal ran over.
    #[must_use]
    pub const fn graph(&self) -> &'g GraphStore<N> {
        self.graph
    }

    /// Number of reached nodes, the source included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        if self.source_idx.is_none() {
            1
        } else {
            self.order.len()
        }
    }

    /// Whether `node` is reachable from the source.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.depth(node).is_some()
    }

    /// The node `node` was discovered from. The source is its own parent.
    #[must_use]
    pub fn parent(&self, node: &N) -> Option<&N> {
        if *node == self.source {
            return Some(&self.source);
        }
        let idx = self.graph.index_of(node)?;
        self.parent[idx.index()].map(|p| self.graph.node(p))
    }

    /// Hop count from the source, or `None` if `node` is unreachable.
    #[must_use]
    pub fn depth(&self, node: &N) -> Option<usize> {
        if *node == self.source {
            return Some(0);
        }
        self.graph
            .index_of(node)
            .and_then(|idx| self.depth_at(idx))
    }

    /// Reached nodes with their depth, in discovery order (source first).
    pub fn reached(&self) -> impl Iterator<Item = (&N, usize)> {
        let detached = self.source_idx.is_none().then_some((&self.source, 0));
        detached.into_iter().chain(
            self.order
                .iter()
                .map(|&(idx, depth)| (self.graph.node(idx), depth)),
        )
    }

    /// Walk parent pointers back from `destination`.
    ///
    /// Returns the nodes from `destination` toward the source, source
    /// excluded: `Some(vec![])` when `destination` is the source, `None` when
    /// it is unreachable.
    #[must_use]
    pub fn path_to(&self, destination: &N) -> Option<Vec<N>> {
        if *destination == self.source {
            return Some(Vec::new());
        }

        let src = self.source_idx?;
        let mut current = self.graph.index_of(destination)?;
        let mut path = Vec::with_capacity(self.depth_at(current)?);

        while current != src {
            path.push(self.graph.node(current).clone());
            current = self.parent[current.index()]?;
        }

        Some(path)
    }

    pub(crate) fn depth_at(&self, idx: NodeIndex) -> Option<usize> {
        self.depth.get(idx.index()).copied().flatten()
    }
}
