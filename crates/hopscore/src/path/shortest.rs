//! Shortest-path queries built on [`breadth_first`].

use crate::graph::{GraphStore, NodeKey};
use crate::path::bfs::{ParentMap, breadth_first};

/// Shortest path from `source` to `destination`, walked backwards.
///
/// The result starts at `destination` and ends at the node right after
/// `source`; `source` itself is not included, so the length of the result is
/// the hop distance. Unreachable destinations and `source == destination`
/// both yield an empty sequence. Use [`route`] to tell them apart.
///
/// # Example
///
/// ```rust
/// use hopscore::graph::GraphStore;
/// use hopscore::path::shortest_path;
///
/// let g = GraphStore::from_adjacency([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec![])]);
/// assert_eq!(shortest_path(&g, &"A", &"C"), vec!["C", "B"]);
/// assert!(shortest_path(&g, &"C", &"A").is_empty());
/// ```
#[must_use]
pub fn shortest_path<N: NodeKey>(graph: &GraphStore<N>, source: &N, destination: &N) -> Vec<N> {
    breadth_first(graph, source, Some(destination))
        .path_to(destination)
        .unwrap_or_default()
}

/// Forward shortest path from `source` to `destination`, both included.
///
/// Returns `None` when `destination` is unreachable and `Some(vec![source])`
/// when the two are the same node.
#[must_use]
pub fn route<N: NodeKey>(graph: &GraphStore<N>, source: &N, destination: &N) -> Option<Vec<N>> {
    let mut path = breadth_first(graph, source, Some(destination)).path_to(destination)?;
    path.push(source.clone());
    path.reverse();
    Some(path)
}

/// Depth of every node reachable from `source`, from a single traversal.
#[must_use]
pub fn distances_from<'g, N: NodeKey>(graph: &'g GraphStore<N>, source: &N) -> ParentMap<'g, N> {
    breadth_first(graph, source, None)
}
