//! Breadth-first traversal and shortest-path reconstruction.
//!
//! # Overview
//!
//! Every edge has unit weight, so BFS discovers each node at its shortest
//! distance from the source. The traversal records, for each reached node,
//! the node it was first discovered from (its *parent*) and its depth. That
//! record is a [`ParentMap`]; walking it backwards from a destination yields
//! one shortest path.
//!
//! # Operations
//!
//! - [`breadth_first`]: the traversal itself, optionally stopping once a
//!   given destination is dequeued.
//! - [`shortest_path`]: destination-first path excluding the source; empty
//!   both for unreachable destinations and for `source == destination`.
//! - [`route`]: forward path with both endpoints, `None` when unreachable.
//!   Use this when the two empty cases above must be told apart.
//! - [`distances_from`]: one full traversal giving the depth of every
//!   reachable node, which is all closeness needs.
//!
//! Complexity: O(V + E) per call.

pub mod bfs;
pub mod shortest;

pub use bfs::{ParentMap, breadth_first};
pub use shortest::{distances_from, route, shortest_path};
