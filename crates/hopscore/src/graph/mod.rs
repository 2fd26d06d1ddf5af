//! Directed adjacency graphs for traversal and centrality.
//!
//! # Overview
//!
//! A [`GraphStore`] records, for every *key* node, an ordered list of
//! successor nodes. Successors need not be keys themselves: a node that only
//! ever appears on the right-hand side of an edge simply has no out-edges.
//! Keys are the nodes that get scored by [`crate::metrics::closeness`].
//!
//! ## Pipeline
//!
//! ```text
//! adjacency literal / edge list
//!        ↓  GraphBuilder::build()
//! GraphStore<N> (petgraph DiGraph + key index)
//!        ↓  crate::path::breadth_first()
//! ParentMap<N>
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use hopscore::graph::GraphStore;
//!
//! let g = GraphStore::from_adjacency([
//!     ("A", vec!["B"]),
//!     ("B", vec!["C"]),
//!     ("C", vec![]),
//! ]);
//! assert_eq!(g.neighbors(&"A").collect::<Vec<_>>(), vec![&"B"]);
//! assert_eq!(g.neighbors(&"Z").count(), 0);
//! ```

pub mod samples;
pub mod store;

pub use samples::Sample;
pub use store::{GraphBuilder, GraphStore, NodeKey};
