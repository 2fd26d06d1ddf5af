#![forbid(unsafe_code)]
//! hopscore library.
//!
//! Breadth-first shortest paths and closeness centrality over directed,
//! unit-weight adjacency graphs.
//!
//! ```text
//! GraphBuilder / samples
//!        ↓  build()
//! GraphStore<N>        (immutable adjacency, petgraph-backed)
//!        ↓  path::breadth_first / path::distances_from
//! ParentMap<N>         (parents + depths of one traversal)
//!        ↓  metrics::closeness::closeness_centrality
//! ClosenessResult<N>   (score per key node + degenerate nodes)
//! ```
//!
//! # Conventions
//!
//! - **Errors**: Typed errors live in [`error::Error`]; file loading uses
//!   `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod path;

pub use config::{ClosenessConfig, ProjectConfig, UnreachablePolicy, ZeroDistancePolicy};
pub use error::Error;
pub use graph::{GraphBuilder, GraphStore, NodeKey};
pub use metrics::closeness::{ClosenessResult, NodeCloseness, closeness_centrality, node_closeness};
pub use path::{ParentMap, breadth_first, distances_from, route, shortest_path};
