//! Centrality metrics over a [`GraphStore`](crate::graph::GraphStore).
//!
//! # Overview
//!
//! - **Closeness centrality** (`closeness`): how few hops a node needs to
//!   reach every other scored node.
//!
//! # Usage
//!
//! ```rust
//! use hopscore::config::ClosenessConfig;
//! use hopscore::graph::samples;
//! use hopscore::metrics::closeness::closeness_centrality;
//!
//! let g = samples::kingdom();
//! let result = closeness_centrality(&g, &ClosenessConfig::default());
//! let (top, _) = result.ranked()[0];
//! assert_eq!(*top, "start");
//! ```

pub mod closeness;
