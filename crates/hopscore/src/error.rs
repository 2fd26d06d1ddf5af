//! Typed errors for the hopscore library.
//!
//! Graph construction, traversal and centrality never fail: unreachable
//! nodes and degenerate distance sums are ordinary outcomes. Errors only
//! arise at the edges, when a caller names something that does not exist.

/// Errors raised when resolving names supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No built-in sample graph carries this name.
    #[error("unknown sample graph: {0}")]
    UnknownSample(String),

    /// A policy string did not match any variant.
    #[error("unknown {kind} policy: {value}")]
    UnknownPolicy {
        /// Which policy was being parsed (`unreachable`, `zero-distance`).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The node is not present in the graph.
    #[error("node not found in graph: {0}")]
    UnknownNode(String),
}
