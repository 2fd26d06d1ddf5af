//! Closeness centrality from unit-weight BFS distances.
//!
//! # Definition
//!
//! For a scored node `v` among `n` scored nodes:
//!
//! ```text
//! C(v) = (n - 1) / Σ_u d(v, u)
//! ```
//!
//! The sum runs over every scored node `u`, `v` included; `d(v, v) = 0`.
//! Scored nodes are the graph's keys. Nodes that only appear as successors
//! are neither scored nor summed over, although paths may end at them.
//!
//! # Unreachable pairs
//!
//! `d(v, u)` is undefined when `u` cannot be reached. [`UnreachablePolicy`]
//! decides what the term becomes:
//!
//! | Policy    | Term    | Score                  | Notes                              |
//! |-----------|---------|------------------------|------------------------------------|
//! | `Cap`     | `n`     | `(n - 1) / Σd`         | default; monotone in distance      |
//! | `Exclude` | dropped | `r² / ((n - 1) · Σd)`  | Wasserman–Faust, `r` keys reached  |
//! | `Zero`    | 0       | `(n - 1) / Σd`         | unreachable looks like the source  |
//!
//! Under `Cap`, lengthening a path or losing a destination can only grow
//! `Σd`, so a node that moves farther from the others never gains score.
//! `Zero` inflates nodes that reach little and is kept for comparison.
//!
//! # Zero distance sums
//!
//! A sum of zero (a single scored node, or a node that reaches nothing under
//! `Exclude` or `Zero`) has no meaningful inverse. [`ZeroDistancePolicy`]
//! picks either a `0.0` score or no score, and the node is always listed in
//! [`ClosenessResult::degenerate`]. No NaN or infinity is ever produced.
//!
//! # Complexity
//!
//! One BFS per scored node: O(V · (V + E)).

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use tracing::{debug, instrument, warn};

use crate::config::{ClosenessConfig, UnreachablePolicy, ZeroDistancePolicy};
use crate::error::Error;
use crate::graph::{GraphStore, NodeKey};
use crate::path::distances_from;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Closeness scores for every key node of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosenessResult<N: NodeKey> {
    /// Node → closeness score. Nodes omitted by
    /// [`ZeroDistancePolicy::Omit`] are absent.
    pub scores: HashMap<N, f64>,
    /// Scored nodes in graph key order.
    pub nodes: Vec<N>,
    /// Nodes whose distance sum was zero, in key order.
    pub degenerate: Vec<N>,
    /// Ordered (source, destination) key pairs with no directed path.
    pub unreachable_pairs: usize,
    /// Policies the scores were computed with.
    pub config: ClosenessConfig,
}

impl<N: NodeKey> ClosenessResult<N> {
    fn empty(config: ClosenessConfig) -> Self {
        Self {
            scores: HashMap::new(),
            nodes: Vec::new(),
            degenerate: Vec::new(),
            unreachable_pairs: 0,
            config,
        }
    }

    #[must_use]
    pub fn score(&self, node: &N) -> Option<f64> {
        self.scores.get(node).copied()
    }

    #[must_use]
    pub fn is_degenerate(&self, node: &N) -> bool {
        self.degenerate.contains(node)
    }

    /// Scores sorted from most to least central. Ties keep key order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&N, f64)> {
        let mut ranked: Vec<(&N, f64)> = self
            .nodes
            .iter()
            .filter_map(|node| self.score(node).map(|s| (node, s)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

// ---------------------------------------------------------------------------
// Closeness
// ---------------------------------------------------------------------------

/// Distance sum of one source over all key nodes.
struct Reach {
    total: usize,
    /// Keys reached, the source excluded.
    reached: usize,
    unreachable: usize,
}

fn reach_from<N: NodeKey>(graph: &GraphStore<N>, src: NodeIndex, policy: UnreachablePolicy) -> Reach {
    let n = graph.key_count();
    let distances = distances_from(graph, graph.node(src));

    let mut reach = Reach {
        total: 0,
        reached: 0,
        unreachable: 0,
    };
    for dst in graph.key_indices() {
        if let Some(d) = distances.depth_at(dst) {
            reach.total += d;
            if dst != src {
                reach.reached += 1;
            }
        } else {
            reach.unreachable += 1;
            reach.total += match policy {
                UnreachablePolicy::Exclude | UnreachablePolicy::Zero => 0,
                UnreachablePolicy::Cap => n,
            };
        }
    }
    reach
}

#[allow(clippy::cast_precision_loss)]
fn score_of(n: usize, reach: &Reach, config: ClosenessConfig) -> Option<f64> {
    if reach.total == 0 {
        return match config.zero_distance {
            ZeroDistancePolicy::Zero => Some(0.0),
            ZeroDistancePolicy::Omit => None,
        };
    }
    let total = reach.total as f64;
    let score = match config.unreachable {
        UnreachablePolicy::Cap | UnreachablePolicy::Zero => (n - 1) as f64 / total,
        UnreachablePolicy::Exclude => {
            // total > 0 implies at least one other key was reached, so n > 1.
            let r = reach.reached as f64;
            (r / (n - 1) as f64) * (r / total)
        }
    };
    Some(score)
}

/// Compute closeness centrality for every key node.
///
/// Runs one BFS per key node and reads every destination's depth off the
/// resulting [`ParentMap`](crate::path::ParentMap); the scores equal those of
/// a per-pair [`shortest_path`](crate::path::shortest_path) sweep.
///
/// # Returns
///
/// A [`ClosenessResult`]; empty for a graph without keys.
#[must_use]
#[instrument(skip(graph), fields(keys = graph.key_count()))]
pub fn closeness_centrality<N: NodeKey>(
    graph: &GraphStore<N>,
    config: &ClosenessConfig,
) -> ClosenessResult<N> {
    let n = graph.key_count();
    let mut result = ClosenessResult::empty(*config);
    if n == 0 {
        return result;
    }

    result.scores.reserve(n);
    result.nodes.reserve(n);

    for src in graph.key_indices() {
        let node = graph.node(src);
        let reach = reach_from(graph, src, config.unreachable);
        result.unreachable_pairs += reach.unreachable;
        result.nodes.push(node.clone());

        if reach.total == 0 {
            debug!(?node, "zero total distance");
            result.degenerate.push(node.clone());
        }
        if let Some(score) = score_of(n, &reach, *config) {
            result.scores.insert(node.clone(), score);
        }
    }

    if !result.degenerate.is_empty() {
        warn!(
            count = result.degenerate.len(),
            policy = %config.zero_distance,
            "nodes with zero total distance"
        );
    }
    debug!(
        scored = result.scores.len(),
        unreachable_pairs = result.unreachable_pairs,
        "closeness complete"
    );

    result
}

/// Closeness of one node, with the sum it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeCloseness {
    /// `None` when the sum is zero under [`ZeroDistancePolicy::Omit`].
    pub score: Option<f64>,
    /// Distance sum after applying the unreachable policy.
    pub total_distance: usize,
    /// Key nodes this node cannot reach.
    pub unreachable: usize,
}

impl NodeCloseness {
    /// Whether the zero-distance policy decided the score.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.total_distance == 0
    }
}

/// Closeness of a single key node.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `node` is not a key of `graph`.
pub fn node_closeness<N: NodeKey>(
    graph: &GraphStore<N>,
    node: &N,
    config: &ClosenessConfig,
) -> Result<NodeCloseness, Error> {
    let src = graph
        .index_of(node)
        .filter(|&idx| graph.is_key_index(idx))
        .ok_or_else(|| Error::UnknownNode(format!("{node:?}")))?;

    let reach = reach_from(graph, src, config.unreachable);
    Ok(NodeCloseness {
        score: score_of(graph.key_count(), &reach, *config),
        total_distance: reach.total,
        unreachable: reach.unreachable,
    })
}
