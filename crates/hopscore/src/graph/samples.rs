//! Small named graphs for demos, docs and regression tests.
//!
//! Each sample is built on demand; nothing is kept in global state.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::graph::store::GraphStore;

/// The built-in sample graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    /// Seven users following each other, alice and bob feeding into carol.
    Follows,
    /// A twelve-location adventure map with mostly two-way roads.
    Kingdom,
    /// Five integers joined in a two-way line.
    Line,
}

impl Sample {
    pub const ALL: [Self; 3] = [Self::Follows, Self::Kingdom, Self::Line];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Follows => "follows",
            Self::Kingdom => "kingdom",
            Self::Line => "line",
        }
    }

    /// Build the sample with its node ids rendered as strings.
    #[must_use]
    pub fn build(self) -> GraphStore<String> {
        match self {
            Self::Follows => owned(&follows()),
            Self::Kingdom => owned(&kingdom()),
            Self::Line => GraphStore::from_adjacency(
                line_adjacency()
                    .into_iter()
                    .map(|(node, succ)| (node.to_string(), succ.into_iter().map(|s| s.to_string()))),
            ),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sample {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|sample| sample.name() == wanted)
            .ok_or_else(|| Error::UnknownSample(s.to_string()))
    }
}

/// Follower graph: alice, bob → carol → {eve, dan} → frank → gale.
#[must_use]
pub fn follows() -> GraphStore<&'static str> {
    GraphStore::from_adjacency([
        ("alice", vec!["carol"]),
        ("bob", vec!["carol"]),
        ("carol", vec!["eve", "dan"]),
        ("eve", vec!["frank"]),
        ("dan", vec!["frank"]),
        ("frank", vec!["gale"]),
        ("gale", vec![]),
    ])
}

/// Adventure map. Every location is a key; roads are unit length.
#[must_use]
pub fn kingdom() -> GraphStore<&'static str> {
    GraphStore::from_adjacency([
        ("start", vec!["forest", "mountains", "sea", "city"]),
        ("forest", vec!["start", "mountains", "desert", "cave"]),
        ("mountains", vec!["start", "forest", "glacier"]),
        ("desert", vec!["forest"]),
        ("cave", vec!["forest", "inferno"]),
        ("inferno", vec!["cave"]),
        ("glacier", vec!["mountains"]),
        ("sea", vec!["start", "beach"]),
        ("beach", vec!["sea", "city"]),
        ("city", vec!["beach", "start", "castle"]),
        ("castle", vec!["city", "treasure"]),
        ("treasure", vec!["castle"]),
    ])
}

/// Integer line 1 ↔ 2 ↔ 3 ↔ 4 ↔ 5.
#[must_use]
pub fn line() -> GraphStore<u32> {
    GraphStore::from_adjacency(line_adjacency())
}

fn line_adjacency() -> [(u32, Vec<u32>); 5] {
    [
        (1, vec![2]),
        (2, vec![1, 3]),
        (3, vec![2, 4]),
        (4, vec![3, 5]),
        (5, vec![4]),
    ]
}

fn owned(g: &GraphStore<&'static str>) -> GraphStore<String> {
    GraphStore::from_adjacency(g.nodes().map(|node| {
        (
            (*node).to_string(),
            g.neighbors(node).map(|s| (*s).to_string()).collect::<Vec<_>>(),
        )
    }))
}
