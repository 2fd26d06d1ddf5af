//! Known-topology regression tests for closeness centrality.
//!
//! Each test uses a hand-crafted graph whose distance sums are easy to
//! compute by hand. Expected values are hardcoded, so any change to the
//! traversal or to a policy that shifts a score is caught here.

use hopscore::config::{ClosenessConfig, UnreachablePolicy, ZeroDistancePolicy};
use hopscore::graph::{GraphStore, samples};
use hopscore::metrics::closeness::{ClosenessResult, closeness_centrality};
use hopscore::path::{route, shortest_path};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn config(unreachable: UnreachablePolicy) -> ClosenessConfig {
    ClosenessConfig {
        unreachable,
        zero_distance: ZeroDistancePolicy::Zero,
    }
}

fn assert_score<N: hopscore::NodeKey>(result: &ClosenessResult<N>, node: &N, expected: f64) {
    let got = result
        .score(node)
        .unwrap_or_else(|| panic!("{node:?} has no score"));
    assert!(
        (got - expected).abs() < 1e-10,
        "{node:?}: expected {expected}, got {got}"
    );
}

// ===========================================================================
// Topology 1: Chain (A → B → C)
//
// Properties:
//   - shortest_path(A, C) has length 2.
//   - Only A reaches everyone; its score is the same under every policy.
// ===========================================================================

#[test]
fn chain_shortest_path_length() {
    let g = GraphStore::from_adjacency([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec![])]);
    assert_eq!(shortest_path(&g, &"A", &"C").len(), 2);
}

#[test]
fn chain_source_score_is_policy_independent() {
    let g = GraphStore::from_adjacency([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec![])]);
    for policy in UnreachablePolicy::ALL {
        let result = closeness_centrality(&g, &config(policy));
        assert_score(&result, &"A", 2.0 / 3.0);
    }
}

// ===========================================================================
// Topology 2: Two-way chain (A ↔ B ↔ C)
//
//   A: 2 / (0 + 1 + 2) = 2/3
//   B: 2 / (1 + 0 + 1) = 1
//   C: 2 / (2 + 1 + 0) = 2/3
// ===========================================================================

#[test]
fn two_way_chain_scores() {
    let g = GraphStore::from_adjacency([
        ("A", vec!["B"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["B"]),
    ]);
    let result = closeness_centrality(&g, &ClosenessConfig::default());

    assert_score(&result, &"A", 2.0 / 3.0);
    assert_score(&result, &"B", 1.0);
    assert_score(&result, &"C", 2.0 / 3.0);
    assert_eq!(result.unreachable_pairs, 0);
    assert!(result.degenerate.is_empty());
}

// ===========================================================================
// Topology 3: Isolated node (A ↔ B, Z alone)
//
// Z reaches nobody. Under Exclude its distance sum is zero and the
// zero-distance policy decides its score; under the default Cap every
// missing term counts as n and Z gets the lowest possible score.
// ===========================================================================

#[test]
fn isolated_node_triggers_zero_distance_policy() {
    let g = GraphStore::from_adjacency([("A", vec!["B"]), ("B", vec!["A"]), ("Z", vec![])]);

    let zero = closeness_centrality(&g, &config(UnreachablePolicy::Exclude));
    assert_eq!(zero.degenerate, vec!["Z"]);
    assert_eq!(zero.score(&"Z"), Some(0.0));

    let omit = closeness_centrality(
        &g,
        &ClosenessConfig {
            unreachable: UnreachablePolicy::Exclude,
            zero_distance: ZeroDistancePolicy::Omit,
        },
    );
    assert_eq!(omit.degenerate, vec!["Z"]);
    assert_eq!(omit.score(&"Z"), None);
    assert_eq!(omit.scores.len(), 2);
    // A reaches one of two others: (1/2) · (1/1)
    assert_score(&omit, &"A", 0.5);
}

#[test]
fn isolated_node_under_default_is_scored_lowest() {
    let g = GraphStore::from_adjacency([("A", vec!["B"]), ("B", vec!["A"]), ("Z", vec![])]);
    let result = closeness_centrality(&g, &ClosenessConfig::default());

    // Z: 2 / (3 + 3 + 0)
    assert_score(&result, &"Z", 1.0 / 3.0);
    // A: 2 / (0 + 1 + 3)
    assert_score(&result, &"A", 0.5);
    assert!(result.degenerate.is_empty());
    assert_eq!(result.unreachable_pairs, 4);
    assert_eq!(result.ranked().last().map(|(n, _)| **n), Some("Z"));
}

#[test]
fn self_path_and_unreachable_differ_in_route_only() {
    let g = GraphStore::from_adjacency([("A", vec!["B"]), ("B", vec!["A"]), ("Z", vec![])]);
    assert!(shortest_path(&g, &"Z", &"Z").is_empty());
    assert!(shortest_path(&g, &"Z", &"A").is_empty());
    assert_eq!(route(&g, &"Z", &"Z"), Some(vec!["Z"]));
    assert_eq!(route(&g, &"Z", &"A"), None);
}

// ===========================================================================
// Topology 4: Follower graph
//
//   alice ─┐
//          ├→ carol → eve ─┐
//   bob ───┘        → dan ─┴→ frank → gale
//
// Distance sums (reachable only) and keys reached:
//   alice, bob: 1 + 2 + 2 + 3 + 4 = 12   (5)
//   carol:      1 + 1 + 2 + 3     = 7    (4)
//   eve, dan:   1 + 2             = 3    (2)
//   frank:      1                        (1)
//   gale:       0                        (0)
// ===========================================================================

#[test]
fn follows_scores_under_exclude() {
    let result = closeness_centrality(&samples::follows(), &config(UnreachablePolicy::Exclude));

    // r² / (6 · Σd)
    assert_score(&result, &"alice", 25.0 / 72.0);
    assert_score(&result, &"bob", 25.0 / 72.0);
    assert_score(&result, &"carol", 16.0 / 42.0);
    assert_score(&result, &"eve", 4.0 / 18.0);
    assert_score(&result, &"dan", 4.0 / 18.0);
    assert_score(&result, &"frank", 1.0 / 6.0);
    assert_score(&result, &"gale", 0.0);
    assert_eq!(result.degenerate, vec!["gale"]);
}

#[test]
fn follows_scores_under_zero_favor_dead_ends() {
    let result = closeness_centrality(&samples::follows(), &config(UnreachablePolicy::Zero));

    // 6 / Σd: the fewer nodes reached, the higher the score.
    assert_score(&result, &"alice", 0.5);
    assert_score(&result, &"carol", 6.0 / 7.0);
    assert_score(&result, &"eve", 2.0);
    assert_score(&result, &"frank", 6.0);
    assert_eq!(result.degenerate, vec!["gale"]);
}

#[test]
fn follows_scores_under_default_cap() {
    let result = closeness_centrality(&samples::follows(), &ClosenessConfig::default());

    // alice misses bob: 12 + 7
    assert_score(&result, &"alice", 6.0 / 19.0);
    // carol misses alice, bob: 7 + 14
    assert_score(&result, &"carol", 6.0 / 21.0);
    // frank misses five nodes: 1 + 35
    assert_score(&result, &"frank", 6.0 / 36.0);
    // gale misses six: 42
    assert_score(&result, &"gale", 6.0 / 42.0);
    assert!(result.degenerate.is_empty());
}

#[test]
fn follows_path_prefers_first_listed_branch() {
    let g = samples::follows();
    // carol lists eve before dan.
    assert_eq!(
        route(&g, &"alice", &"gale"),
        Some(vec!["alice", "carol", "eve", "frank", "gale"])
    );
}

// ===========================================================================
// Topology 5: Kingdom map (effectively undirected, connected)
//
// start is one hop from four locations and at most three from any other.
// ===========================================================================

#[test]
fn kingdom_start_is_most_central() {
    let result = closeness_centrality(&samples::kingdom(), &ClosenessConfig::default());

    // start: 4·1 + 5·2 + 2·3 = 20
    assert_score(&result, &"start", 11.0 / 20.0);
    // forest: 4·1 + 4·2 + 2·3 + 1·4 = 22
    assert_score(&result, &"forest", 11.0 / 22.0);
    assert_eq!(result.unreachable_pairs, 0);
    assert_eq!(result.ranked().first().map(|(n, _)| **n), Some("start"));
}

// ===========================================================================
// Topology 6: Integer line (1 ↔ 2 ↔ 3 ↔ 4 ↔ 5)
// ===========================================================================

#[test]
fn line_scores_are_symmetric() {
    let result = closeness_centrality(&samples::line(), &ClosenessConfig::default());

    assert_score(&result, &1, 0.4);
    assert_score(&result, &2, 4.0 / 7.0);
    assert_score(&result, &3, 4.0 / 6.0);
    assert_score(&result, &4, 4.0 / 7.0);
    assert_score(&result, &5, 0.4);
}

// ===========================================================================
// Monotonicity: moving a node away from the others never raises its score
// ===========================================================================

#[test]
fn detour_lowers_closeness() {
    // hub reaches a, b, c directly.
    let direct = GraphStore::from_adjacency([
        ("hub", vec!["a", "b", "c"]),
        ("a", vec![]),
        ("b", vec![]),
        ("c", vec![]),
    ]);
    // Same nodes, but c is only reachable through b.
    let detour = GraphStore::from_adjacency([
        ("hub", vec!["a", "b"]),
        ("a", vec![]),
        ("b", vec!["c"]),
        ("c", vec![]),
    ]);

    let cfg = ClosenessConfig::default();
    let before = closeness_centrality(&direct, &cfg).score(&"hub");
    let after = closeness_centrality(&detour, &cfg).score(&"hub");

    assert_eq!(before, Some(1.0));
    assert_eq!(after, Some(0.75));
}

#[test]
fn cutting_off_destinations_lowers_closeness() {
    let follows = samples::follows();
    // Same graph without eve → frank and dan → frank.
    let cut = GraphStore::from_adjacency([
        ("alice", vec!["carol"]),
        ("bob", vec!["carol"]),
        ("carol", vec!["eve", "dan"]),
        ("eve", vec![]),
        ("dan", vec![]),
        ("frank", vec!["gale"]),
        ("gale", vec![]),
    ]);

    let cfg = ClosenessConfig::default();
    let before = closeness_centrality(&follows, &cfg);
    let after = closeness_centrality(&cut, &cfg);

    // eve: 6 / (1 + 2 + 4·7), then 6 / (6·7)
    assert_score(&before, &"eve", 6.0 / 31.0);
    assert_score(&after, &"eve", 6.0 / 42.0);
    for node in follows.nodes() {
        let b = before.score(node).unwrap_or(0.0);
        let a = after.score(node).unwrap_or(0.0);
        assert!(a <= b, "{node}: {b} -> {a}");
    }
}
