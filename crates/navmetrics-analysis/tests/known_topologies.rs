//! Known-topology regression tests for navigation metrics.
//!
//! Each test uses a hand-crafted graph whose metric values can be worked out
//! by hand. The expected values are hardcoded, so any change to the
//! algorithms that shifts a number is caught here.

use navmetrics_analysis::{
    DistanceTable, MetricsSnapshot, UndefinedReason, analyze,
    metrics::{
        average_clustering_coefficient, average_shortest_path_length, closeness_centrality,
        clustering_coefficients,
    },
};
use navmetrics_core::{EdgeRecord, NavGraph, parse_edge_list};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_graph(edges: &[(&str, &str, u64)]) -> NavGraph {
    NavGraph::from_records(
        edges
            .iter()
            .map(|(s, t, w)| EdgeRecord::new(*s, *t, *w)),
    )
    .expect("valid records")
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// ===========================================================================
// Degenerate graphs: fewer than two nodes
// ===========================================================================

#[test]
fn empty_graph_metrics() {
    let g = NavGraph::new();
    let m = analyze(&g);

    assert_eq!(m.path_length.value(), None);
    assert_eq!(
        m.path_length.undefined_reason(),
        Some(UndefinedReason::TooFewNodes)
    );
    assert!(m.closeness.is_empty());
    assert!(approx_eq(m.average_clustering, 0.0));
}

#[test]
fn single_node_metrics() {
    let g = build_graph(&[("Home", "Home", 3)]);
    let m = analyze(&g);

    assert_eq!(
        m.path_length.undefined_reason(),
        Some(UndefinedReason::TooFewNodes)
    );
    assert_eq!(m.closeness.len(), 1);
    assert!(approx_eq(m.closeness["Home"], 0.0));
}

// ===========================================================================
// Topology 1: single edge (A → B, weight 5)
//
//   One reachable pair at distance 1, one unreachable pair.
//   L = 1 / (2·1) = 0.5
// ===========================================================================

#[test]
fn single_edge_path_length_is_half() {
    let g = build_graph(&[("A", "B", 5)]);
    let summary = average_shortest_path_length(&g);

    assert_eq!(summary.value(), Some(0.5));
    assert_eq!(summary.unreachable_pairs, 1);
    assert_eq!(g.total_weight(), 5);
}

// ===========================================================================
// Topology 2: directed 3-cycle (A → B → C → A)
//
//   Every node has out-degree 1, so clustering is 0 everywhere.
//   Every node reaches the other two at distances 1 and 2:
//   C = (2/2)·(2/3) = 2/3 for all nodes.
// ===========================================================================

#[test]
fn three_cycle_clustering_is_zero() {
    let g = build_graph(&[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
    let cc = clustering_coefficients(&g);
    assert!(cc.values().all(|&c| approx_eq(c, 0.0)));
    assert!(approx_eq(average_clustering_coefficient(&g), 0.0));
}

#[test]
fn three_cycle_closeness_is_equal_and_positive() {
    let g = build_graph(&[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
    let cc = closeness_centrality(&g);

    for node in ["A", "B", "C"] {
        assert!(
            approx_eq(cc[node], 2.0 / 3.0),
            "{node} closeness = {}",
            cc[node]
        );
    }
}

#[test]
fn three_cycle_path_length() {
    // Distances: 1, 2 from every node → sum 9 over 6 pairs.
    let g = build_graph(&[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
    let summary = average_shortest_path_length(&g);
    assert_eq!(summary.value(), Some(1.5));
    assert_eq!(summary.unreachable_pairs, 0);
}

// ===========================================================================
// Topology 3: mutual pair (A ⇄ B)
// ===========================================================================

#[test]
fn mutual_pair_is_one_click_apart() {
    let g = build_graph(&[("A", "B", 2), ("B", "A", 7)]);
    let m = analyze(&g);

    assert_eq!(m.path_length.value(), Some(1.0));
    assert!(approx_eq(m.closeness["A"], m.closeness["B"]));
    assert!(m.closeness["A"] > 0.0);
}

// ===========================================================================
// Topology 4: out-star (Hub → L1, L2, L3, L4)
//
//   Leaves share no edges, so the hub scores 0 and leaves (out-degree 0)
//   also score 0.
// ===========================================================================

#[test]
fn star_clustering_is_zero_everywhere() {
    let g = build_graph(&[
        ("Hub", "L1", 1),
        ("Hub", "L2", 1),
        ("Hub", "L3", 1),
        ("Hub", "L4", 1),
    ]);
    let cc = clustering_coefficients(&g);
    assert_eq!(cc.len(), 5);
    assert!(cc.values().all(|&c| approx_eq(c, 0.0)));
}

#[test]
fn star_hub_is_most_central() {
    let g = build_graph(&[
        ("Hub", "L1", 1),
        ("Hub", "L2", 1),
        ("Hub", "L3", 1),
        ("Hub", "L4", 1),
    ]);
    let cc = closeness_centrality(&g);
    assert!(approx_eq(cc["Hub"], 1.0));
    for leaf in ["L1", "L2", "L3", "L4"] {
        assert!(approx_eq(cc[leaf], 0.0));
    }
}

// ===========================================================================
// Topology 5: fully interlinked triangle
//
//   Every page links to both others: clustering 1.0, L 1.0.
// ===========================================================================

#[test]
fn full_triangle_is_fully_clustered() {
    let g = build_graph(&[
        ("A", "B", 1),
        ("A", "C", 1),
        ("B", "A", 1),
        ("B", "C", 1),
        ("C", "A", 1),
        ("C", "B", 1),
    ]);
    let m = analyze(&g);
    assert!(m.clustering.values().all(|&c| approx_eq(c, 1.0)));
    assert!(approx_eq(m.average_clustering, 1.0));
    assert_eq!(m.path_length.value(), Some(1.0));
}

// ===========================================================================
// Topology 6: disconnected components
//
//   {A ⇄ B} and {C ⇄ D}. Joined, every pair would be reachable; apart,
//   8 of 12 ordered pairs are unreachable and L drops below 1.
// ===========================================================================

#[test]
fn disconnected_components_lower_path_length() {
    let apart = build_graph(&[("A", "B", 1), ("B", "A", 1), ("C", "D", 1), ("D", "C", 1)]);
    let summary = average_shortest_path_length(&apart);

    assert_eq!(summary.unreachable_pairs, 8);
    assert_eq!(summary.reachable_pairs, 4);
    // 4 pairs at distance 1 over 12.
    let l = summary.value().expect("defined");
    assert!(approx_eq(l, 4.0 / 12.0), "L = {l}");

    let table = DistanceTable::compute(&apart);
    assert_eq!(table.unreachable_pairs(), 8);

    // Same components bridged by B ⇄ C: every pair reachable.
    //   A: 1, 2, 3   B: 1, 1, 2   C: 2, 1, 1   D: 3, 2, 1  → 20 / 12
    let joined = build_graph(&[
        ("A", "B", 1),
        ("B", "A", 1),
        ("C", "D", 1),
        ("D", "C", 1),
        ("B", "C", 1),
        ("C", "B", 1),
    ]);
    let joined_summary = average_shortest_path_length(&joined);
    assert_eq!(joined_summary.unreachable_pairs, 0);
    let joined_l = joined_summary.value().expect("defined");
    assert!(approx_eq(joined_l, 20.0 / 12.0), "joined L = {joined_l}");
    assert!(l < joined_l, "apart L {l} should be below joined L {joined_l}");
}

#[test]
fn disconnected_components_penalize_closeness() {
    let apart = build_graph(&[("A", "B", 1), ("B", "A", 1), ("C", "D", 1), ("D", "C", 1)]);
    let cc = closeness_centrality(&apart);
    // R = 1, S = 1, N = 4 → (1/3)·1.
    for node in ["A", "B", "C", "D"] {
        assert!(approx_eq(cc[node], 1.0 / 3.0));
    }
}

#[test]
fn only_self_loops_has_no_reachable_pairs() {
    let g = build_graph(&[("A", "A", 1), ("B", "B", 1)]);
    let summary = average_shortest_path_length(&g);
    assert_eq!(
        summary.undefined_reason(),
        Some(UndefinedReason::NoReachablePairs)
    );
}

// ===========================================================================
// Topology 7: small settings flow from a crawl
//
//   Home → Settings → {Profile, Privacy}, Profile ⇄ Privacy, both back to
//   Home. Loaded from line-delimited records as a crawler would emit them.
// ===========================================================================

const SETTINGS_FLOW: &str = r#"
{"source": "Home", "target": "Settings", "weight": 12}
{"source": "Settings", "target": "Profile", "weight": 7}
{"source": "Settings", "target": "Privacy", "weight": 4}
{"source": "Profile", "target": "Privacy", "weight": 2}
{"source": "Privacy", "target": "Profile", "weight": 1}
{"source": "Profile", "target": "Home", "weight": 3}
{"source": "Privacy", "target": "Home", "weight": 2}
"#;

#[test]
fn settings_flow_metrics() {
    let records = parse_edge_list(SETTINGS_FLOW).expect("parse");
    let g = NavGraph::from_records(records).expect("build");
    let snap = MetricsSnapshot::compute(&g);

    assert_eq!(snap.graph_info.num_nodes, 4);
    assert_eq!(snap.graph_info.num_edges, 7);
    assert_eq!(snap.graph_info.total_weight, 31);

    // Settings: neighbors {Profile, Privacy}, linked → 1.0.
    // Profile: neighbors {Privacy, Home}; Privacy → Home links them → 1.0.
    // Privacy: neighbors {Profile, Home}; Profile → Home → 1.0.
    // Home: out-degree 1 → 0.0.
    assert!(approx_eq(snap.clustering_coefficient["Settings"], 1.0));
    assert!(approx_eq(snap.clustering_coefficient["Profile"], 1.0));
    assert!(approx_eq(snap.clustering_coefficient["Privacy"], 1.0));
    assert!(approx_eq(snap.clustering_coefficient["Home"], 0.0));
    assert!(approx_eq(snap.average_clustering_coefficient, 0.75));

    // Distances:
    //   Home:     Settings 1, Profile 2, Privacy 2          → 5
    //   Settings: Profile 1, Privacy 1, Home 2              → 4
    //   Profile:  Privacy 1, Home 1, Settings 2             → 4
    //   Privacy:  Profile 1, Home 1, Settings 2             → 4
    // L = 17 / 12
    let l = snap.average_shortest_path_length.expect("defined");
    assert!(approx_eq(l, 17.0 / 12.0), "L = {l}");

    // Closeness = 3 / S.
    assert!(approx_eq(snap.closeness_centrality["Home"], 3.0 / 5.0));
    assert!(approx_eq(snap.closeness_centrality["Settings"], 3.0 / 4.0));
}
