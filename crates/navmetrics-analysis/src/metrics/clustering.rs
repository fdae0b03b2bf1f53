//! Local clustering coefficient over out-neighborhoods.
//!
//! For node `u` with out-degree `k`:
//!
//! ```text
//! C(u) = T(u) / (k·(k − 1) / 2)      if k ≥ 2
//! C(u) = 0.0                         otherwise
//! ```
//!
//! `T(u)` counts unordered pairs of out-neighbors joined by an edge in
//! *either* direction. The neighborhood is directed (only pages `u` links
//! to), but the neighbor-to-neighbor check is not, so the coefficient makes
//! no symmetry assumption about the graph as a whole.
//!
//! A self-loop makes `u` one of its own out-neighbors and is counted like
//! any other neighbor.
//!
//! Cost is O(k²) edge lookups per node, which stays small because real pages
//! have a bounded number of links.

use std::collections::BTreeMap;

use navmetrics_core::NavGraph;
use petgraph::graph::NodeIndex;
use tracing::instrument;

/// Clustering coefficient for every node, keyed by label.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn clustering_coefficients(graph: &NavGraph) -> BTreeMap<String, f64> {
    graph
        .graph()
        .node_indices()
        .map(|idx| (graph.graph()[idx].clone(), local_clustering(graph, idx)))
        .collect()
}

/// Unweighted mean of per-node coefficients; 0.0 for an empty map.
///
/// Nodes with fewer than two out-neighbors contribute their 0.0 rather than
/// being left out.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_clustering(coefficients: &BTreeMap<String, f64>) -> f64 {
    if coefficients.is_empty() {
        return 0.0;
    }
    coefficients.values().sum::<f64>() / coefficients.len() as f64
}

/// Average clustering coefficient of `graph`.
#[must_use]
pub fn average_clustering_coefficient(graph: &NavGraph) -> f64 {
    average_clustering(&clustering_coefficients(graph))
}

#[allow(clippy::cast_precision_loss)]
fn local_clustering(graph: &NavGraph, idx: NodeIndex) -> f64 {
    let neighbors: Vec<NodeIndex> = graph.successors(idx).collect();
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let mut triangles = 0usize;
    for (i, &n1) in neighbors.iter().enumerate() {
        for &n2 in &neighbors[i + 1..] {
            if graph.connected_either_way(n1, n2) {
                triangles += 1;
            }
        }
    }

    let possible = k * (k - 1) / 2;
    triangles as f64 / possible as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
