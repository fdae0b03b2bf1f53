//! Closeness centrality normalized for partial reachability.
//!
//! For node `u`, let `R` be the number of other nodes reachable from `u` and
//! `S` the sum of their hop distances. Then
//!
//! ```text
//! C(u) = (R / (N − 1)) · (R / S)      if R > 0 and S > 0
//! C(u) = 0.0                          otherwise
//! ```
//!
//! The first factor scales by how much of the graph `u` can reach at all;
//! the second is the classic inverse mean distance over what it does reach.
//! A page one click from two others in a 100-page site therefore scores far
//! below a page that reaches every page in three clicks.

use std::collections::BTreeMap;

use navmetrics_core::NavGraph;
use tracing::instrument;

use crate::distance::{DistanceTable, Reach};

/// Closeness centrality for every node, keyed by label.
///
/// Graphs with fewer than two nodes score 0.0 everywhere.
#[must_use]
pub fn closeness_centrality(graph: &NavGraph) -> BTreeMap<String, f64> {
    closeness_from_table(graph, &DistanceTable::compute(graph))
}

/// Closeness centrality from a precomputed distance table.
#[must_use]
#[instrument(skip(graph, table))]
pub fn closeness_from_table(graph: &NavGraph, table: &DistanceTable) -> BTreeMap<String, f64> {
    let n = graph.node_count();

    graph
        .graph()
        .node_indices()
        .map(|idx| {
            let value = if n < 2 {
                0.0
            } else {
                normalized_closeness(table.reach(idx), n)
            };
            (graph.graph()[idx].clone(), value)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn normalized_closeness(reach: Reach, n: usize) -> f64 {
    let Reach { reachable, hop_sum } = reach;
    if reachable == 0 || hop_sum == 0 {
        return 0.0;
    }
    let r = reachable as f64;
    (r / (n - 1) as f64) * (r / hop_sum as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
