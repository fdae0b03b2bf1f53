//! Structural metrics over a navigation graph.
//!
//! # Pipeline
//!
//! ```text
//! NavGraph ──► DistanceTable ──┬──► path_length   (average clicks between pages)
//!                              └──► closeness     (how central each page is)
//! NavGraph ──────────────────────► clustering     (how interlinked neighbors are)
//! ```
//!
//! Each metric is available standalone, and [`analyze`] computes all of
//! them with a single all-pairs distance pass. All metrics are pure
//! functions of the graph and never mutate it.

pub mod closeness;
pub mod clustering;
pub mod path_length;

use std::collections::BTreeMap;

use navmetrics_core::NavGraph;
use tracing::{info, instrument};

use crate::distance::DistanceTable;

pub use closeness::{closeness_centrality, closeness_from_table};
pub use clustering::{average_clustering, average_clustering_coefficient, clustering_coefficients};
pub use path_length::{
    PathLength, PathLengthSummary, UndefinedReason, average_shortest_path_length,
    path_length_from_table,
};

/// Every metric for one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphMetrics {
    /// Average shortest path length and the pair counts behind it.
    pub path_length: PathLengthSummary,
    /// Closeness centrality per page label.
    pub closeness: BTreeMap<String, f64>,
    /// Clustering coefficient per page label.
    pub clustering: BTreeMap<String, f64>,
    /// Unweighted mean of `clustering`.
    pub average_clustering: f64,
}

/// Compute all metrics for `graph` with one shared distance pass.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn analyze(graph: &NavGraph) -> GraphMetrics {
    let table = DistanceTable::compute(graph);

    let path_length = path_length_from_table(&table);
    let closeness = closeness_from_table(graph, &table);
    let clustering = clustering_coefficients(graph);
    let average_clustering = average_clustering(&clustering);

    info!(
        average_path_length = ?path_length.value(),
        average_clustering,
        "graph metrics computed"
    );

    GraphMetrics {
        path_length,
        closeness,
        clustering,
        average_clustering,
    }
}
