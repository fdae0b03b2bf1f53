#![forbid(unsafe_code)]
//! navmetrics-analysis library.
//!
//! Turns a [`navmetrics_core::NavGraph`] into structural metrics and their
//! exported forms:
//!
//! - [`distance`]: all-pairs hop distances by per-source BFS.
//! - [`metrics`]: average shortest path length, closeness centrality, and
//!   clustering coefficient.
//! - [`report`]: the JSON snapshot, ranked views, the text summary, and
//!   two-site comparison.
//!
//! ```no_run
//! use navmetrics_analysis::MetricsSnapshot;
//! use navmetrics_core::{NavGraph, read_edge_file};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), navmetrics_core::GraphError> {
//! let records = read_edge_file(Path::new("edges.json"))?;
//! let graph = NavGraph::from_records(records)?;
//! MetricsSnapshot::compute(&graph).write_to(Path::new("metrics.json"))?;
//! # Ok(())
//! # }
//! ```

pub mod distance;
pub mod metrics;
pub mod report;

pub use distance::{Distance, DistanceTable, Reach};
pub use metrics::{GraphMetrics, PathLength, PathLengthSummary, UndefinedReason, analyze};
pub use report::{
    ClusteringRating, ComparisonSide, GraphInfo, MetricsSnapshot, PathRating, RankedNode,
    RankedView, SiteComparison, SummaryReport, render_summary,
};
