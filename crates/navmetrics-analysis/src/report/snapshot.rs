//! Serializable record of every metric for one graph.
//!
//! The JSON shape is a stable exchange format read by other tools:
//!
//! ```json
//! {
//!   "graph_info": { "num_nodes": 4, "num_edges": 6, "total_weight": 46 },
//!   "average_shortest_path_length": 1.5,
//!   "average_clustering_coefficient": 0.25,
//!   "closeness_centrality": { "Home": 1.0, ... },
//!   "clustering_coefficient": { "Home": 0.0, ... }
//! }
//! ```
//!
//! Building a snapshot never touches the filesystem; [`MetricsSnapshot::write_to`]
//! is a separate, explicit step.

use std::{collections::BTreeMap, fs, path::Path};

use navmetrics_core::{GraphError, NavGraph};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::metrics::{GraphMetrics, analyze};

/// Size of the analyzed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInfo {
    /// Distinct page labels.
    pub num_nodes: usize,
    /// Distinct ordered `(source, target)` pairs.
    pub num_edges: usize,
    /// Sum of all edge weights; wider than one weight so it cannot overflow.
    pub total_weight: u128,
}

impl GraphInfo {
    /// Read the counts off `graph`.
    #[must_use]
    pub fn of(graph: &NavGraph) -> Self {
        Self {
            num_nodes: graph.node_count(),
            num_edges: graph.edge_count(),
            total_weight: graph.total_weight(),
        }
    }
}

/// All metrics for one graph, in export form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub graph_info: GraphInfo,
    /// `None` (JSON `null`) when the average is undefined.
    pub average_shortest_path_length: Option<f64>,
    pub average_clustering_coefficient: f64,
    pub closeness_centrality: BTreeMap<String, f64>,
    pub clustering_coefficient: BTreeMap<String, f64>,
}

impl MetricsSnapshot {
    /// Compute every metric for `graph`.
    #[must_use]
    pub fn compute(graph: &NavGraph) -> Self {
        Self::from_metrics(GraphInfo::of(graph), analyze(graph))
    }

    /// Assemble a snapshot from already-computed metrics.
    #[must_use]
    pub fn from_metrics(graph_info: GraphInfo, metrics: GraphMetrics) -> Self {
        Self {
            graph_info,
            average_shortest_path_length: metrics.path_length.value(),
            average_clustering_coefficient: metrics.average_clustering,
            closeness_centrality: metrics.closeness,
            clustering_coefficient: metrics.clustering,
        }
    }

    /// Highest closeness score, or `None` for an empty graph.
    #[must_use]
    pub fn top_centrality(&self) -> Option<f64> {
        self.closeness_centrality
            .values()
            .copied()
            .max_by(f64::total_cmp)
    }

    /// Pretty JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot previously produced by [`Self::to_json_pretty`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] if `json` is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the snapshot to `path` as pretty JSON.
    ///
    /// Parent directories are created automatically. An existing file is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] if serialization fails, or
    /// [`GraphError::Io`] if the directory or file cannot be written.
    #[instrument(skip(self))]
    pub fn write_to(&self, path: &Path) -> Result<(), GraphError> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GraphError::io(parent.to_path_buf(), e))?;
        }
        fs::write(path, json).map_err(|e| GraphError::io(path.to_path_buf(), e))?;

        info!(path = %path.display(), "metrics snapshot written");
        Ok(())
    }

    /// Read a snapshot from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be read, or
    /// [`GraphError::Encode`] if its contents are not a valid snapshot.
    pub fn read_from(path: &Path) -> Result<Self, GraphError> {
        let json = fs::read_to_string(path).map_err(|e| GraphError::io(path.to_path_buf(), e))?;
        Self::from_json(&json)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
