//! Side-by-side comparison of two sites' snapshots.
//!
//! The baseline is the reference design (typically the well-structured
//! site) and the candidate is measured against it. Each difference keeps
//! the direction in which it is reported:
//!
//! | Field                       | Formula                              |
//! |-----------------------------|--------------------------------------|
//! | `node_delta`, `edge_delta`  | baseline − candidate                 |
//! | `path_length_change_pct`    | (candidate − baseline) / baseline    |
//! | `clustering_ratio`          | baseline / candidate                 |
//! | `top_centrality_change_pct` | (baseline − candidate) / candidate   |

use std::fmt;

use serde::Serialize;

use super::snapshot::MetricsSnapshot;

const METRIC_COL: usize = 30;
const VALUE_COL: usize = 20;
const RULE_WIDTH: usize = 80;

/// The headline numbers of one site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonSide {
    pub num_nodes: usize,
    pub num_edges: usize,
    /// `None` when the site's average path length is undefined.
    pub average_path_length: Option<f64>,
    pub average_clustering: f64,
    /// Highest closeness score; `None` for an empty site.
    pub top_centrality: Option<f64>,
}

impl ComparisonSide {
    /// Pull the headline numbers out of `snapshot`.
    #[must_use]
    pub fn of(snapshot: &MetricsSnapshot) -> Self {
        Self {
            num_nodes: snapshot.graph_info.num_nodes,
            num_edges: snapshot.graph_info.num_edges,
            average_path_length: snapshot.average_shortest_path_length,
            average_clustering: snapshot.average_clustering_coefficient,
            top_centrality: snapshot.top_centrality(),
        }
    }
}

/// Differences between a baseline site and a candidate site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteComparison {
    pub baseline: ComparisonSide,
    pub candidate: ComparisonSide,
    /// Baseline nodes minus candidate nodes.
    pub node_delta: i64,
    /// Baseline edges minus candidate edges.
    pub edge_delta: i64,
    /// How much longer (positive) the candidate's average path is, in percent.
    pub path_length_change_pct: Option<f64>,
    /// How many times more clustered the baseline is.
    pub clustering_ratio: Option<f64>,
    /// How much higher (positive) the baseline's top centrality is, in percent.
    pub top_centrality_change_pct: Option<f64>,
}

impl SiteComparison {
    /// Compare `candidate` against `baseline`.
    ///
    /// A difference is `None` whenever one of its inputs is undefined or its
    /// divisor is zero.
    #[must_use]
    pub fn between(baseline: &MetricsSnapshot, candidate: &MetricsSnapshot) -> Self {
        let base = ComparisonSide::of(baseline);
        let cand = ComparisonSide::of(candidate);

        let path_length_change_pct = match (base.average_path_length, cand.average_path_length) {
            (Some(b), Some(c)) if b > 0.0 => Some((c - b) / b * 100.0),
            _ => None,
        };

        let clustering_ratio = (cand.average_clustering > 0.0)
            .then(|| base.average_clustering / cand.average_clustering);

        let top_centrality_change_pct = match (base.top_centrality, cand.top_centrality) {
            (Some(b), Some(c)) if c > 0.0 => Some((b - c) / c * 100.0),
            _ => None,
        };

        Self {
            node_delta: signed_delta(base.num_nodes, cand.num_nodes),
            edge_delta: signed_delta(base.num_edges, cand.num_edges),
            baseline: base,
            candidate: cand,
            path_length_change_pct,
            clustering_ratio,
            top_centrality_change_pct,
        }
    }

    /// Render the comparison as an aligned text table.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SiteComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (b, c) = (&self.baseline, &self.candidate);

        writeln!(
            f,
            "{:<METRIC_COL$} {:<VALUE_COL$} {:<VALUE_COL$} Difference",
            "Metric", "Baseline", "Candidate",
            METRIC_COL = METRIC_COL,
            VALUE_COL = VALUE_COL,
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        row(
            f,
            "Nodes (pages)",
            &b.num_nodes.to_string(),
            &c.num_nodes.to_string(),
            &format!("{:+}", self.node_delta),
        )?;
        row(
            f,
            "Edges (paths)",
            &b.num_edges.to_string(),
            &c.num_edges.to_string(),
            &format!("{:+}", self.edge_delta),
        )?;
        row(
            f,
            "Avg Path Length",
            &clicks(b.average_path_length),
            &clicks(c.average_path_length),
            &self
                .path_length_change_pct
                .map_or_else(|| "n/a".to_string(), |p| format!("{p:+.0}% slower")),
        )?;
        row(
            f,
            "Clustering Coefficient",
            &format!("{:.1}%", b.average_clustering * 100.0),
            &format!("{:.1}%", c.average_clustering * 100.0),
            &self
                .clustering_ratio
                .map_or_else(|| "n/a".to_string(), |r| format!("{r:.0}x better")),
        )?;
        row(
            f,
            "Top Centrality Score",
            &score(b.top_centrality),
            &score(c.top_centrality),
            &self
                .top_centrality_change_pct
                .map_or_else(|| "n/a".to_string(), |p| format!("{p:+.0}% higher")),
        )?;

        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

fn row(
    f: &mut fmt::Formatter<'_>,
    metric: &str,
    baseline: &str,
    candidate: &str,
    difference: &str,
) -> fmt::Result {
    writeln!(
        f,
        "{metric:<METRIC_COL$} {baseline:<VALUE_COL$} {candidate:<VALUE_COL$} {difference}",
        METRIC_COL = METRIC_COL,
        VALUE_COL = VALUE_COL,
    )
}

fn clicks(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |l| format!("{l:.2} clicks"))
}

fn score(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |s| format!("{s:.3}"))
}

fn signed_delta(a: usize, b: usize) -> i64 {
    if a >= b {
        i64::try_from(a - b).unwrap_or(i64::MAX)
    } else {
        i64::try_from(b - a).map_or(i64::MIN, |d| -d)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
