//! Human-readable text report for a metrics snapshot.
//!
//! Layout:
//!
//! ```text
//! ======================================================================
//! UI NAVIGATION GRAPH METRICS REPORT
//! ======================================================================
//!
//! GRAPH STRUCTURE
//!   Nodes (pages/elements): 4
//!   ...
//! AVERAGE SHORTEST PATH LENGTH
//! CLOSENESS CENTRALITY (Top 10 Most Central Pages)
//! CLUSTERING COEFFICIENT
//! ======================================================================
//! ```

use std::fmt;

use navmetrics_core::{AnalysisConfig, RatingConfig};
use serde::Serialize;

use super::{ranking::RankedView, snapshot::MetricsSnapshot};

const RULE_WIDTH: usize = 70;

// ---------------------------------------------------------------------------
// Rating bands
// ---------------------------------------------------------------------------

/// How efficient navigation is, judged by average path length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PathRating {
    /// Band for an average path length of `clicks`.
    #[must_use]
    pub fn classify(clicks: f64, ratings: &RatingConfig) -> Self {
        if clicks < ratings.path_excellent_below {
            Self::Excellent
        } else if clicks < ratings.path_good_below {
            Self::Good
        } else if clicks < ratings.path_fair_below {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Upper-case band name shown in the report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }

    /// One-line reading of the band.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Excellent => "Very efficient navigation",
            Self::Good => "Reasonable navigation efficiency",
            Self::Fair => "Consider shortening some paths",
            Self::Poor => "UI has very long navigation paths",
        }
    }
}

/// How interlinked neighboring pages are, judged by average clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusteringRating {
    High,
    Moderate,
    Low,
}

impl ClusteringRating {
    /// Band for an average clustering coefficient.
    #[must_use]
    pub fn classify(coefficient: f64, ratings: &RatingConfig) -> Self {
        if coefficient > ratings.clustering_high_above {
            Self::High
        } else if coefficient > ratings.clustering_moderate_above {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Upper-case band name shown in the report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
        }
    }

    /// One-line reading of the band.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::High => "Strong modularity, well-organized sections",
            Self::Moderate => "Decent local connectivity",
            Self::Low => "Pages could be better interconnected",
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Renders a snapshot as text through [`fmt::Display`].
pub struct SummaryReport<'a> {
    snapshot: &'a MetricsSnapshot,
    config: &'a AnalysisConfig,
    view: RankedView,
}

impl<'a> SummaryReport<'a> {
    /// Prepare a report; rankings are computed here, once.
    #[must_use]
    pub fn new(snapshot: &'a MetricsSnapshot, config: &'a AnalysisConfig) -> Self {
        Self {
            snapshot,
            config,
            view: RankedView::from_snapshot(snapshot, &config.report),
        }
    }

    fn write_structure(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &self.snapshot.graph_info;
        writeln!(f, "GRAPH STRUCTURE")?;
        writeln!(f, "  Nodes (pages/elements): {}", info.num_nodes)?;
        writeln!(f, "  Edges (navigation paths): {}", info.num_edges)?;
        writeln!(f, "  Total navigation events: {}", info.total_weight)?;
        writeln!(f)
    }

    fn write_path_length(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AVERAGE SHORTEST PATH LENGTH")?;
        match self.snapshot.average_shortest_path_length {
            Some(l) => {
                let rating = PathRating::classify(l, &self.config.ratings);
                writeln!(f, "  L = {l:.3} clicks")?;
                writeln!(f, "  Interpretation: On average, users need {l:.1} clicks")?;
                writeln!(f, "                  to navigate between any two pages.")?;
                writeln!(f, "  {} - {}", rating.label(), rating.verdict())?;
            }
            None => {
                writeln!(f, "  Unable to calculate (disconnected graph or < 2 nodes)")?;
            }
        }
        writeln!(f)
    }

    fn write_centrality(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.config.report.centrality_label_width;
        writeln!(
            f,
            "CLOSENESS CENTRALITY (Top {} Most Central Pages)",
            self.config.report.top_central
        )?;
        for node in &self.view.top_central {
            writeln!(f, "  {:2}. {}", node.rank, truncate_label(&node.label, width))?;
            writeln!(f, "      Centrality: {:.4}", node.score)?;
        }
        if self.view.remaining_central > 0 {
            writeln!(f, "  ... and {} more nodes", self.view.remaining_central)?;
        }
        writeln!(f)
    }

    fn write_clustering(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg = self.snapshot.average_clustering_coefficient;
        let rating = ClusteringRating::classify(avg, &self.config.ratings);
        let width = self.config.report.clustering_label_width;
        let n = self.config.report.top_clustered;

        writeln!(f, "CLUSTERING COEFFICIENT")?;
        writeln!(f, "  Average: {avg:.4}")?;
        writeln!(
            f,
            "  Interpretation: {:.1}% of possible neighbor",
            avg * 100.0
        )?;
        writeln!(f, "                  connections are realized.")?;
        writeln!(f, "  {} - {}", rating.label(), rating.verdict())?;
        writeln!(f)?;

        writeln!(f, "  Most Clustered Nodes (Top {n}):")?;
        for node in &self.view.most_clustered {
            writeln!(
                f,
                "    {}. {}: {:.3}",
                node.rank,
                truncate_label(&node.label, width),
                node.score
            )?;
        }
        writeln!(f)?;

        writeln!(f, "  Least Clustered Nodes (Bottom {n}):")?;
        for node in &self.view.least_clustered {
            writeln!(
                f,
                "    {}. {}: {:.3}",
                node.rank,
                truncate_label(&node.label, width),
                node.score
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "UI NAVIGATION GRAPH METRICS REPORT")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)?;
        self.write_structure(f)?;
        self.write_path_length(f)?;
        self.write_centrality(f)?;
        self.write_clustering(f)?;
        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

/// Render the full text report for `snapshot`.
#[must_use]
pub fn render_summary(snapshot: &MetricsSnapshot, config: &AnalysisConfig) -> String {
    SummaryReport::new(snapshot, config).to_string()
}

/// Cut `label` to `width` characters, marking the cut with `...`.
fn truncate_label(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let mut out: String = label.chars().take(width).collect();
    out.push_str("...");
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
