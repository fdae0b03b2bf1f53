//! Ranked views over a snapshot's per-node scores.
//!
//! Pure sorting and truncation; no metric is recomputed here.

use std::{cmp::Ordering, collections::BTreeMap};

use navmetrics_core::ReportConfig;
use serde::Serialize;

use super::snapshot::MetricsSnapshot;

/// One node at a 1-based position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    /// 1-based position.
    pub rank: usize,
    pub label: String,
    pub score: f64,
}

/// Top and bottom slices of the centrality and clustering rankings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedView {
    /// Highest closeness first.
    pub top_central: Vec<RankedNode>,
    /// Nodes that fell outside `top_central`.
    pub remaining_central: usize,
    /// Highest clustering first; nodes scoring 0.0 are left out.
    pub most_clustered: Vec<RankedNode>,
    /// Lowest clustering first.
    pub least_clustered: Vec<RankedNode>,
}

impl RankedView {
    /// Build the view from `snapshot`, sized by `config`.
    ///
    /// Equal scores are ordered by label ascending, so the view is fully
    /// deterministic.
    #[must_use]
    pub fn from_snapshot(snapshot: &MetricsSnapshot, config: &ReportConfig) -> Self {
        let central = descending(&snapshot.closeness_centrality);
        let remaining_central = central.len().saturating_sub(config.top_central);
        let top_central = ranked(central.into_iter().take(config.top_central));

        let clustered = descending(&snapshot.clustering_coefficient);
        let most_clustered = ranked(
            clustered
                .iter()
                .copied()
                .filter(|(_, score)| *score > 0.0)
                .take(config.top_clustered),
        );
        let least_clustered = ranked(
            ascending(&snapshot.clustering_coefficient)
                .into_iter()
                .take(config.top_clustered),
        );

        Self {
            top_central,
            remaining_central,
            most_clustered,
            least_clustered,
        }
    }
}

fn descending(scores: &BTreeMap<String, f64>) -> Vec<(&str, f64)> {
    let mut v: Vec<(&str, f64)> = scores.iter().map(|(k, s)| (k.as_str(), *s)).collect();
    v.sort_by(|a, b| by_score(b.1, a.1).then_with(|| a.0.cmp(b.0)));
    v
}

fn ascending(scores: &BTreeMap<String, f64>) -> Vec<(&str, f64)> {
    let mut v: Vec<(&str, f64)> = scores.iter().map(|(k, s)| (k.as_str(), *s)).collect();
    v.sort_by(|a, b| by_score(a.1, b.1).then_with(|| a.0.cmp(b.0)));
    v
}

fn by_score(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

fn ranked<'a>(entries: impl Iterator<Item = (&'a str, f64)>) -> Vec<RankedNode> {
    entries
        .enumerate()
        .map(|(i, (label, score))| RankedNode {
            rank: i + 1,
            label: label.to_string(),
            score,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
