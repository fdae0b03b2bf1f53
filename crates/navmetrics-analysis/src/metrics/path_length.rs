//! Average shortest path length over all ordered node pairs.
//!
//! ```text
//! L = Σ d(u, v) over ordered pairs u ≠ v with a path  /  N·(N − 1)
//! ```
//!
//! The denominator counts *every* ordered pair, reachable or not. An
//! unreachable pair adds nothing to the numerator but still dilutes the
//! average, so a more fragmented graph reports a *lower* L than the same
//! components would if they were joined. Callers that care about
//! fragmentation read [`PathLengthSummary::unreachable_pairs`] alongside L.

use tracing::{instrument, warn};

use navmetrics_core::NavGraph;
use petgraph::graph::NodeIndex;

use crate::distance::DistanceTable;

/// Why the average path length has no numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedReason {
    /// The graph has fewer than two nodes, so there are no pairs at all.
    TooFewNodes,
    /// There are pairs, but no node can reach any other.
    NoReachablePairs,
}

/// The average path length, or the reason it is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathLength {
    /// Mean hop count over all ordered pairs.
    Defined(f64),
    /// No numeric average exists.
    Undefined(UndefinedReason),
}

/// Average path length plus the pair counts behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLengthSummary {
    /// The average itself.
    pub length: PathLength,
    /// Ordered pairs `u ≠ v` with a directed path.
    pub reachable_pairs: usize,
    /// Ordered pairs `u ≠ v` without one.
    pub unreachable_pairs: usize,
}

impl PathLengthSummary {
    /// The numeric average, or `None` when undefined.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self.length {
            PathLength::Defined(l) => Some(l),
            PathLength::Undefined(_) => None,
        }
    }

    /// The reason the average is undefined, if it is.
    #[must_use]
    pub const fn undefined_reason(&self) -> Option<UndefinedReason> {
        match self.length {
            PathLength::Defined(_) => None,
            PathLength::Undefined(reason) => Some(reason),
        }
    }

    /// Total ordered pairs `N·(N − 1)`.
    #[must_use]
    pub const fn total_pairs(&self) -> usize {
        self.reachable_pairs + self.unreachable_pairs
    }
}

/// Compute the average shortest path length of `graph`.
///
/// Runs its own distance pass; use [`crate::metrics::analyze`] to share one
/// pass across metrics.
#[must_use]
pub fn average_shortest_path_length(graph: &NavGraph) -> PathLengthSummary {
    path_length_from_table(&DistanceTable::compute(graph))
}

/// Compute the average shortest path length from a precomputed table.
#[must_use]
#[instrument(skip(table), fields(nodes = table.node_count()))]
pub fn path_length_from_table(table: &DistanceTable) -> PathLengthSummary {
    let n = table.node_count();
    if n < 2 {
        return PathLengthSummary {
            length: PathLength::Undefined(UndefinedReason::TooFewNodes),
            reachable_pairs: 0,
            unreachable_pairs: 0,
        };
    }

    let mut hop_sum = 0usize;
    let mut reachable_pairs = 0usize;

    for si in 0..n {
        let reach = table.reach(NodeIndex::new(si));
        hop_sum += reach.hop_sum;
        reachable_pairs += reach.reachable;
    }

    let total_pairs = n * (n - 1);
    let unreachable_pairs = total_pairs - reachable_pairs;

    if unreachable_pairs > 0 {
        warn!(unreachable_pairs, total_pairs, "unreachable node pairs in graph");
    }

    let length = if reachable_pairs == 0 {
        PathLength::Undefined(UndefinedReason::NoReachablePairs)
    } else {
        PathLength::Defined(ratio(hop_sum, total_pairs))
    };

    PathLengthSummary {
        length,
        reachable_pairs,
        unreachable_pairs,
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
