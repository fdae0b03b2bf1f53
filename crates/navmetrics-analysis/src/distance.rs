//! All-pairs hop distances via per-source breadth-first search.
//!
//! # Overview
//!
//! Every metric that talks about "how many clicks" reads from a
//! [`DistanceTable`]: a dense source × target matrix of hop counts over the
//! directed out-adjacency of a [`NavGraph`].
//!
//! # Algorithm
//!
//! 1. For each source node `s`, run BFS along outgoing edges.
//! 2. Record the BFS depth of every node reached; `s` itself is at depth 0.
//! 3. Nodes never reached stay [`Distance::Unreachable`].
//!
//! Complexity: O(V · (V + E)). Edge weights are traversal counts, not costs,
//! so they play no part here and plain BFS gives the exact shortest hop
//! count.
//!
//! The table is derived and transient: it is recomputed for every metrics
//! call and never cached across graph loads.

use std::collections::VecDeque;

use navmetrics_core::NavGraph;
use petgraph::graph::NodeIndex;
use tracing::{debug, instrument};

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Shortest hop count between two nodes, or the absence of any path.
///
/// `Unreachable` is its own category, not an infinitely large distance; it
/// never takes part in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    /// Number of edges on a shortest directed path.
    Hops(usize),
    /// No directed path exists.
    Unreachable,
}

impl Distance {
    /// The hop count, if reachable.
    #[must_use]
    pub const fn hops(self) -> Option<usize> {
        match self {
            Self::Hops(h) => Some(h),
            Self::Unreachable => None,
        }
    }

    /// Return `true` if a directed path exists.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Hops(_))
    }
}

/// How much of the graph one source reaches, excluding the source itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reach {
    /// Number of other nodes reachable from the source.
    pub reachable: usize,
    /// Sum of hop counts to those nodes.
    pub hop_sum: usize,
}

// ---------------------------------------------------------------------------
// DistanceTable
// ---------------------------------------------------------------------------

/// Dense all-pairs hop-count table, indexed by the graph's `NodeIndex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    n: usize,
    /// Row-major `n × n`; `None` = unreachable.
    cells: Vec<Option<usize>>,
}

impl DistanceTable {
    /// Compute the full table for `graph`.
    #[must_use]
    #[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn compute(graph: &NavGraph) -> Self {
        let n = graph.node_count();
        let mut cells: Vec<Option<usize>> = vec![None; n * n];

        // Reused across sources.
        let mut queue: VecDeque<NodeIndex> = VecDeque::with_capacity(n);

        for (si, row) in cells.chunks_mut(n.max(1)).enumerate().take(n) {
            bfs_row(graph, NodeIndex::new(si), row, &mut queue);
        }

        let table = Self { n, cells };
        debug!(
            unreachable_pairs = table.unreachable_pairs(),
            "computed all-pairs hop distances"
        );
        table
    }

    /// Number of nodes covered by the table.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.n
    }

    /// Distance from `source` to `target`.
    ///
    /// Indices outside the table are reported as unreachable.
    #[must_use]
    pub fn get(&self, source: NodeIndex, target: NodeIndex) -> Distance {
        let (s, t) = (source.index(), target.index());
        if s >= self.n || t >= self.n {
            return Distance::Unreachable;
        }
        self.cells[s * self.n + t].map_or(Distance::Unreachable, Distance::Hops)
    }

    /// Distance between two labelled nodes, or `None` if either label is not
    /// in `graph`.
    #[must_use]
    pub fn distance(&self, graph: &NavGraph, source: &str, target: &str) -> Option<Distance> {
        let s = graph.node_index(source)?;
        let t = graph.node_index(target)?;
        Some(self.get(s, t))
    }

    /// All distances from `source`, in node order (including itself at 0).
    pub fn row(&self, source: NodeIndex) -> impl Iterator<Item = (NodeIndex, Distance)> + '_ {
        let s = source.index();
        let row: &[Option<usize>] = if s < self.n {
            &self.cells[s * self.n..(s + 1) * self.n]
        } else {
            &[]
        };
        row.iter().enumerate().map(|(t, cell)| {
            (
                NodeIndex::new(t),
                cell.map_or(Distance::Unreachable, Distance::Hops),
            )
        })
    }

    /// Reach of `source` over every *other* node.
    #[must_use]
    pub fn reach(&self, source: NodeIndex) -> Reach {
        let si = source.index();
        self.row(source)
            .filter(|(t, _)| t.index() != si)
            .filter_map(|(_, d)| d.hops())
            .fold(Reach::default(), |acc, h| Reach {
                reachable: acc.reachable + 1,
                hop_sum: acc.hop_sum + h,
            })
    }

    /// Number of ordered pairs `u ≠ v` with no directed path `u → v`.
    #[must_use]
    pub fn unreachable_pairs(&self) -> usize {
        // The diagonal is always reachable (distance 0), so every `None`
        // cell is an off-diagonal pair.
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Fill `row` with BFS depths from `source`.
fn bfs_row(
    graph: &NavGraph,
    source: NodeIndex,
    row: &mut [Option<usize>],
    queue: &mut VecDeque<NodeIndex>,
) {
    queue.clear();
    row[source.index()] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let Some(dv) = row[v.index()] else {
            continue;
        };

        for w in graph.successors(v) {
            // First visit to w? Self-loops land here already visited.
            if row[w.index()].is_none() {
                row[w.index()] = Some(dv + 1);
                queue.push_back(w);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
