//! The [`NavGraph`] store.
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "a user clicked from page A to page B". The edge
//! weight is the number of times that transition was observed. Weights are
//! kept for reporting only; no distance computation reads them.
//!
//! ## Duplicate Pairs
//!
//! An ordered pair holds at most one weight. When the same `(source, target)`
//! pair appears twice in one edge list, the later record overwrites the
//! earlier weight instead of adding to it.
//!
//! ## Content Hash
//!
//! [`NavGraph::content_hash`] is a BLAKE3 hash of the sorted
//! `(source, target, weight)` triples, so two loads that produce the same
//! graph hash equal regardless of record order.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use tracing::{debug, info, instrument};

use crate::error::GraphError;
use crate::record::{EdgeRecord, RecordLocation};

// ---------------------------------------------------------------------------
// NavGraph
// ---------------------------------------------------------------------------

/// A directed, weighted navigation graph.
///
/// Nodes are page labels, ordered by first appearance in the edge list. The
/// store owns its adjacency exclusively; the only way to change it is to
/// [`load`](Self::load) a new edge list.
#[derive(Debug, Clone, Default)]
pub struct NavGraph {
    graph: DiGraph<String, u64>,
    node_map: HashMap<String, NodeIndex>,
}

impl NavGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list.
    ///
    /// Both endpoints of every record join the node set. A repeated ordered
    /// pair overwrites the earlier weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DataFormat`] for the first record with an empty
    /// endpoint or a zero weight. No graph is produced in that case.
    #[instrument(skip(records))]
    pub fn from_records<I>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = DiGraph::<String, u64>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
        let mut overwritten = 0usize;

        for (i, record) in records.into_iter().enumerate() {
            record.validate(RecordLocation::Index(i))?;

            let EdgeRecord {
                source,
                target,
                weight,
            } = record;

            let s = intern(&mut graph, &mut node_map, source);
            let t = intern(&mut graph, &mut node_map, target);

            if let Some(edge) = graph.find_edge(s, t) {
                let previous = graph[edge];
                graph[edge] = weight;
                overwritten += 1;
                debug!(
                    source = %graph[s],
                    target = %graph[t],
                    previous,
                    weight,
                    "duplicate edge overwrote earlier weight"
                );
            } else {
                graph.add_edge(s, t, weight);
            }
        }

        let built = Self { graph, node_map };
        info!(
            nodes = built.node_count(),
            edges = built.edge_count(),
            overwritten,
            "loaded navigation graph"
        );
        Ok(built)
    }

    /// Replace this graph with one built from `records`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DataFormat`] if any record is invalid. The
    /// current graph is left untouched on failure.
    pub fn load<I>(&mut self, records: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        *self = Self::from_records(records)?;
        Ok(())
    }

    /// Number of distinct page labels.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct ordered `(source, target)` pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Sum of all stored edge weights (total observed clicks).
    ///
    /// Widened to `u128` so any number of `u64` weights sums exactly.
    #[must_use]
    pub fn total_weight(&self) -> u128 {
        self.graph.edge_weights().map(|&w| u128::from(w)).sum()
    }

    /// Return `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Page labels in node order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Return `true` if `label` is a node.
    #[must_use]
    pub fn contains_node(&self, label: &str) -> bool {
        self.node_map.contains_key(label)
    }

    /// Look up the `NodeIndex` for a page label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Return the page label for a node.
    #[must_use]
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Weight of the directed edge `source → target`, if present.
    #[must_use]
    pub fn weight(&self, source: &str, target: &str) -> Option<u64> {
        let s = self.node_index(source)?;
        let t = self.node_index(target)?;
        self.graph.find_edge(s, t).map(|e| self.graph[e])
    }

    /// Return `true` if the directed edge `source → target` exists.
    #[must_use]
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.weight(source, target).is_some()
    }

    /// Out-neighbors of `label` with their edge weights.
    ///
    /// Unknown labels have no neighbors.
    #[must_use]
    pub fn out_neighbors(&self, label: &str) -> Vec<(&str, u64)> {
        let Some(idx) = self.node_index(label) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (self.graph[e.target()].as_str(), *e.weight()))
            .collect()
    }

    /// Number of outgoing edges of `label` (a self-loop counts once).
    #[must_use]
    pub fn out_degree(&self, label: &str) -> usize {
        self.node_index(label).map_or(0, |idx| {
            self.graph
                .neighbors_directed(idx, Direction::Outgoing)
                .count()
        })
    }

    /// Out-neighbor indices of `idx`, for index-level traversal.
    pub fn successors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    /// Return `true` if an edge runs `a → b` or `b → a`.
    #[must_use]
    pub fn connected_either_way(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.contains_edge(a, b) || self.graph.contains_edge(b, a)
    }

    /// All edges as `(source, target, weight)` in edge-insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
                *e.weight(),
            )
        })
    }

    /// Read-only access to the underlying petgraph graph.
    #[must_use]
    pub const fn graph(&self) -> &DiGraph<String, u64> {
        &self.graph
    }

    /// BLAKE3 hash of the sorted edge set.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut edges: Vec<(&str, &str, u64)> = self.edges().collect();
        edges.sort_unstable();
        compute_edge_hash(&edges)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn intern(
    graph: &mut DiGraph<String, u64>,
    node_map: &mut HashMap<String, NodeIndex>,
    label: String,
) -> NodeIndex {
    if let Some(&idx) = node_map.get(&label) {
        return idx;
    }
    let idx = graph.add_node(label.clone());
    node_map.insert(label, idx);
    idx
}

fn compute_edge_hash(edges: &[(&str, &str, u64)]) -> String {
    let mut hasher = blake3::Hasher::new();
    // Labels are length-prefixed; they may contain any byte, NUL included.
    for (source, target, weight) in edges {
        for label in [source, target] {
            hasher.update(&(label.len() as u64).to_le_bytes());
            hasher.update(label.as_bytes());
        }
        hasher.update(&weight.to_le_bytes());
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn build(edges: &[(&str, &str, u64)]) -> NavGraph {
        NavGraph::from_records(
            edges
                .iter()
                .map(|(s, t, w)| EdgeRecord::new(*s, *t, *w)),
        )
        .expect("build graph")
    }

    #[test]
    fn empty_edge_list_produces_empty_graph() {
        let graph = build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.total_weight(), 0);
        assert!(graph.content_hash().starts_with("blake3:"));
    }

    #[test]
    fn endpoints_become_nodes_in_first_appearance_order() {
        let graph = build(&[("Home", "About", 2), ("About", "Team", 1)]);
        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["Home", "About", "Team"]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.total_weight(), 3);
    }

    #[test]
    fn single_edge_direction() {
        let graph = build(&[("A", "B", 5)]);
        assert!(graph.has_edge("A", "B"));
        assert!(!graph.has_edge("B", "A"), "no reverse edge");
        assert_eq!(graph.weight("A", "B"), Some(5));
        assert_eq!(graph.out_degree("A"), 1);
        assert_eq!(graph.out_degree("B"), 0);
    }

    #[test]
    fn duplicate_pair_last_write_wins() {
        let graph = build(&[("A", "B", 5), ("A", "C", 1), ("A", "B", 2)]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight("A", "B"), Some(2));
        assert_eq!(graph.total_weight(), 3);
    }

    #[test]
    fn self_loop_is_stored() {
        let graph = build(&[("A", "A", 4)]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight("A", "A"), Some(4));
        assert_eq!(graph.out_degree("A"), 1);
    }

    #[test]
    fn out_neighbors_reports_weights() {
        let graph = build(&[("A", "B", 3), ("A", "C", 7), ("B", "C", 1)]);
        let mut neighbors = graph.out_neighbors("A");
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![("B", 3), ("C", 7)]);
        assert!(graph.out_neighbors("missing").is_empty());
        assert_eq!(graph.out_degree("missing"), 0);
    }

    #[test]
    fn connected_either_way_ignores_direction() {
        let graph = build(&[("A", "B", 1), ("C", "A", 1)]);
        let a = graph.node_index("A").expect("A");
        let b = graph.node_index("B").expect("B");
        let c = graph.node_index("C").expect("C");
        assert!(graph.connected_either_way(a, b));
        assert!(graph.connected_either_way(b, a));
        assert!(graph.connected_either_way(a, c));
        assert!(!graph.connected_either_way(b, c));
    }

    #[test]
    fn invalid_record_fails_whole_build() {
        let result = NavGraph::from_records(vec![
            EdgeRecord::new("A", "B", 1),
            EdgeRecord::new("B", "", 1),
        ]);
        match result {
            Err(GraphError::DataFormat { location, .. }) => {
                assert_eq!(location, RecordLocation::Index(1));
            }
            other => panic!("expected DataFormat error, got {other:?}"),
        }
    }

    #[test]
    fn failed_load_keeps_previous_graph() {
        let mut graph = build(&[("A", "B", 1), ("B", "C", 1)]);
        let before = graph.content_hash();

        let result = graph.load(vec![EdgeRecord::new("X", "Y", 0)]);
        assert!(result.is_err());
        assert_eq!(graph.content_hash(), before);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn load_replaces_rather_than_accumulates() {
        let mut graph = build(&[("A", "B", 1), ("B", "C", 1)]);
        graph
            .load(vec![EdgeRecord::new("X", "Y", 2)])
            .expect("reload");
        assert_eq!(graph.node_count(), 2);
        assert!(!graph.contains_node("A"));
        assert_eq!(graph.weight("X", "Y"), Some(2));
    }

    #[test]
    fn content_hash_ignores_record_order() {
        let a = build(&[("A", "B", 1), ("B", "C", 2)]);
        let b = build(&[("B", "C", 2), ("A", "B", 1)]);
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn content_hash_changes_with_weight() {
        let a = build(&[("A", "B", 1)]);
        let b = build(&[("A", "B", 2)]);
        assert_ne!(a.content_hash(), b.content_hash(), "hash must track weights");
    }

    #[test]
    fn graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NavGraph>();
    }

    #[test]
    fn total_weight_does_not_overflow_u64() {
        let graph = build(&[("A", "B", u64::MAX), ("B", "A", u64::MAX)]);
        assert_eq!(graph.total_weight(), 2 * u128::from(u64::MAX));
    }

    #[test]
    fn content_hash_separates_labels_containing_nul() {
        let a = build(&[("a\0b", "c", 1)]);
        let b = build(&[("a", "b\0c", 1)]);
        assert_ne!(a.content_hash(), b.content_hash());
    }
}
