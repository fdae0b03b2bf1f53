//! Navigation graph store.
//!
//! # Overview
//!
//! This module turns a validated edge list into a petgraph-based directed
//! graph that every downstream metric traverses. The store is built once and
//! is read-only afterwards; reloading replaces it wholesale.
//!
//! ## Pipeline
//!
//! ```text
//! crawler edge list (JSON array or JSON lines)
//!        ↓  record::parse_edge_list()
//! Vec<EdgeRecord>
//!        ↓  store::NavGraph::from_records()
//! NavGraph (DiGraph<label, weight>, last write wins per ordered pair)
//!        ↓  navmetrics-analysis
//! distances, closeness, clustering, snapshot
//! ```
//!
//! ## Typical Usage
//!
//! ```rust,ignore
//! use navmetrics_core::{NavGraph, read_edge_file};
//!
//! let records = read_edge_file(Path::new("navigation_graph.json"))?;
//! let graph = NavGraph::from_records(records)?;
//!
//! println!("nodes={} edges={} clicks={}",
//!     graph.node_count(), graph.edge_count(), graph.total_weight());
//! ```

pub mod store;

pub use store::NavGraph;
