#![forbid(unsafe_code)]
//! navmetrics-core library.
//!
//! Holds everything needed to turn a crawler's edge list into an immutable
//! navigation graph: the exchange-format parser ([`record`]), the graph
//! store ([`graph`]), the error taxonomy ([`error`]), and analysis
//! configuration ([`config`]).
//!
//! # Conventions
//!
//! - **Errors**: library boundaries return [`error::GraphError`]; config
//!   loading returns `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`). The
//!   library never installs a subscriber.

pub mod config;
pub mod error;
pub mod graph;
pub mod record;

pub use config::{AnalysisConfig, RatingConfig, ReportConfig, load_config, parse_config};
pub use error::{ErrorCode, GraphError};
pub use graph::NavGraph;
pub use record::{EdgeRecord, RecordLocation, parse_edge_list, read_edge_file};
