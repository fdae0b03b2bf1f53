//! Edge records and the navigation-edge exchange format.
//!
//! # Overview
//!
//! A crawler hands the graph store a finished list of observed transitions.
//! Each record carries three required fields:
//!
//! ```json
//! { "source": "Home", "target": "Pricing", "weight": 12 }
//! ```
//!
//! `weight` is the cumulative number of times the transition was observed.
//!
//! ## Accepted layouts
//!
//! 1. A single JSON array of records.
//! 2. One record per line (JSON Lines). Blank lines are skipped.
//!
//! [`parse_edge_list`] first tries the whole document as an array and falls
//! back to line-delimited parsing when that fails. Either way a single bad
//! record fails the entire parse: a partially loaded graph would report
//! misleading metrics, so nothing is skipped silently.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::GraphError;

// ---------------------------------------------------------------------------
// EdgeRecord
// ---------------------------------------------------------------------------

/// One observed navigation transition, validated at the load boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Label of the page the click started on.
    pub source: String,
    /// Label of the page the click landed on.
    pub target: String,
    /// Cumulative traversal count for this ordered pair.
    pub weight: u64,
}

impl EdgeRecord {
    /// Build a record from borrowed labels.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: u64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Return `true` if the record points back at its own source.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Check the invariants the typed fields alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DataFormat`] if either endpoint is empty or the
    /// weight is zero. Labels are otherwise taken verbatim, whitespace
    /// included.
    pub fn validate(&self, location: RecordLocation) -> Result<(), GraphError> {
        if self.source.is_empty() {
            return Err(GraphError::data_format(location, "`source` must be non-empty"));
        }
        if self.target.is_empty() {
            return Err(GraphError::data_format(location, "`target` must be non-empty"));
        }
        if self.weight == 0 {
            return Err(GraphError::data_format(
                location,
                "`weight` must be a positive integer",
            ));
        }
        Ok(())
    }

    fn from_value(value: Value, location: RecordLocation) -> Result<Self, GraphError> {
        let record: Self = serde_json::from_value(value)
            .map_err(|e| GraphError::data_format(location, e.to_string()))?;
        record.validate(location)?;
        Ok(record)
    }
}

// ---------------------------------------------------------------------------
// RecordLocation
// ---------------------------------------------------------------------------

/// Where in the input a record came from, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLocation {
    /// Zero-based position inside a JSON array document.
    Index(usize),
    /// One-based line number in a line-delimited document.
    Line(usize),
    /// The document as a whole (e.g. a truncated JSON array).
    Document,
}

impl fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "record #{i}"),
            Self::Line(n) => write!(f, "line {n}"),
            Self::Document => write!(f, "document"),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse an edge list in either accepted layout.
///
/// # Errors
///
/// Returns [`GraphError::DataFormat`] for the first record that is not valid
/// JSON, lacks a required field, has a wrongly typed field, has an empty
/// endpoint, or has a zero weight.
#[instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_edge_list(input: &str) -> Result<Vec<EdgeRecord>, GraphError> {
    match serde_json::from_str::<Vec<Value>>(input) {
        Ok(values) => {
            debug!(records = values.len(), "parsed edge list as JSON array");
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| EdgeRecord::from_value(v, RecordLocation::Index(i)))
                .collect()
        }
        // A document that opens an array but does not parse as one cannot be
        // line-delimited either; report the array error instead of a
        // confusing complaint about line 1.
        Err(e) if input.trim_start().starts_with('[') => {
            Err(GraphError::data_format(RecordLocation::Document, e.to_string()))
        }
        Err(_) => parse_json_lines(input),
    }
}

fn parse_json_lines(input: &str) -> Result<Vec<EdgeRecord>, GraphError> {
    let mut records = Vec::new();

    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let location = RecordLocation::Line(i + 1);
        let value: Value = serde_json::from_str(line)
            .map_err(|e| GraphError::data_format(location, e.to_string()))?;
        records.push(EdgeRecord::from_value(value, location)?);
    }

    debug!(records = records.len(), "parsed edge list as JSON lines");
    Ok(records)
}

/// Read and parse an edge-list file.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be read, or
/// [`GraphError::DataFormat`] if its contents do not parse.
#[instrument]
pub fn read_edge_file(path: &Path) -> Result<Vec<EdgeRecord>, GraphError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| GraphError::io(path.to_path_buf(), e))?;
    parse_edge_list(&content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
