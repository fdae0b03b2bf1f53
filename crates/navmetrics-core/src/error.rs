use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::record::RecordLocation;

/// Errors raised at the load and persistence boundaries.
///
/// Metric computations never produce these; an undefined metric is a value,
/// not an error.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// An input record is malformed or missing a required field.
    ///
    /// The whole load is aborted and no partial graph is installed.
    #[error("malformed edge record at {location}: {reason}")]
    DataFormat {
        location: RecordLocation,
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A metrics snapshot could not be encoded or decoded.
    #[error("metrics snapshot JSON error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn data_format(location: RecordLocation, reason: impl Into<String>) -> Self {
        Self::DataFormat {
            location,
            reason: reason.into(),
        }
    }

    /// Wrap an I/O failure with the path it happened on.
    #[must_use]
    pub const fn io(path: PathBuf, source: io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Stable machine-readable classification of this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DataFormat { .. } => ErrorCode::DataFormat,
            Self::Io { .. } => ErrorCode::Io,
            Self::Encode(_) => ErrorCode::Encode,
        }
    }
}

/// Machine-readable error codes for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DataFormat,
    Io,
    Encode,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DataFormat => "E1001",
            Self::Io => "E5001",
            Self::Encode => "E5002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DataFormat => "Malformed edge record",
            Self::Io => "File I/O failed",
            Self::Encode => "Snapshot encoding failed",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::DataFormat => Some(
                "Every record needs a non-empty `source` and `target` and a positive integer `weight`.",
            ),
            Self::Io => Some("Check that the path exists and is readable/writable."),
            Self::Encode => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [ErrorCode::DataFormat, ErrorCode::Io, ErrorCode::Encode];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::DataFormat.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn data_format_message_names_location() {
        let err = GraphError::data_format(RecordLocation::Line(4), "missing field `weight`");
        assert_eq!(err.code(), ErrorCode::DataFormat);
        assert_eq!(
            err.to_string(),
            "malformed edge record at line 4: missing field `weight`"
        );
    }

    #[test]
    fn io_error_includes_path() {
        let err = GraphError::io(
            PathBuf::from("/tmp/missing.json"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.code(), ErrorCode::Io);
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
