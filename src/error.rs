//! Error types for loading and analyzing record tables.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Fatal errors raised while loading or querying a table.
///
/// Malformed input lines are not represented here: the loader skips them
/// and reports them as [`ParseError`] diagnostics instead.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report: {0}")]
    Write(#[source] io::Error),

    #[error("out of memory while growing table to {requested} records")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("table is empty, no min/max available")]
    EmptyTable,
}

/// Why a single input line was rejected by the loader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line does not start with `expected` integers.
    #[error("expected {expected} integers, found {found}")]
    TooFewValues { expected: usize, found: usize },

    /// A digit run was found but does not fit in an `i32`.
    #[error("value {token:?} at position {position} is out of range")]
    OutOfRange { position: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ParseError::TooFewValues { expected: 10, found: 1 };
        assert_eq!(err.to_string(), "expected 10 integers, found 1");

        let err = ParseError::OutOfRange { position: 1, token: "99999999999".into() };
        assert_eq!(
            err.to_string(),
            "value \"99999999999\" at position 1 is out of range"
        );

        let err = AnalyzerError::Write(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "cannot write report: pipe closed");

        assert_eq!(
            AnalyzerError::EmptyTable.to_string(),
            "table is empty, no min/max available"
        );
    }

    #[test]
    fn io_error_carries_path() {
        let err = AnalyzerError::Io {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot open missing.txt: no such file");
    }
}
