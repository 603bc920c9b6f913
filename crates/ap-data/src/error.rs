//! Data-layer errors.

use thiserror::Error;

/// Result type for data-layer operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while loading rig data.
#[derive(Error, Debug)]
pub enum DataError {
    /// A raw-table row has fewer fields than the rig's column layout requires.
    /// The whole load aborts; a truncated scan is never partially usable.
    #[error("Row {line} has {found} fields, layout requires {expected}")]
    RowFormat {
        line: usize,
        found: usize,
        expected: usize,
    },

    /// A field that the layout addresses failed to parse as a number.
    #[error("Row {line}, column {column}: unparsable {what}: {value:?}")]
    BadField {
        line: usize,
        column: usize,
        what: &'static str,
        value: String,
    },

    /// Lookup for a run number that is not in the loaded table.
    #[error("No run record with run number {run_nr}")]
    RunNotFound { run_nr: i64 },

    /// A position file whose coordinates must be increasing is not.
    #[error("Positions in {what} not monotonically increasing at line {line}")]
    NonMonotonicPositions { what: &'static str, line: usize },

    /// Rejected test-condition configuration.
    #[error("Invalid test conditions: {what}")]
    InvalidConditions { what: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
