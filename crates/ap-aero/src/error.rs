//! Errors for the reduction pipeline.

use ap_core::CoreError;
use ap_data::DataError;
use ap_geom::GeomError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type AeroResult<T> = Result<T, AeroError>;

/// Errors that can occur while reducing pressures to coefficients.
#[derive(Error, Debug)]
pub enum AeroError {
    /// Zero density or zero freestream velocity: the dynamic pressure would
    /// vanish and every coefficient would divide by zero.
    #[error("Invalid test condition: {what}")]
    InvalidTestCondition { what: &'static str },

    /// Tap data whose Cp and position sequences are not index-aligned.
    #[error("Distribution mismatch: {what} (cp={cp_len}, positions={pos_len})")]
    DistributionMismatch {
        what: &'static str,
        cp_len: usize,
        pos_len: usize,
    },

    /// Sweep configuration that cannot generate an ascending angle sequence.
    #[error("Invalid sweep range: {what}")]
    InvalidSweepRange { what: &'static str },

    /// Drag-estimation strategy tag that names no known estimator.
    #[error("Unknown drag estimator: {tag:?}")]
    UnknownEstimator { tag: String },

    #[error("Numeric error: {0}")]
    Numeric(#[from] CoreError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeomError),
}
