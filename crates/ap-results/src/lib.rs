//! ap-results: polar output shaping and persistence.
//!
//! The reduction pipeline's contract with any presentation layer is four
//! aligned sequences; this crate shapes them and writes the sweep to disk as
//! a JSON manifest plus a CSV table.

pub mod curves;
pub mod store;

pub use curves::PolarCurves;
pub use store::{save_polar, PolarManifest};

use thiserror::Error;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
