//! Geometry errors.

use thiserror::Error;

/// Result type for geometry operations.
pub type GeomResult<T> = Result<T, GeomError>;

/// Errors that can occur while building or querying the surface model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Fewer knots than a cubic spline can be fit through.
    #[error("Not enough points for {what}: {count}")]
    NotEnoughPoints { what: &'static str, count: usize },

    /// Duplicate or decreasing x-knots survived sorting; the surface is not
    /// a function of chordwise position.
    #[error("Degenerate knots for {what} at index {index}")]
    DegenerateKnots { what: &'static str, index: usize },

    /// A surface tag other than `upper` / `lower`.
    #[error("Invalid surface tag: {tag:?}")]
    InvalidSurface { tag: String },

    /// A split index that does not leave points on both surfaces.
    #[error("Split index {index} out of range for {count} points")]
    BadSplitIndex { index: usize, count: usize },
}
