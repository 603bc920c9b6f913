//! ap-core: numeric foundation for aeropolar.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - interp (linear resampling onto a new grid)
//! - integrate (cumulative trapezoidal integration)
//! - error (shared error types)

pub mod error;
pub mod integrate;
pub mod interp;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use integrate::*;
pub use interp::*;
pub use numeric::*;
