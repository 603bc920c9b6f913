//! ap-aero: the pressure-to-coefficient reduction pipeline.
//!
//! Takes parsed run records, turns tap pressures into pressure coefficients,
//! integrates the surface distribution against the airfoil geometry, derives
//! an independent wake-momentum drag estimate, and drives the whole thing
//! across an angle-of-attack sweep.

pub mod cp;
pub mod error;
pub mod surface;
pub mod sweep;
pub mod wake;

pub use cp::pressure_coefficients;
pub use error::{AeroError, AeroResult};
pub use surface::{Coefficients, SurfaceDistribution, integrate, split_surfaces, GRID_POINTS};
pub use sweep::{AlphaRange, CoefficientSample, DragEstimator, reduce_run, sweep};
pub use wake::{momentum_pressure_drag, wake_drag_from_cpt};
