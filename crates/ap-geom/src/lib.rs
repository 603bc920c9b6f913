//! ap-geom: continuous airfoil surface model.
//!
//! Turns the discrete upper/lower coordinate table of the test section into
//! two natural cubic splines with analytic slopes, which the surface
//! integration engine queries for the axial-force projection.

pub mod airfoil;
pub mod error;
pub mod spline;

pub use airfoil::{
    AirfoilPoint, GeometryModel, Surface, REFERENCE_SECTION, REFERENCE_SPLIT_INDEX,
};
pub use error::{GeomError, GeomResult};
pub use spline::CubicSpline;
