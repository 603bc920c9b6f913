//! Airfoil surface model built from a discrete coordinate table.

use crate::error::{GeomError, GeomResult};
use crate::spline::CubicSpline;
use ap_core::Real;
use std::str::FromStr;

/// One surface coordinate, percent chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirfoilPoint {
    pub x: Real,
    pub y: Real,
}

impl AirfoilPoint {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

/// Which side of the section a query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Upper,
    Lower,
}

impl FromStr for Surface {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upper" => Ok(Surface::Upper),
            "lower" => Ok(Surface::Lower),
            other => Err(GeomError::InvalidSurface {
                tag: other.to_string(),
            }),
        }
    }
}

/// Continuous upper/lower surface functions with analytic slopes.
///
/// Built once per sweep from the coordinate table; read-only afterwards, so
/// it is safe to query from anywhere for any number of x values.
#[derive(Debug, Clone)]
pub struct GeometryModel {
    upper: CubicSpline,
    lower: CubicSpline,
}

impl GeometryModel {
    /// Build the model from a raw coordinate table.
    ///
    /// The table carries the upper surface first (leading edge to trailing
    /// edge) and the lower surface after `split_index`; both sub-sequences
    /// start at the shared leading-edge point, so the duplicate is dropped
    /// from the lower one before fitting. X-coordinates are scaled by
    /// `scale_factor` into a fresh copy; the caller's table is never touched,
    /// and repeated builds from the same table give the same model.
    pub fn build(
        points: &[AirfoilPoint],
        split_index: usize,
        scale_factor: Real,
    ) -> GeomResult<Self> {
        if split_index < 2 || points.len() < split_index + 3 {
            return Err(GeomError::BadSplitIndex {
                index: split_index,
                count: points.len(),
            });
        }

        // Skip the duplicated leading-edge point opening the lower block
        Self::from_surfaces(&points[..split_index], &points[split_index + 1..], scale_factor)
    }

    /// Build the model from surfaces already separated, each listed once.
    /// No point is dropped here; each sub-sequence keeps its own
    /// leading-edge anchor.
    pub fn from_surfaces(
        upper: &[AirfoilPoint],
        lower: &[AirfoilPoint],
        scale_factor: Real,
    ) -> GeomResult<Self> {
        let upper = surface_knots(upper, scale_factor);
        let lower = surface_knots(lower, scale_factor);

        Ok(Self {
            upper: CubicSpline::fit("upper surface", &upper)?,
            lower: CubicSpline::fit("lower surface", &lower)?,
        })
    }

    /// Surface ordinate at chordwise position `x` (scaled units).
    pub fn surface_at(&self, x: Real, surface: Surface) -> Real {
        self.spline(surface).eval(x)
    }

    /// Surface slope dy/dx at chordwise position `x` (scaled units).
    pub fn slope_at(&self, x: Real, surface: Surface) -> Real {
        self.spline(surface).derivative(x)
    }

    /// Surface slope at fraction `t` of the chord, `t` in [0, 1], mapped
    /// linearly onto the surface's knot span. This is the query form the
    /// integration grid uses.
    pub fn slope_at_fraction(&self, t: Real, surface: Surface) -> Real {
        let (x0, x1) = self.spline(surface).domain();
        self.slope_at(x0 + t * (x1 - x0), surface)
    }

    fn spline(&self, surface: Surface) -> &CubicSpline {
        match surface {
            Surface::Upper => &self.upper,
            Surface::Lower => &self.lower,
        }
    }
}

/// Scale a fresh copy of the x-coordinates, sort by x ascending, and emit
/// spline knots. The caller's table is never touched, and coordinate files
/// that run trailing-to-leading come out in fit order.
fn surface_knots(points: &[AirfoilPoint], scale_factor: Real) -> Vec<(Real, Real)> {
    let mut knots: Vec<(Real, Real)> = points
        .iter()
        .map(|p| (p.x * scale_factor, p.y))
        .collect();
    knots.sort_by(|a, b| a.0.total_cmp(&b.0));
    knots
}

/// Split index of [`REFERENCE_SECTION`]: the first 25 points are the upper
/// surface.
pub const REFERENCE_SPLIT_INDEX: usize = 25;

/// Coordinate table of the tested 2D section, percent chord. Upper surface
/// leading edge to trailing edge, then lower surface, both starting at the
/// shared (0, 0) leading edge.
pub const REFERENCE_SECTION: [AirfoilPoint; 49] = [
    AirfoilPoint::new(0.0, 0.0),
    AirfoilPoint::new(0.35626, 0.77154),
    AirfoilPoint::new(1.33331, 1.60115),
    AirfoilPoint::new(3.66108, 2.87759),
    AirfoilPoint::new(7.2922, 4.15707),
    AirfoilPoint::new(11.35604, 5.13022),
    AirfoilPoint::new(15.59135, 5.85007),
    AirfoilPoint::new(19.91328, 6.3748),
    AirfoilPoint::new(24.28443, 6.74148),
    AirfoilPoint::new(28.68627, 6.9748),
    AirfoilPoint::new(33.10518, 7.09219),
    AirfoilPoint::new(37.53128, 7.10225),
    AirfoilPoint::new(41.95991, 7.00937),
    AirfoilPoint::new(46.38793, 6.81628),
    AirfoilPoint::new(50.8156, 6.52532),
    AirfoilPoint::new(55.2486, 6.14225),
    AirfoilPoint::new(59.69223, 5.68254),
    AirfoilPoint::new(64.13685, 5.16453),
    AirfoilPoint::new(68.579, 4.59453),
    AirfoilPoint::new(73.02401, 3.97658),
    AirfoilPoint::new(77.47357, 3.32133),
    AirfoilPoint::new(81.93114, 2.63941),
    AirfoilPoint::new(86.38589, 1.94846),
    AirfoilPoint::new(90.8108, 1.27669),
    AirfoilPoint::new(100.0, 0.0),
    AirfoilPoint::new(0.0, 0.0),
    AirfoilPoint::new(0.43123, -0.57176),
    AirfoilPoint::new(1.47147, -1.09275),
    AirfoilPoint::new(3.92479, -1.77203),
    AirfoilPoint::new(7.79506, -2.3727),
    AirfoilPoint::new(12.0143, -2.76684),
    AirfoilPoint::new(16.32276, -3.02746),
    AirfoilPoint::new(20.67013, -3.19868),
    AirfoilPoint::new(25.03792, -3.30615),
    AirfoilPoint::new(29.41554, -3.36298),
    AirfoilPoint::new(33.79772, -3.37697),
    AirfoilPoint::new(38.18675, -3.35304),
    AirfoilPoint::new(42.57527, -3.29378),
    AirfoilPoint::new(46.96278, -3.20029),
    AirfoilPoint::new(51.35062, -3.07206),
    AirfoilPoint::new(55.73662, -2.9106),
    AirfoilPoint::new(60.12075, -2.71424),
    AirfoilPoint::new(64.50502, -2.48323),
    AirfoilPoint::new(68.8901, -2.21935),
    AirfoilPoint::new(73.28011, -1.92575),
    AirfoilPoint::new(77.67783, -1.61034),
    AirfoilPoint::new(82.07965, -1.28273),
    AirfoilPoint::new(86.47978, -0.94874),
    AirfoilPoint::new(100.0, 0.0),
];
