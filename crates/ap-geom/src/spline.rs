//! Natural cubic spline interpolation.
//!
//! Fits piecewise cubics with continuous first and second derivatives through
//! the surface coordinate knots. The unknown knot second derivatives satisfy
//! a tridiagonal linear system, assembled densely and solved by LU; surface
//! tables are a few tens of knots, so the dense solve is plenty.

use crate::error::{GeomError, GeomResult};
use ap_core::Real;
use nalgebra::{DMatrix, DVector};

/// A natural cubic spline through `(x, y)` knots, with strictly increasing x.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    /// Knot abscissae.
    xs: Vec<Real>,
    /// Knot ordinates.
    ys: Vec<Real>,
    /// Second derivatives at each knot (zero at the ends: natural boundary).
    y2s: Vec<Real>,
}

impl CubicSpline {
    /// Fit a spline through `points`, which must be sorted by x with no
    /// duplicates. `what` names the curve in error reports.
    pub fn fit(what: &'static str, points: &[(Real, Real)]) -> GeomResult<Self> {
        let n = points.len();
        if n < 2 {
            return Err(GeomError::NotEnoughPoints { what, count: n });
        }
        for (i, w) in points.windows(2).enumerate() {
            if w[1].0 <= w[0].0 {
                return Err(GeomError::DegenerateKnots { what, index: i + 1 });
            }
        }

        let xs: Vec<Real> = points.iter().map(|p| p.0).collect();
        let ys: Vec<Real> = points.iter().map(|p| p.1).collect();
        let y2s = solve_second_derivatives(what, &xs, &ys)?;

        Ok(Self { xs, ys, y2s })
    }

    /// Evaluate the spline at `x`. Outside the knot range the boundary
    /// polynomial extrapolates.
    pub fn eval(&self, x: Real) -> Real {
        let (lo, hi) = self.bracket(x);
        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;

        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.y2s[lo] + (b * b * b - b) * self.y2s[hi]) * h * h / 6.0
    }

    /// Analytic first derivative dy/dx at `x`.
    pub fn derivative(&self, x: Real) -> Real {
        let (lo, hi) = self.bracket(x);
        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;

        (self.ys[hi] - self.ys[lo]) / h
            - (3.0 * a * a - 1.0) / 6.0 * h * self.y2s[lo]
            + (3.0 * b * b - 1.0) / 6.0 * h * self.y2s[hi]
    }

    /// First and last knot abscissae.
    pub fn domain(&self) -> (Real, Real) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Binary search for the knot interval enclosing `x`.
    fn bracket(&self, x: Real) -> (usize, usize) {
        let n = self.xs.len();
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] > x {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        (lo, hi)
    }
}

/// Solve the natural-spline tridiagonal system for the interior knot second
/// derivatives; the natural boundary condition pins both ends at zero.
fn solve_second_derivatives(
    what: &'static str,
    xs: &[Real],
    ys: &[Real],
) -> GeomResult<Vec<Real>> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let interior = n.saturating_sub(2);
    if interior == 0 {
        // Two knots: the spline is the straight chord between them
        return Ok(y2s);
    }

    let mut a = DMatrix::<Real>::zeros(interior, interior);
    let mut b = DVector::<Real>::zeros(interior);
    for j in 0..interior {
        let i = j + 1;
        let h_prev = xs[i] - xs[i - 1];
        let h_next = xs[i + 1] - xs[i];
        a[(j, j)] = 2.0 * (h_prev + h_next);
        if j > 0 {
            a[(j, j - 1)] = h_prev;
        }
        if j + 1 < interior {
            a[(j, j + 1)] = h_next;
        }
        b[j] = 6.0 * ((ys[i + 1] - ys[i]) / h_next - (ys[i] - ys[i - 1]) / h_prev);
    }

    let m = a
        .lu()
        .solve(&b)
        .ok_or(GeomError::DegenerateKnots { what, index: 0 })?;
    for j in 0..interior {
        y2s[j + 1] = m[j];
    }
    Ok(y2s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_knots() {
        let points = vec![(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 4.0), (5.0, 1.0)];
        let spline = CubicSpline::fit("test", &points).unwrap();
        for (x, y) in &points {
            assert!(
                (spline.eval(*x) - y).abs() < 1e-10,
                "spline({x}) != {y}"
            );
        }
    }

    #[test]
    fn two_knots_is_the_chord() {
        let spline = CubicSpline::fit("test", &[(0.0, 0.0), (2.0, 4.0)]).unwrap();
        assert!((spline.eval(1.0) - 2.0).abs() < 1e-12);
        assert!((spline.derivative(0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let points: Vec<(f64, f64)> = (0..12)
            .map(|i| {
                let x = i as f64 * 0.5;
                (x, (x * 0.8).sin())
            })
            .collect();
        let spline = CubicSpline::fit("test", &points).unwrap();

        let eps = 1e-6;
        for i in 1..40 {
            let x = 0.1 + i as f64 * 0.12;
            let fd = (spline.eval(x + eps) - spline.eval(x - eps)) / (2.0 * eps);
            assert!(
                (spline.derivative(x) - fd).abs() < 1e-5,
                "derivative mismatch at x={x}"
            );
        }
    }

    #[test]
    fn rejects_duplicate_knots() {
        let err = CubicSpline::fit("test", &[(0.0, 0.0), (0.0, 1.0), (1.0, 2.0)]).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateKnots { index: 1, .. }));
    }

    #[test]
    fn rejects_single_point() {
        let err = CubicSpline::fit("test", &[(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, GeomError::NotEnoughPoints { count: 1, .. }));
    }
}
