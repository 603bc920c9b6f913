//! Piecewise-linear resampling of tap data onto integration grids.

use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;

/// Resample `(xp, fp)` samples onto the query points `x_new` by linear
/// interpolation.
///
/// Queries outside `[xp[0], xp[last]]` clamp to the boundary value, which is
/// what the reduction wants: the first and last taps simply extend to the
/// edges of the integration grid.
///
/// `xp` must be strictly increasing and index-aligned with `fp`.
pub fn interp(x_new: &[Real], xp: &[Real], fp: &[Real]) -> CoreResult<Vec<Real>> {
    if xp.len() != fp.len() {
        return Err(CoreError::LengthMismatch {
            what: "interp samples",
            left: xp.len(),
            right: fp.len(),
        });
    }
    if xp.len() < 2 {
        return Err(CoreError::InvalidArg {
            what: "interp needs at least 2 sample points",
        });
    }
    for (i, w) in xp.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(CoreError::NonMonotonic {
                what: "interp abscissae",
                index: i + 1,
            });
        }
    }

    let mut out = Vec::with_capacity(x_new.len());
    for &x in x_new {
        out.push(interp_one(x, xp, fp));
    }
    Ok(out)
}

fn interp_one(x: Real, xp: &[Real], fp: &[Real]) -> Real {
    let n = xp.len();
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // Binary search for the enclosing interval
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if xp[mid] > x {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interp_recovers_samples() {
        let xp = vec![0.0, 1.0, 2.0, 4.0];
        let fp = vec![1.0, 3.0, 2.0, -2.0];
        let out = interp(&xp, &xp, &fp).unwrap();
        for (a, b) in out.iter().zip(fp.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn interp_midpoints_linear() {
        let xp = vec![0.0, 2.0];
        let fp = vec![0.0, 4.0];
        let out = interp(&[0.5, 1.0, 1.5], &xp, &fp).unwrap();
        assert_eq!(out, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn interp_clamps_outside_range() {
        let xp = vec![1.0, 2.0];
        let fp = vec![5.0, 7.0];
        let out = interp(&[0.0, 3.0], &xp, &fp).unwrap();
        assert_eq!(out, vec![5.0, 7.0]);
    }

    #[test]
    fn interp_rejects_unsorted() {
        let err = interp(&[0.5], &[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, CoreError::NonMonotonic { .. }));
    }

    #[test]
    fn interp_rejects_mismatched_lengths() {
        let err = interp(&[0.5], &[0.0, 1.0], &[0.0]).unwrap_err();
        assert!(matches!(err, CoreError::LengthMismatch { .. }));
    }
}
