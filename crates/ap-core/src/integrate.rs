//! Trapezoidal integration over sampled distributions.

use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;

/// Cumulative trapezoidal integral of `y` over `x`, with a leading zero so
/// the output is index-aligned with the input grid.
pub fn cumtrapz(y: &[Real], x: &[Real]) -> CoreResult<Vec<Real>> {
    if y.len() != x.len() {
        return Err(CoreError::LengthMismatch {
            what: "cumtrapz samples",
            left: y.len(),
            right: x.len(),
        });
    }
    if y.is_empty() {
        return Err(CoreError::InvalidArg {
            what: "cumtrapz needs at least 1 sample",
        });
    }

    let mut out = Vec::with_capacity(y.len());
    out.push(0.0);
    let mut acc = 0.0;
    for i in 1..y.len() {
        acc += 0.5 * (y[i] + y[i - 1]) * (x[i] - x[i - 1]);
        out.push(acc);
    }
    Ok(out)
}

/// Definite trapezoidal integral of `y` over `x` (the final cumulative value).
pub fn trapz(y: &[Real], x: &[Real]) -> CoreResult<Real> {
    let cum = cumtrapz(y, x)?;
    Ok(*cum.last().unwrap_or(&0.0))
}
