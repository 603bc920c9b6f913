//! Pressure-coefficient calculator.

use crate::error::{AeroError, AeroResult};
use ap_core::Real;

/// Convert absolute pressures to pressure coefficients:
///
/// ```text
/// Cp = (p - p_ref) / (0.5 * rho * v_inf^2)
/// ```
///
/// Pure element-wise map; the same conversion serves the surface taps and the
/// wake-rake probes, the caller picks which block of the record to feed in.
pub fn pressure_coefficients(
    pressures: &[Real],
    p_ref: Real,
    rho: Real,
    v_inf: Real,
) -> AeroResult<Vec<Real>> {
    if rho == 0.0 || !rho.is_finite() {
        return Err(AeroError::InvalidTestCondition {
            what: "density must be nonzero and finite",
        });
    }
    if v_inf == 0.0 || !v_inf.is_finite() {
        return Err(AeroError::InvalidTestCondition {
            what: "freestream velocity must be nonzero and finite",
        });
    }

    let q = 0.5 * rho * v_inf * v_inf;
    Ok(pressures.iter().map(|p| (p - p_ref) / q).collect())
}
