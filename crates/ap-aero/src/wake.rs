//! Wake momentum engine: drag from the rake's pressure-deficit profile.
//!
//! Two independent estimators are exposed by name. The total-pressure-deficit
//! form works straight from wake Cpt; the momentum/pressure form recovers the
//! local velocity from separate total- and static-pressure rake rows and
//! integrates both deficits over the physical rake coordinates.

use crate::error::{AeroError, AeroResult};
use crate::surface::GRID_POINTS;
use ap_core::{interp, linspace, trapz, Real};
use ap_data::TestConditions;

/// Drag coefficient from the wake total-pressure-deficit coefficient profile.
///
/// Rake positions are normalized by their maximum, the profile is resampled
/// onto the uniform grid, and
///
/// ```text
/// cd = integral of sqrt(Cpt) * (1 - sqrt(Cpt)) dx
/// ```
///
/// Cpt is clamped to [0, 1] first: slightly negative readings are probe noise
/// outside the wake and mean zero deficit, not an error. The clamped
/// integrand is non-negative, so the estimate never comes out negative.
pub fn wake_drag_from_cpt(cpt: &[Real], rake_positions: &[Real]) -> AeroResult<Real> {
    if cpt.len() != rake_positions.len() {
        return Err(AeroError::DistributionMismatch {
            what: "wake rake probes",
            cp_len: cpt.len(),
            pos_len: rake_positions.len(),
        });
    }

    let max_pos = rake_positions.iter().fold(Real::MIN, |a, &b| a.max(b));
    if !(max_pos > 0.0) {
        return Err(AeroError::InvalidTestCondition {
            what: "wake rake span must be positive",
        });
    }
    let normalized: Vec<Real> = rake_positions.iter().map(|p| p / max_pos).collect();
    let clamped: Vec<Real> = cpt.iter().map(|c| c.clamp(0.0, 1.0)).collect();

    let grid = linspace(0.0, 1.0, GRID_POINTS);
    let cpt_grid = interp(&grid, &normalized, &clamped)?;
    let integrand: Vec<Real> = cpt_grid
        .iter()
        .map(|&c| {
            let root = c.sqrt();
            root * (1.0 - root)
        })
        .collect();
    Ok(trapz(&integrand, &grid)?)
}

/// Drag coefficient from separate total- and static-pressure rake rows.
///
/// Local velocity follows from the total-pressure deficit,
///
/// ```text
/// v = sqrt(v_inf^2 + 2 * (p_inf - p_total) / rho)
/// ```
///
/// clamped to zero where the radicand goes negative (fully stalled probe).
/// The momentum deficit `(v_inf - v) * v` and the static-pressure deficit
/// `(p_inf - p_static)` integrate separately over the physical rake
/// coordinates and combine as
///
/// ```text
/// drag = -(momentum + pressure) / (0.5 * rho * v_inf^2)
/// ```
///
/// Static probes sit at different stations than the total probes, so their
/// readings are interpolated onto the total-probe coordinates first.
pub fn momentum_pressure_drag(
    p_total: &[Real],
    p_static: &[Real],
    total_positions: &[Real],
    static_positions: &[Real],
    rho: Real,
    conditions: &TestConditions,
) -> AeroResult<Real> {
    if rho == 0.0 || !rho.is_finite() {
        return Err(AeroError::InvalidTestCondition {
            what: "density must be nonzero and finite",
        });
    }
    let v_inf = conditions.v_inf_m_s;
    if v_inf == 0.0 || !v_inf.is_finite() {
        return Err(AeroError::InvalidTestCondition {
            what: "freestream velocity must be nonzero and finite",
        });
    }
    if p_total.len() != total_positions.len() {
        return Err(AeroError::DistributionMismatch {
            what: "wake total probes",
            cp_len: p_total.len(),
            pos_len: total_positions.len(),
        });
    }
    if p_static.len() != static_positions.len() {
        return Err(AeroError::DistributionMismatch {
            what: "wake static probes",
            cp_len: p_static.len(),
            pos_len: static_positions.len(),
        });
    }

    let p_inf = conditions.p_inf_pa;
    let velocities: Vec<Real> = p_total
        .iter()
        .map(|&p| {
            let radicand = v_inf * v_inf + 2.0 * (p_inf - p) / rho;
            if radicand > 0.0 { radicand.sqrt() } else { 0.0 }
        })
        .collect();

    let momentum_integrand: Vec<Real> = velocities.iter().map(|&v| (v_inf - v) * v).collect();
    let momentum = trapz(&momentum_integrand, total_positions)?;

    let static_on_total = interp(total_positions, static_positions, p_static)?;
    let pressure_integrand: Vec<Real> = static_on_total.iter().map(|&p| p_inf - p).collect();
    let pressure = trapz(&pressure_integrand, total_positions)?;

    Ok(-(momentum + pressure) / (0.5 * rho * v_inf * v_inf))
}
