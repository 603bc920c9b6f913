//! Polar sweep driver.
//!
//! Iterates an angle-of-attack range, pulls the matching run record for each
//! angle, runs the full reduction, and assembles the ordered polar. One
//! driver parameterized by range and drag strategy replaces the rig's pile of
//! near-identical per-range analysis scripts.

use crate::cp::pressure_coefficients;
use crate::error::{AeroError, AeroResult};
use crate::surface::{integrate, split_surfaces};
use crate::wake::{momentum_pressure_drag, wake_drag_from_cpt};
use ap_core::Real;
use ap_data::{
    find_run, DataError, RunRecord, TestConditions, WAKE_STATIC_PROBE_MM, WAKE_TOTAL_PROBE_MM,
};
use ap_geom::GeometryModel;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// One point of a polar curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSample {
    /// Measured angle of attack [deg].
    pub alpha_deg: Real,
    /// Lift coefficient.
    pub cl: Real,
    /// Drag coefficient, from the selected estimator.
    pub cd: Real,
    /// Pitching-moment coefficient about the leading edge.
    pub cm: Real,
    /// Center of pressure [m]; NaN when the normal force is zero.
    pub xcop_m: Real,
}

/// Inclusive ascending angle-of-attack range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaRange {
    pub start_deg: Real,
    pub stop_deg: Real,
    pub step_deg: Real,
}

impl AlphaRange {
    /// Generate the requested angles, ascending, endpoints inclusive.
    pub fn angles(&self) -> AeroResult<Vec<Real>> {
        if !(self.step_deg > 0.0) || !self.step_deg.is_finite() {
            return Err(AeroError::InvalidSweepRange {
                what: "step must be positive",
            });
        }
        if self.stop_deg < self.start_deg {
            return Err(AeroError::InvalidSweepRange {
                what: "stop must not be below start",
            });
        }

        let mut angles = Vec::new();
        let mut i = 0usize;
        loop {
            let alpha = self.start_deg + i as Real * self.step_deg;
            // Half-step slack so stop itself survives rounding
            if alpha > self.stop_deg + 0.5 * self.step_deg {
                break;
            }
            angles.push(alpha);
            i += 1;
        }
        Ok(angles)
    }
}

/// Which drag estimate lands in the polar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEstimator {
    /// Pressure integration over the airfoil surface.
    SurfaceIntegration,
    /// Wake total-pressure-deficit coefficient profile.
    WakeTotalPressure,
    /// Momentum plus static-pressure deficit over the physical rake.
    WakeMomentum,
}

impl FromStr for DragEstimator {
    type Err = AeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "surface" | "surface-integration" => Ok(Self::SurfaceIntegration),
            "wake-cpt" | "wake-total-pressure" => Ok(Self::WakeTotalPressure),
            "wake-momentum" => Ok(Self::WakeMomentum),
            other => Err(AeroError::UnknownEstimator {
                tag: other.to_string(),
            }),
        }
    }
}

/// Run a full polar sweep.
///
/// The geometry model is built once by the caller and only borrowed here;
/// records are read-only throughout. Angles whose run number has no record
/// are skipped with a warning so one dropped run does not kill the polar;
/// anything else fails the sweep. Samples come out in requested-angle order,
/// ascending.
///
/// The rig commands whole-degree angles and stamps the run number with the
/// commanded angle, so the record lookup key is the rounded requested angle.
#[allow(clippy::too_many_arguments)]
pub fn sweep(
    records: &[RunRecord],
    chord_positions_pct: &[Real],
    wake_positions: &[Real],
    model: &GeometryModel,
    conditions: &TestConditions,
    range: &AlphaRange,
    estimator: DragEstimator,
) -> AeroResult<Vec<CoefficientSample>> {
    conditions.validate()?;

    let mut samples = Vec::new();
    for alpha in range.angles()? {
        let run_nr = alpha.round() as i64;
        let record = match find_run(records, run_nr) {
            Ok(record) => record,
            Err(DataError::RunNotFound { run_nr }) => {
                warn!(run_nr, alpha, "no run record for requested angle, skipping");
                continue;
            }
            Err(other) => return Err(other.into()),
        };

        samples.push(reduce_run(
            record,
            chord_positions_pct,
            wake_positions,
            model,
            conditions,
            estimator,
        )?);
    }
    Ok(samples)
}

/// Reduce a single run record to one polar sample.
pub fn reduce_run(
    record: &RunRecord,
    chord_positions_pct: &[Real],
    wake_positions: &[Real],
    model: &GeometryModel,
    conditions: &TestConditions,
    estimator: DragEstimator,
) -> AeroResult<CoefficientSample> {
    let cp = pressure_coefficients(
        &record.surface_pressures,
        record.reference_pressure,
        record.rho,
        conditions.v_inf_m_s,
    )?;
    let (upper, lower) = split_surfaces(&cp, chord_positions_pct)?;
    let coefficients = integrate(
        &upper,
        &lower,
        model,
        record.alpha_deg,
        conditions.chord_m,
    )?;

    let cd = match estimator {
        DragEstimator::SurfaceIntegration => coefficients.cd,
        DragEstimator::WakeTotalPressure => {
            let cpt = pressure_coefficients(
                &record.wake_total_pressures,
                record.reference_pressure,
                record.rho,
                conditions.v_inf_m_s,
            )?;
            wake_drag_from_cpt(&cpt, wake_positions)?
        }
        DragEstimator::WakeMomentum => {
            // Momentum balance runs over the rig's physical probe stations
            let total_m: Vec<Real> = WAKE_TOTAL_PROBE_MM.iter().map(|p| p / 1000.0).collect();
            let static_m: Vec<Real> = WAKE_STATIC_PROBE_MM.iter().map(|p| p / 1000.0).collect();
            momentum_pressure_drag(
                &record.wake_total_pressures,
                &record.wake_static_pressures,
                &total_m,
                &static_m,
                record.rho,
                conditions,
            )?
        }
    };

    Ok(CoefficientSample {
        alpha_deg: record.alpha_deg,
        cl: coefficients.cl,
        cd,
        cm: coefficients.cm,
        xcop_m: coefficients.xcop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_inclusive_ascending() {
        let range = AlphaRange {
            start_deg: 1.0,
            stop_deg: 5.0,
            step_deg: 2.0,
        };
        assert_eq!(range.angles().unwrap(), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn angles_single_point_range() {
        let range = AlphaRange {
            start_deg: 4.0,
            stop_deg: 4.0,
            step_deg: 1.0,
        };
        assert_eq!(range.angles().unwrap(), vec![4.0]);
    }

    #[test]
    fn angles_reject_bad_step() {
        let range = AlphaRange {
            start_deg: 0.0,
            stop_deg: 5.0,
            step_deg: 0.0,
        };
        assert!(matches!(
            range.angles().unwrap_err(),
            AeroError::InvalidSweepRange { .. }
        ));
    }

    #[test]
    fn angles_reject_descending_range() {
        let range = AlphaRange {
            start_deg: 5.0,
            stop_deg: 0.0,
            step_deg: 1.0,
        };
        assert!(range.angles().is_err());
    }

    #[test]
    fn estimator_tags_parse() {
        assert_eq!(
            "surface".parse::<DragEstimator>().unwrap(),
            DragEstimator::SurfaceIntegration
        );
        assert_eq!(
            "wake-cpt".parse::<DragEstimator>().unwrap(),
            DragEstimator::WakeTotalPressure
        );
        assert_eq!(
            "wake-momentum".parse::<DragEstimator>().unwrap(),
            DragEstimator::WakeMomentum
        );
        assert!(matches!(
            "viscous".parse::<DragEstimator>(),
            Err(AeroError::UnknownEstimator { .. })
        ));
    }
}
