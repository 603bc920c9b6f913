//! Surface integration engine.
//!
//! Resamples the tap Cp distributions of both surfaces onto one uniform chord
//! grid, integrates them into body-axis normal/axial/moment coefficients, and
//! rotates the result into wind axes.

use crate::error::{AeroError, AeroResult};
use ap_core::{cumtrapz, interp, linspace, nearly_equal, Real, Tolerances};
use ap_geom::{GeometryModel, Surface};

/// Number of points of the shared non-dimensional integration grid on [0, 1].
pub const GRID_POINTS: usize = 100;

/// Below these tolerances the net normal force counts as zero (symmetric
/// loading); the center of pressure is undefined and `xcop` is reported as
/// NaN instead of dividing.
const CN_TOLERANCES: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-9,
};

/// One surface's Cp samples, ordered leading edge to trailing edge, with
/// chord positions as fractions in [0, 1].
#[derive(Debug, Clone)]
pub struct SurfaceDistribution {
    pub cp: Vec<Real>,
    pub x_over_c: Vec<Real>,
}

/// Integrated force and moment coefficients for one angle of attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Normal-force coefficient (body axes).
    pub cn: Real,
    /// Axial-force coefficient (body axes).
    pub ca: Real,
    /// Pitching-moment coefficient about the leading edge.
    pub cm: Real,
    /// Lift coefficient (wind axes).
    pub cl: Real,
    /// Drag coefficient (wind axes), from surface pressures only.
    pub cd: Real,
    /// Center of pressure [m], scaled by the physical chord. NaN when the
    /// net normal force is (numerically) zero.
    pub xcop: Real,
}

/// Split a full-chord Cp sequence into upper and lower distributions.
///
/// The rig plumbs the upper-surface taps into the first half of the scanner
/// block and the lower-surface taps into the rest, trailing edge back toward
/// the leading edge. Both halves come out sorted leading-to-trailing with
/// positions converted from percent chord to fractions.
pub fn split_surfaces(
    cp: &[Real],
    positions_pct: &[Real],
) -> AeroResult<(SurfaceDistribution, SurfaceDistribution)> {
    if cp.len() != positions_pct.len() {
        return Err(AeroError::DistributionMismatch {
            what: "surface taps",
            cp_len: cp.len(),
            pos_len: positions_pct.len(),
        });
    }
    if cp.len() < 4 {
        return Err(AeroError::DistributionMismatch {
            what: "need at least 2 taps per surface",
            cp_len: cp.len(),
            pos_len: positions_pct.len(),
        });
    }

    let midpoint = cp.len() / 2;
    let upper = ordered_distribution(&cp[..=midpoint], &positions_pct[..=midpoint]);
    let lower = ordered_distribution(&cp[midpoint + 1..], &positions_pct[midpoint + 1..]);
    Ok((upper, lower))
}

fn ordered_distribution(cp: &[Real], positions_pct: &[Real]) -> SurfaceDistribution {
    let mut pairs: Vec<(Real, Real)> = positions_pct
        .iter()
        .zip(cp.iter())
        .map(|(&x, &c)| (x / 100.0, c))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    SurfaceDistribution {
        x_over_c: pairs.iter().map(|p| p.0).collect(),
        cp: pairs.iter().map(|p| p.1).collect(),
    }
}

/// Integrate the two surface Cp distributions against the geometry.
///
/// Normal force comes from the pressure difference, the moment from its
/// first chordwise moment, and the axial force from the pressures projected
/// onto the local surface slope. Body-axis values rotate into wind axes at
/// the given angle of attack. The moment sign convention is chosen so that
/// `cm / cn` is directly the center-of-pressure chord fraction.
pub fn integrate(
    upper: &SurfaceDistribution,
    lower: &SurfaceDistribution,
    model: &GeometryModel,
    alpha_deg: Real,
    chord_m: Real,
) -> AeroResult<Coefficients> {
    let grid = linspace(0.0, 1.0, GRID_POINTS);
    let cp_upper = interp(&grid, &upper.x_over_c, &upper.cp)?;
    let cp_lower = interp(&grid, &lower.x_over_c, &lower.cp)?;

    let cn_integrand: Vec<Real> = cp_lower
        .iter()
        .zip(cp_upper.iter())
        .map(|(l, u)| l - u)
        .collect();
    let cn = final_value(&cn_integrand, &grid)?;

    let cm_integrand: Vec<Real> = cn_integrand
        .iter()
        .zip(grid.iter())
        .map(|(d, x)| d * x)
        .collect();
    let cm = final_value(&cm_integrand, &grid)?;

    let ca_integrand: Vec<Real> = grid
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            cp_upper[i] * model.slope_at_fraction(x, Surface::Upper)
                - cp_lower[i] * model.slope_at_fraction(x, Surface::Lower)
        })
        .collect();
    let ca = final_value(&ca_integrand, &grid)?;

    let alpha = alpha_deg.to_radians();
    let cl = cn * alpha.cos() - ca * alpha.sin();
    let cd = ca * alpha.cos() + cn * alpha.sin();

    let xcop = if nearly_equal(cn, 0.0, CN_TOLERANCES) {
        Real::NAN
    } else {
        cm / cn * chord_m
    };

    Ok(Coefficients {
        cn,
        ca,
        cm,
        cl,
        cd,
        xcop,
    })
}

/// Cumulative trapezoid, keeping only the value at the end of the grid.
fn final_value(integrand: &[Real], grid: &[Real]) -> AeroResult<Real> {
    let cum = cumtrapz(integrand, grid)?;
    Ok(*cum.last().unwrap_or(&0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_core::linspace;
    use ap_geom::AirfoilPoint;

    /// Thin test section: upper apex +5%, lower apex -3%, both surfaces
    /// anchored at the shared leading and trailing edges.
    fn test_model() -> GeometryModel {
        let upper = [
            AirfoilPoint::new(0.0, 0.0),
            AirfoilPoint::new(50.0, 5.0),
            AirfoilPoint::new(100.0, 0.0),
        ];
        let lower = [
            AirfoilPoint::new(0.0, 0.0),
            AirfoilPoint::new(50.0, -3.0),
            AirfoilPoint::new(100.0, 0.0),
        ];
        GeometryModel::from_surfaces(&upper, &lower, 1.0).unwrap()
    }

    fn uniform(cp: Real) -> SurfaceDistribution {
        let x_over_c = linspace(0.0, 1.0, 10);
        SurfaceDistribution {
            cp: vec![cp; 10],
            x_over_c,
        }
    }

    #[test]
    fn symmetric_loading_gives_zero_everything() {
        let model = test_model();
        for alpha in [0.0, 5.0, 12.5] {
            let c = integrate(&uniform(-0.3), &uniform(-0.3), &model, alpha, 0.16).unwrap();
            assert!(c.cn.abs() < 1e-12);
            assert!(c.cm.abs() < 1e-12);
            assert!(c.ca.abs() < 1e-6);
            assert!(c.cl.abs() < 1e-6);
            assert!(c.cd.abs() < 1e-6);
            assert!(c.xcop.is_nan(), "xcop must be the NaN sentinel");
        }
    }

    #[test]
    fn tiny_normal_force_still_trips_the_sentinel() {
        let model = test_model();
        // |cn| = 1e-12: numerically zero, so no center of pressure
        let faint = integrate(&uniform(-0.3 - 5e-13), &uniform(-0.3 + 5e-13), &model, 0.0, 1.0)
            .unwrap();
        assert!(faint.xcop.is_nan());
        // |cn| = 1e-6: small but resolvable, xcop must come out finite
        let small = integrate(&uniform(-0.3 - 5e-7), &uniform(-0.3 + 5e-7), &model, 0.0, 1.0)
            .unwrap();
        assert!(small.xcop.is_finite());
    }

    #[test]
    fn uniform_unit_loading_round_trip() {
        // Cp_upper = -0.5, Cp_lower = +0.5, alpha = 0:
        // cn = 1, cm = 1/2, ca ~ 0 (both surfaces close at the trailing edge)
        let model = test_model();
        let c = integrate(&uniform(-0.5), &uniform(0.5), &model, 0.0, 1.0).unwrap();
        assert!((c.cn - 1.0).abs() < 1e-10);
        assert!((c.cm - 0.5).abs() < 1e-10);
        assert!(c.ca.abs() < 1e-2);
        assert!((c.cl - 1.0).abs() < 1e-2);
        assert!(c.cd.abs() < 1e-2);
        assert!((c.xcop - 0.5).abs() < 1e-10);
    }

    #[test]
    fn xcop_scales_with_chord() {
        let model = test_model();
        let c = integrate(&uniform(-0.5), &uniform(0.5), &model, 0.0, 0.16).unwrap();
        assert!((c.xcop - 0.08).abs() < 1e-10);
    }

    #[test]
    fn rotation_mixes_cn_into_cd() {
        let model = test_model();
        let at_zero = integrate(&uniform(-0.5), &uniform(0.5), &model, 0.0, 1.0).unwrap();
        let at_ten = integrate(&uniform(-0.5), &uniform(0.5), &model, 10.0, 1.0).unwrap();
        // Same body-axis loading, rotated: lift drops, drag picks up cn*sin
        assert!(at_ten.cl < at_zero.cl);
        assert!(at_ten.cd > at_zero.cd);
        let alpha = (10.0f64).to_radians();
        let expected_cd = at_ten.ca * alpha.cos() + at_ten.cn * alpha.sin();
        assert!((at_ten.cd - expected_cd).abs() < 1e-12);
    }

    #[test]
    fn split_reverses_lower_surface() {
        // 5 taps: 3 upper (LE->TE), 2 lower plumbed TE->LE
        let cp = vec![-1.0, -0.8, -0.6, 0.4, 0.2];
        let positions = vec![0.0, 50.0, 100.0, 80.0, 20.0];
        let (upper, lower) = split_surfaces(&cp, &positions).unwrap();
        assert_eq!(upper.x_over_c, vec![0.0, 0.5, 1.0]);
        assert_eq!(upper.cp, vec![-1.0, -0.8, -0.6]);
        assert_eq!(lower.x_over_c, vec![0.2, 0.8]);
        assert_eq!(lower.cp, vec![0.2, 0.4]);
    }

    #[test]
    fn split_rejects_misaligned_inputs() {
        let err = split_surfaces(&[0.0; 6], &[0.0; 5]).unwrap_err();
        assert!(matches!(err, AeroError::DistributionMismatch { .. }));
    }
}
