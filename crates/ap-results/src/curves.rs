//! The four conventional polar curves.

use ap_aero::CoefficientSample;

/// Aligned output sequences for plotting: `cl` vs `alpha`, `cd` vs `cl`,
/// `cm` vs `cl`, and `xcop` vs `alpha`. Every vector has one entry per
/// sample, in sweep order.
#[derive(Debug, Clone, Default)]
pub struct PolarCurves {
    pub alpha_deg: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
    pub cm: Vec<f64>,
    pub xcop_m: Vec<f64>,
}

impl PolarCurves {
    pub fn from_samples(samples: &[CoefficientSample]) -> Self {
        Self {
            alpha_deg: samples.iter().map(|s| s.alpha_deg).collect(),
            cl: samples.iter().map(|s| s.cl).collect(),
            cd: samples.iter().map(|s| s.cd).collect(),
            cm: samples.iter().map(|s| s.cm).collect(),
            xcop_m: samples.iter().map(|s| s.xcop_m).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.alpha_deg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha_deg.is_empty()
    }

    /// Lift polar: (alpha, cl) pairs.
    pub fn lift_polar(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.alpha_deg.iter().copied().zip(self.cl.iter().copied())
    }

    /// Drag bucket: (cl, cd) pairs.
    pub fn drag_bucket(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cl.iter().copied().zip(self.cd.iter().copied())
    }

    /// Moment curve: (cl, cm) pairs.
    pub fn moment_curve(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cl.iter().copied().zip(self.cm.iter().copied())
    }

    /// Center-of-pressure travel: (alpha, xcop) pairs.
    pub fn xcop_travel(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.alpha_deg
            .iter()
            .copied()
            .zip(self.xcop_m.iter().copied())
    }
}
