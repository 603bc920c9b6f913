//! Polar persistence: JSON manifest plus CSV sample table.

use crate::ResultsResult;
use ap_aero::{AlphaRange, CoefficientSample, DragEstimator};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What produced a saved polar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolarManifest {
    /// RFC 3339 creation timestamp.
    pub created: String,
    pub drag_estimator: DragEstimator,
    pub alpha_range: AlphaRange,
    pub sample_count: usize,
}

impl PolarManifest {
    pub fn new(estimator: DragEstimator, range: AlphaRange, sample_count: usize) -> Self {
        Self {
            created: Utc::now().to_rfc3339(),
            drag_estimator: estimator,
            alpha_range: range,
            sample_count,
        }
    }
}

/// Write `manifest.json` and `polar.csv` into `dir`, creating it if needed.
pub fn save_polar(
    dir: &Path,
    manifest: &PolarManifest,
    samples: &[CoefficientSample],
) -> ResultsResult<()> {
    fs::create_dir_all(dir)?;

    let manifest_json = serde_json::to_string_pretty(manifest)?;
    fs::write(dir.join("manifest.json"), manifest_json)?;

    let mut csv = String::from("alpha_deg,cl,cd,cm,xcop_m\n");
    for s in samples {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            s.alpha_deg, s.cl, s.cd, s.cm, s.xcop_m
        ));
    }
    fs::write(dir.join("polar.csv"), csv)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_manifest_and_csv() {
        let dir = std::env::temp_dir().join("aeropolar-store-test");
        let _ = fs::remove_dir_all(&dir);

        let range = AlphaRange {
            start_deg: 0.0,
            stop_deg: 10.0,
            step_deg: 5.0,
        };
        let samples = vec![
            CoefficientSample {
                alpha_deg: 0.0,
                cl: 0.2,
                cd: 0.01,
                cm: 0.05,
                xcop_m: 0.04,
            },
            CoefficientSample {
                alpha_deg: 5.0,
                cl: 0.6,
                cd: 0.02,
                cm: 0.15,
                xcop_m: 0.04,
            },
        ];
        let manifest = PolarManifest::new(DragEstimator::SurfaceIntegration, range, samples.len());

        save_polar(&dir, &manifest, &samples).unwrap();

        let manifest_text = fs::read_to_string(dir.join("manifest.json")).unwrap();
        let back: PolarManifest = serde_json::from_str(&manifest_text).unwrap();
        assert_eq!(back.sample_count, 2);

        let csv = fs::read_to_string(dir.join("polar.csv")).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "alpha_deg,cl,cd,cm,xcop_m");
        assert!(lines[2].starts_with("5,0.6,"));

        let _ = fs::remove_dir_all(&dir);
    }
}
