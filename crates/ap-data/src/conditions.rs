//! Test-condition configuration.
//!
//! Freestream velocity, freestream pressure, and the model chord are test
//! configuration, not measurements: they are set when the tunnel is run and
//! threaded explicitly through every computation that needs them. Nothing in
//! the pipeline falls back to a module-wide default.

use crate::error::{DataError, DataResult};
use ap_core::Real;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunnel operating point for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestConditions {
    /// Freestream velocity [m/s].
    pub v_inf_m_s: Real,
    /// Freestream static pressure [Pa].
    pub p_inf_pa: Real,
    /// Physical model chord [m].
    pub chord_m: Real,
}

impl TestConditions {
    pub fn validate(&self) -> DataResult<()> {
        if !(self.v_inf_m_s > 0.0) || !self.v_inf_m_s.is_finite() {
            return Err(DataError::InvalidConditions {
                what: "freestream velocity must be positive and finite",
            });
        }
        if !(self.chord_m > 0.0) || !self.chord_m.is_finite() {
            return Err(DataError::InvalidConditions {
                what: "chord must be positive and finite",
            });
        }
        if !self.p_inf_pa.is_finite() {
            return Err(DataError::InvalidConditions {
                what: "freestream pressure must be finite",
            });
        }
        Ok(())
    }

    /// Load and validate conditions from a YAML file.
    pub fn load_yaml(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let conditions: Self = serde_yaml::from_str(&content)?;
        conditions.validate()?;
        Ok(conditions)
    }
}
