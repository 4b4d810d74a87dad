//! Model calibration.
//!
//! The sweep weights and point coefficients encode how sensitive the delivery
//! KPI is to order surges versus picking/dispatch elasticity. They are loaded
//! from a TOML file so the model can be recalibrated without a rebuild:
//!
//! ```toml
//! [sweep]
//! pick_weight = 12.0
//! dispatch_weight = 8.0
//! order_weight = 15.0
//!
//! [point]
//! order_coeff = 0.15
//! pick_coeff = 0.08
//! dispatch_coeff = 0.05
//! ```
//!
//! Missing keys keep their calibrated defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "LOADSIM_CONFIG";

/// Weights of the load-sweep model (score points lost at 100% stress with
/// zero elasticity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepWeights {
    pub pick_weight: f64,
    pub dispatch_weight: f64,
    pub order_weight: f64,
}

impl Default for SweepWeights {
    fn default() -> Self {
        Self {
            pick_weight: 12.0,
            dispatch_weight: 8.0,
            order_weight: 15.0,
        }
    }
}

/// Coefficients of the point projection (score points lost per percentage
/// point of surge or missing elasticity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCoefficients {
    pub order_coeff: f64,
    pub pick_coeff: f64,
    pub dispatch_coeff: f64,
}

impl Default for PointCoefficients {
    fn default() -> Self {
        Self {
            order_coeff: 0.15,
            pick_coeff: 0.08,
            dispatch_coeff: 0.05,
        }
    }
}

/// Full model calibration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub sweep: SweepWeights,
    pub point: PointCoefficients,
}

impl ModelConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), ?config, "loaded model config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ModelConfig = toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Pick the config source: explicit path, then `LOADSIM_CONFIG` (a `.env`
    /// file is honoured), then the calibrated defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        dotenvy::dotenv().ok();
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(&PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Every weight and coefficient must be finite and non-negative; negative
    /// values would let a projection rise above its baseline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("sweep.pick_weight", self.sweep.pick_weight),
            ("sweep.dispatch_weight", self.sweep.dispatch_weight),
            ("sweep.order_weight", self.sweep.order_weight),
            ("point.order_coeff", self.point.order_coeff),
            ("point.pick_coeff", self.point.pick_coeff),
            ("point.dispatch_coeff", self.point.dispatch_coeff),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}
