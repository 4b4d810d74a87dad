//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - produced in-memory by a simulation run
//! - exported to JSON for a display layer or reporting endpoint
//! - reloaded later for re-printing or comparisons
//!
//! Field names serialize in camelCase, the shape UI consumers expect.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lower bound of the order-volume surge domain (percent).
pub const ORDER_INCREASE_MIN: f64 = 0.0;
/// Upper bound of the order-volume surge domain (percent).
pub const ORDER_INCREASE_MAX: f64 = 100.0;
/// Lower bound of the picking/dispatch elasticity domain (percent).
pub const ELASTICITY_MIN: f64 = 20.0;
/// Upper bound of the picking/dispatch elasticity domain (percent).
pub const ELASTICITY_MAX: f64 = 100.0;

/// Operational elasticity settings for one simulation run.
///
/// Fields are plain data; use [`ElasticityParameters::new`] or
/// [`ElasticityParameters::validate`] to enforce the declared domains. Values
/// outside them are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElasticityParameters {
    /// Order surge above the current weekly baseline, `[0, 100]`.
    pub order_volume_increase_pct: f64,
    /// Warehouse picking capacity headroom, `[20, 100]`.
    pub picking_elasticity_pct: f64,
    /// Dispatch throughput flexibility, `[20, 100]`.
    pub dispatch_elasticity_pct: f64,
}

impl ElasticityParameters {
    /// Build a parameter set, rejecting any value outside its domain.
    pub fn new(
        order_volume_increase_pct: f64,
        picking_elasticity_pct: f64,
        dispatch_elasticity_pct: f64,
    ) -> Result<Self, ValidationError> {
        let params = Self {
            order_volume_increase_pct,
            picking_elasticity_pct,
            dispatch_elasticity_pct,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every field against its declared domain.
    ///
    /// Non-finite values always fail.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range(
            "orderVolumeIncreasePct",
            self.order_volume_increase_pct,
            ORDER_INCREASE_MIN,
            ORDER_INCREASE_MAX,
        )?;
        check_range(
            "pickingElasticityPct",
            self.picking_elasticity_pct,
            ELASTICITY_MIN,
            ELASTICITY_MAX,
        )?;
        check_range(
            "dispatchElasticityPct",
            self.dispatch_elasticity_pct,
            ELASTICITY_MIN,
            ELASTICITY_MAX,
        )
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    // NaN fails `contains`, so non-finite inputs are caught here too.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

/// Check a baseline score: a finite percentage in `[0, 100]`.
pub fn validate_baseline(baseline: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&baseline) {
        Ok(())
    } else {
        Err(ValidationError::Baseline { value: baseline })
    }
}

/// One sample of the load sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    /// Load level in percent, `0..=100` in steps of 5.
    pub load_pct: u32,
    pub projected_score: f64,
    pub baseline_score: f64,
}

/// Ordinal operational risk, ordered by ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Where the load sweep first crosses the critical threshold.
///
/// `BeyondDomain` means "not reached within 0-100% load", which is a distinct
/// outcome from crossing at exactly 100%. It serializes as the string
/// `"beyond-domain"`; `AtLoad` serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakingPoint {
    AtLoad(u32),
    BeyondDomain,
}

/// Wire tag for [`BreakingPoint::BeyondDomain`].
pub const BEYOND_DOMAIN: &str = "beyond-domain";

impl fmt::Display for BreakingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakingPoint::AtLoad(pct) => write!(f, "{pct}%"),
            BreakingPoint::BeyondDomain => f.write_str(">100%"),
        }
    }
}

impl Serialize for BreakingPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BreakingPoint::AtLoad(pct) => serializer.serialize_u32(*pct),
            BreakingPoint::BeyondDomain => serializer.serialize_str(BEYOND_DOMAIN),
        }
    }
}

impl<'de> Deserialize<'de> for BreakingPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Load(u32),
            Tag(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Load(pct) => Ok(BreakingPoint::AtLoad(pct)),
            Raw::Tag(tag) if tag == BEYOND_DOMAIN => Ok(BreakingPoint::BeyondDomain),
            Raw::Tag(tag) => Err(de::Error::invalid_value(
                Unexpected::Str(&tag),
                &"a load percentage or \"beyond-domain\"",
            )),
        }
    }
}

/// Complete output of one simulation run.
///
/// Built atomically by a single run and never mutated afterwards; a new run
/// produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub parameters: ElasticityParameters,
    pub baseline: f64,
    /// Point projection for the exact parameter settings (one decimal).
    pub projected_score: f64,
    /// `projected_score - baseline` (one decimal).
    pub delta: f64,
    pub risk_level: RiskLevel,
    #[serde(rename = "breakingPointLoadPct")]
    pub breaking_point: BreakingPoint,
    pub curve: Vec<CurvePoint>,
}

/// A named parameter set from a scenario file.
///
/// `baseline` may be omitted, in which case the file-level baseline applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub baseline: Option<f64>,
    #[serde(flatten)]
    pub parameters: ElasticityParameters,
}

/// A scenario file: an optional shared baseline plus the scenarios to run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSet {
    #[serde(default)]
    pub baseline: Option<f64>,
    #[serde(default, rename = "scenario", alias = "scenarios")]
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Baseline for one scenario: its own, else the file's.
    pub fn baseline_for(&self, scenario: &Scenario) -> Result<f64, ValidationError> {
        scenario
            .baseline
            .or(self.baseline)
            .ok_or_else(|| ValidationError::MissingBaseline {
                scenario: scenario.name.clone(),
            })
    }
}
