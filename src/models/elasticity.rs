//! Load-sweep elasticity model.
//!
//! Each degradation term scales with the stress fraction `s`:
//!
//! ```text
//! pick     = (1 - picking/100)  * s * pick_weight
//! dispatch = (1 - dispatch/100) * s * dispatch_weight
//! order    = (order/100)        * s * order_weight
//! score    = max(FLOOR, baseline - pick - dispatch - order)
//! ```
//!
//! An elasticity of 100% zeroes its term; an order surge of 0% zeroes the
//! order term.

use crate::config::SweepWeights;
use crate::domain::ElasticityParameters;
use crate::models::SCORE_FLOOR;

/// The three degradation terms at one stress level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepImpact {
    pub pick: f64,
    pub dispatch: f64,
    pub order: f64,
}

impl SweepImpact {
    /// Score points lost to all three terms.
    pub fn total(&self) -> f64 {
        self.pick + self.dispatch + self.order
    }
}

/// Compute the degradation terms for `stress ∈ [0, 1]`.
pub fn sweep_impact(params: &ElasticityParameters, stress: f64, weights: &SweepWeights) -> SweepImpact {
    SweepImpact {
        pick: (1.0 - params.picking_elasticity_pct / 100.0) * stress * weights.pick_weight,
        dispatch: (1.0 - params.dispatch_elasticity_pct / 100.0) * stress * weights.dispatch_weight,
        order: (params.order_volume_increase_pct / 100.0) * stress * weights.order_weight,
    }
}

/// Projected score at one stress level, floored at [`SCORE_FLOOR`].
///
/// Inputs are assumed validated; there are no error conditions.
pub fn project(baseline: f64, params: &ElasticityParameters, stress: f64, weights: &SweepWeights) -> f64 {
    let impact = sweep_impact(params, stress, weights);
    SCORE_FLOOR.max(baseline - impact.total())
}
