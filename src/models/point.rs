//! Point projection for the current configuration.
//!
//! Unlike the sweep model this reads the parameters as absolute magnitudes:
//!
//! ```text
//! score = max(FLOOR, baseline - order*0.15 - (100-pick)*0.08 - (100-dispatch)*0.05)
//! ```
//!
//! The score and its delta from baseline are rounded to one decimal.

use crate::config::PointCoefficients;
use crate::domain::ElasticityParameters;
use crate::math::round_one_decimal;
use crate::models::SCORE_FLOOR;

/// Projected score for today's settings (one decimal).
pub fn project_current(baseline: f64, params: &ElasticityParameters, coeffs: &PointCoefficients) -> f64 {
    let raw = baseline
        - params.order_volume_increase_pct * coeffs.order_coeff
        - (100.0 - params.picking_elasticity_pct) * coeffs.pick_coeff
        - (100.0 - params.dispatch_elasticity_pct) * coeffs.dispatch_coeff;
    round_one_decimal(SCORE_FLOOR.max(raw))
}

/// `projected - baseline`, rounded to one decimal.
pub fn score_delta(projected: f64, baseline: f64) -> f64 {
    round_one_decimal(projected - baseline)
}
