//! Load-sweep curve generation.
//!
//! The sweep covers `0..=100` percent load in fixed steps of 5, evaluating the
//! elasticity model at `stress = load / 100`. There is no randomness: identical
//! inputs always give an identical curve, and the curve always covers the full
//! domain even after the breaking point.
//!
//! Each score is rounded to one decimal; the breaking point is searched on
//! these rounded values.

use crate::config::SweepWeights;
use crate::domain::{CurvePoint, ElasticityParameters};
use crate::math::round_one_decimal;
use crate::models::project;

/// Step between swept load levels (percent).
pub const LOAD_STEP_PCT: u32 = 5;
/// Highest swept load level (percent).
pub const LOAD_MAX_PCT: u32 = 100;
/// Number of points in a full sweep.
pub const CURVE_POINTS: usize = (LOAD_MAX_PCT / LOAD_STEP_PCT) as usize + 1;

/// Sweep the load domain and return points in ascending load order.
pub fn generate_curve(baseline: f64, params: &ElasticityParameters, weights: &SweepWeights) -> Vec<CurvePoint> {
    (0..=LOAD_MAX_PCT)
        .step_by(LOAD_STEP_PCT as usize)
        .map(|load_pct| {
            let stress = f64::from(load_pct) / 100.0;
            CurvePoint {
                load_pct,
                projected_score: round_one_decimal(project(baseline, params, stress, weights)),
                baseline_score: baseline,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_has_twenty_one_points() {
        let params = ElasticityParameters::new(25.0, 60.0, 55.0).unwrap();
        let curve = generate_curve(91.4, &params, &SweepWeights::default());
        assert_eq!(curve.len(), CURVE_POINTS);
        assert_eq!(CURVE_POINTS, 21);

        let loads: Vec<u32> = curve.iter().map(|p| p.load_pct).collect();
        let expected: Vec<u32> = (0..=20).map(|i| i * 5).collect();
        assert_eq!(loads, expected);
        assert!(curve.iter().all(|p| p.baseline_score == 91.4));
    }

    #[test]
    fn sweep_starts_at_baseline_and_ends_at_full_stress() {
        let params = ElasticityParameters::new(25.0, 60.0, 55.0).unwrap();
        let curve = generate_curve(91.4, &params, &SweepWeights::default());
        assert_eq!(curve[0].projected_score, 91.4);
        // 0.4*12 + 0.45*8 + 0.25*15 = 12.15, so 79.25 before rounding.
        assert!((curve[20].projected_score - 79.25).abs() <= 0.05 + 1e-9);
    }

    #[test]
    fn scores_are_rounded_to_one_decimal() {
        let params = ElasticityParameters::new(5.0, 20.0, 24.0).unwrap();
        let curve = generate_curve(91.4, &params, &SweepWeights::default());
        for p in &curve {
            assert_eq!(p.projected_score, round_one_decimal(p.projected_score));
        }
        // 74.97 unrounded at full load.
        assert_eq!(curve[20].projected_score, 75.0);
    }

    #[test]
    fn sweep_is_deterministic() {
        let params = ElasticityParameters::new(70.0, 35.0, 45.0).unwrap();
        let a = generate_curve(88.0, &params, &SweepWeights::default());
        let b = generate_curve(88.0, &params, &SweepWeights::default());
        assert_eq!(a, b);
    }
}
