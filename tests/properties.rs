use loadsim::config::ModelConfig;
use loadsim::domain::{BreakingPoint, ElasticityParameters};
use loadsim::math::round_one_decimal;
use loadsim::models::{SCORE_FLOOR, project_current};
use loadsim::sim::{CRITICAL_THRESHOLD, classify, generate_curve, simulate};
use proptest::prelude::*;

fn valid_params() -> impl Strategy<Value = ElasticityParameters> {
    (0.0..=100.0f64, 20.0..=100.0f64, 20.0..=100.0f64).prop_map(|(order, pick, dispatch)| ElasticityParameters {
        order_volume_increase_pct: order,
        picking_elasticity_pct: pick,
        dispatch_elasticity_pct: dispatch,
    })
}

proptest! {
    #[test]
    fn point_projection_stays_between_floor_and_baseline(
        baseline in 40.0..=100.0f64,
        params in valid_params(),
    ) {
        let score = project_current(baseline, &params, &ModelConfig::default().point);
        prop_assert!(score >= SCORE_FLOOR);
        // One-decimal rounding may lift the score by at most 0.05 above an
        // unrounded baseline.
        prop_assert!(score <= baseline + 0.05 + 1e-9, "score {} above baseline {}", score, baseline);
    }

    #[test]
    fn curve_covers_domain_and_never_rises(
        baseline in 40.0..=100.0f64,
        params in valid_params(),
    ) {
        let curve = generate_curve(baseline, &params, &ModelConfig::default().sweep);
        prop_assert_eq!(curve.len(), 21);
        for (i, p) in curve.iter().enumerate() {
            prop_assert_eq!(p.load_pct, i as u32 * 5);
            prop_assert!(p.projected_score >= SCORE_FLOOR);
            prop_assert!(p.projected_score <= baseline + 0.05 + 1e-9);
            prop_assert_eq!(p.projected_score, round_one_decimal(p.projected_score));
        }
        for w in curve.windows(2) {
            prop_assert!(w[1].projected_score <= w[0].projected_score);
        }
    }

    #[test]
    fn breaking_point_is_first_point_below_threshold(
        baseline in 40.0..=100.0f64,
        params in valid_params(),
    ) {
        let result = simulate(&ModelConfig::default(), baseline, &params).unwrap();
        match result.breaking_point {
            BreakingPoint::AtLoad(load) => {
                let idx = (load / 5) as usize;
                prop_assert!(result.curve[idx].projected_score < CRITICAL_THRESHOLD);
                prop_assert!(result.curve[..idx].iter().all(|p| p.projected_score >= CRITICAL_THRESHOLD));
            }
            BreakingPoint::BeyondDomain => {
                prop_assert!(result.curve.iter().all(|p| p.projected_score >= CRITICAL_THRESHOLD));
            }
        }
    }

    #[test]
    fn simulate_is_deterministic(baseline in 0.0..=100.0f64, params in valid_params()) {
        let model = ModelConfig::default();
        prop_assert_eq!(
            simulate(&model, baseline, &params).unwrap(),
            simulate(&model, baseline, &params).unwrap()
        );
    }

    #[test]
    fn classification_is_monotone(a in -50.0..150.0f64, b in -50.0..150.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo) >= classify(hi));
    }

    #[test]
    fn out_of_range_elasticity_is_rejected(pick in 0.0..20.0f64) {
        prop_assert!(ElasticityParameters::new(10.0, pick, 50.0).is_err());
    }
}
