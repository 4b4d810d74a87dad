use loadsim::config::ModelConfig;
use loadsim::domain::{BreakingPoint, ElasticityParameters, RiskLevel};
use loadsim::io::{ResultFile, read_result_json, write_result_json};
use loadsim::math::round_one_decimal;
use loadsim::models::project;
use loadsim::sim::{SimulationSession, classify, find_breaking_point, generate_curve, simulate};

fn params(order: f64, pick: f64, dispatch: f64) -> ElasticityParameters {
    ElasticityParameters::new(order, pick, dispatch).unwrap()
}

#[test]
fn worst_case_curve_matches_hand_computed_steps() {
    // Full surge, minimum elasticity: score = 91.4 - 31 * stress.
    let expected = [
        91.4, 89.85, 88.3, 86.75, 85.2, 83.65, 82.1, 80.55, 79.0, 77.45, 75.9, 74.35, 72.8, 71.25, 69.7,
        68.15, 66.6, 65.05, 63.5, 61.95, 60.4,
    ];
    let weights = ModelConfig::default().sweep;
    let p = params(100.0, 20.0, 20.0);
    let curve = generate_curve(91.4, &p, &weights);

    assert_eq!(curve.len(), expected.len());
    for (i, (point, want)) in curve.iter().zip(expected).enumerate() {
        assert_eq!(point.load_pct, i as u32 * 5);
        let raw = project(91.4, &p, f64::from(point.load_pct) / 100.0, &weights);
        assert!((raw - want).abs() < 1e-9, "load {}: got {raw}, want {want}", point.load_pct);
        assert_eq!(point.projected_score, round_one_decimal(raw));
    }

    assert_eq!(find_breaking_point(&curve), BreakingPoint::AtLoad(55));
}

#[test]
fn near_threshold_score_rounds_up_and_does_not_break() {
    // Unrounded full-load score is 74.97; displayed and searched as 75.0.
    let result = simulate(&ModelConfig::default(), 91.4, &params(5.0, 20.0, 24.0)).unwrap();
    assert_eq!(result.curve[20].projected_score, 75.0);
    assert_eq!(result.breaking_point, BreakingPoint::BeyondDomain);
}

#[test]
fn dashboard_default_scenario() {
    let result = simulate(&ModelConfig::default(), 91.4, &params(25.0, 60.0, 55.0)).unwrap();
    assert_eq!(result.projected_score, 82.2);
    assert_eq!(result.delta, -9.2);
    assert_eq!(result.risk_level, RiskLevel::Medium);
    // Sweep bottoms out at 79.25, never below 75.
    assert_eq!(result.breaking_point, BreakingPoint::BeyondDomain);
}

#[test]
fn minimum_stress_never_breaks() {
    let result = simulate(&ModelConfig::default(), 91.4, &params(0.0, 100.0, 100.0)).unwrap();
    assert!(result.curve.iter().all(|p| p.projected_score == 91.4));
    assert_eq!(result.breaking_point, BreakingPoint::BeyondDomain);
    assert_eq!(result.projected_score, 91.4);
    assert_eq!(result.delta, 0.0);
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn classifier_boundary_law() {
    assert_eq!(classify(88.0), RiskLevel::Low);
    assert_eq!(classify(87.9), RiskLevel::Medium);
    assert_eq!(classify(80.0), RiskLevel::Medium);
    assert_eq!(classify(69.999), RiskLevel::Critical);
}

#[test]
fn risk_and_breaking_point_are_independent() {
    // The point projection is High while the sweep only crosses 75 near full load.
    let result = simulate(&ModelConfig::default(), 91.4, &params(60.0, 40.0, 60.0)).unwrap();
    // 91.4 - 9.0 - 4.8 - 2.0 = 75.6
    assert_eq!(result.projected_score, 75.6);
    assert_eq!(result.risk_level, RiskLevel::High);
    // Sweep: 0.6*12 + 0.4*8 + 0.6*15 = 19.4 per unit stress; crosses at 85% (74.9).
    assert_eq!(result.breaking_point, BreakingPoint::AtLoad(85));
}

#[test]
fn session_runs_are_idempotent() {
    let mut session = SimulationSession::default();
    let p = params(70.0, 35.0, 45.0);
    let a = session.run(87.0, &p).unwrap();
    let b = session.run(87.0, &p).unwrap();
    assert_eq!(a, b);
    assert_eq!(session.last_result(), Some(&b));
}

#[test]
fn result_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");

    let model = ModelConfig::default();
    let result = simulate(&model, 91.4, &params(100.0, 20.0, 20.0)).unwrap();
    let file = ResultFile::new(model, result);
    write_result_json(&path, &file).unwrap();

    let back = read_result_json(&path).unwrap();
    assert_eq!(back, file);
    assert_eq!(back.result.breaking_point, BreakingPoint::AtLoad(55));
}
