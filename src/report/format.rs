//! Formatted terminal output for runs, curves and batches.

use crate::config::ModelConfig;
use crate::domain::SimulationResult;
use crate::report::risk_guidance;
use crate::sim::{CRITICAL_THRESHOLD, RunHistory, ScenarioOutcome};

/// Format the run summary (inputs, point projection, risk, breaking point).
pub fn format_run_summary(result: &SimulationResult, model: &ModelConfig) -> String {
    let mut out = String::new();
    let p = &result.parameters;

    out.push_str("=== loadsim - Load Simulation & Stress Test ===\n");
    out.push_str(&format!(
        "Parameters: order +{:.0}% | picking elasticity {:.0}% | dispatch elasticity {:.0}%\n",
        p.order_volume_increase_pct, p.picking_elasticity_pct, p.dispatch_elasticity_pct
    ));
    out.push_str(&format!(
        "Sweep weights: pick={} dispatch={} order={}\n",
        model.sweep.pick_weight, model.sweep.dispatch_weight, model.sweep.order_weight
    ));
    out.push('\n');

    out.push_str(&format!("Baseline score : {:.1}%\n", result.baseline));
    out.push_str(&format!("Simulated score: {:.1}%\n", result.projected_score));
    out.push_str(&format!("Performance Δ  : {}%\n", fmt_signed(result.delta)));
    out.push_str(&format!("Breaking point : {}\n", result.breaking_point));
    out.push('\n');

    out.push_str(&format!("Risk level: {}\n", result.risk_level));
    out.push_str(&format!("  {}\n", risk_guidance(result.risk_level)));

    out
}

/// Format the swept curve as a table, marking points below the critical line.
pub fn format_curve_table(result: &SimulationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Stress curve (critical threshold {CRITICAL_THRESHOLD:.0}%):\n"
    ));
    out.push_str(&format!("{:>6} {:>10} {:>10}", "load", "score", "baseline"));
    out.push('\n');
    out.push_str(&format!("{:-<6} {:-<10} {:-<10}", "", "", ""));
    out.push('\n');

    for p in &result.curve {
        let marker = if p.projected_score < CRITICAL_THRESHOLD { " !" } else { "" };
        out.push_str(&format!(
            "{:>5}% {:>10.1} {:>10.1}{marker}\n",
            p.load_pct,
            p.projected_score,
            p.baseline_score,
        ));
    }

    out
}

/// Format batch outcomes plus the best/worst comparison from `history`.
pub fn format_batch(outcomes: &[ScenarioOutcome], history: &RunHistory) -> String {
    let mut out = String::new();

    out.push_str(
        format!(
            "{:<24} {:>9} {:>9} {:>8} {:<9} {:>8}",
            "scenario", "baseline", "score", "delta", "risk", "break"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<24} {:-<9} {:-<9} {:-<8} {:-<9} {:-<8}",
            "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for o in outcomes {
        match &o.result {
            Ok(r) => {
                out.push_str(
                    format!(
                        "{:<24} {:>9.1} {:>9.1} {:>8} {:<9} {:>8}",
                        truncate(&o.name, 24),
                        r.baseline,
                        r.projected_score,
                        fmt_signed(r.delta),
                        r.risk_level.display_name(),
                        r.breaking_point.to_string(),
                    )
                    .trim_end(),
                );
            }
            Err(err) => {
                out.push_str(&format!("{:<24} error: {err}", truncate(&o.name, 24)));
            }
        }
        out.push('\n');
    }

    if let (Some(best), Some(worst)) = (history.best(), history.worst()) {
        out.push('\n');
        out.push_str(&format!(
            "Compared {} run(s): best {:.1}% ({}), worst {:.1}% ({})\n",
            history.len(),
            best.projected_score,
            best.risk_level,
            worst.projected_score,
            worst.risk_level,
        ));
    }

    out
}

fn fmt_signed(v: f64) -> String {
    if v > 0.0 {
        format!("+{v:.1}")
    } else {
        format!("{v:.1}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
