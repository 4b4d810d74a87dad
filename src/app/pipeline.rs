//! Shared simulation workflow used by the CLI commands.
//!
//! Keeping this in one place avoids duplicating the core flow:
//! resolve config -> validate -> simulate -> (batch) collect history
//!
//! The commands can then focus on presentation (text vs JSON vs files).

use std::path::Path;

use crate::config::ModelConfig;
use crate::domain::ElasticityParameters;
use crate::error::AppError;
use crate::io::read_scenarios;
use crate::sim::{RunHistory, ScenarioOutcome, SimulationSession, run_batch};

/// All computed outputs of a single `loadsim run`.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub session: SimulationSession,
}

/// All computed outputs of a `loadsim batch`.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub outcomes: Vec<ScenarioOutcome>,
    pub history: RunHistory,
}

/// Validate inputs and run one simulation in a fresh session.
pub fn run_single(
    model: ModelConfig,
    baseline: f64,
    order_increase: f64,
    picking: f64,
    dispatch: f64,
) -> Result<RunOutput, AppError> {
    let params = ElasticityParameters::new(order_increase, picking, dispatch)?;
    let mut session = SimulationSession::new(model);
    session.run(baseline, &params)?;
    Ok(RunOutput { session })
}

/// Load a scenario file and evaluate it, keeping up to `keep` successful
/// results for comparison.
pub fn run_scenarios(model: ModelConfig, path: &Path, keep: usize) -> Result<BatchOutput, AppError> {
    let set = read_scenarios(path)?;
    let outcomes = run_batch(&model, &set);

    let mut history = RunHistory::with_capacity(keep);
    for outcome in &outcomes {
        if let Ok(result) = &outcome.result {
            history.push(result.clone());
        }
    }

    Ok(BatchOutput { outcomes, history })
}
