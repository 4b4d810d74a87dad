//! Parallel evaluation of independent scenarios.
//!
//! Each scenario is a self-contained call into [`simulate`]; no state is shared
//! between them, so they fan out across the rayon pool. Output order matches
//! input order regardless of scheduling.

use rayon::prelude::*;
use tracing::warn;

use crate::config::ModelConfig;
use crate::domain::{ScenarioSet, SimulationResult};
use crate::error::ValidationError;
use crate::sim::simulate;

/// Result of one scenario in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<SimulationResult, ValidationError>,
}

/// Evaluate every scenario in `set`.
///
/// A failing scenario does not stop the others; its outcome carries the
/// validation error instead.
pub fn run_batch(model: &ModelConfig, set: &ScenarioSet) -> Vec<ScenarioOutcome> {
    set.scenarios
        .par_iter()
        .map(|scenario| {
            let result = set
                .baseline_for(scenario)
                .and_then(|baseline| simulate(model, baseline, &scenario.parameters));
            if let Err(err) = &result {
                warn!(scenario = %scenario.name, error = %err, "scenario rejected");
            }
            ScenarioOutcome {
                name: scenario.name.clone(),
                result,
            }
        })
        .collect()
}
