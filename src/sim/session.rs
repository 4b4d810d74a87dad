//! Simulation runs.
//!
//! [`simulate`] is the stateless core: validate, project, sweep, classify and
//! search, returning a complete [`SimulationResult`] or a validation error
//! before any computation. [`SimulationSession`] wraps it with an owned
//! "last result" slot for callers that want to keep the latest run around.

use tracing::debug;

use crate::config::ModelConfig;
use crate::domain::{ElasticityParameters, SimulationResult, validate_baseline};
use crate::error::ValidationError;
use crate::models::{project_current, score_delta};
use crate::sim::{classify, find_breaking_point, generate_curve};

/// Run one simulation without touching any shared state.
///
/// Safe to call concurrently from any number of threads.
pub fn simulate(
    model: &ModelConfig,
    baseline: f64,
    params: &ElasticityParameters,
) -> Result<SimulationResult, ValidationError> {
    validate_baseline(baseline)?;
    params.validate()?;

    let projected_score = project_current(baseline, params, &model.point);
    let delta = score_delta(projected_score, baseline);
    let risk_level = classify(projected_score);
    let curve = generate_curve(baseline, params, &model.sweep);
    let breaking_point = find_breaking_point(&curve);

    debug!(
        baseline,
        order = params.order_volume_increase_pct,
        picking = params.picking_elasticity_pct,
        dispatch = params.dispatch_elasticity_pct,
        projected_score,
        delta,
        risk = %risk_level,
        breaking_point = %breaking_point,
        "simulation complete"
    );

    Ok(SimulationResult {
        parameters: *params,
        baseline,
        projected_score,
        delta,
        risk_level,
        breaking_point,
        curve,
    })
}

/// A single caller's simulation context.
///
/// Holds the model calibration and the most recent result. A run replaces the
/// previous result; a failed run leaves it untouched. The slot is owned, so a
/// session shared between threads needs an outer lock; prefer one session per
/// caller.
#[derive(Debug, Clone, Default)]
pub struct SimulationSession {
    model: ModelConfig,
    last: Option<SimulationResult>,
}

impl SimulationSession {
    pub fn new(model: ModelConfig) -> Self {
        Self { model, last: None }
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    /// Run a simulation and store it as the latest result.
    ///
    /// Returns an immutable snapshot of the new result.
    pub fn run(
        &mut self,
        baseline: f64,
        params: &ElasticityParameters,
    ) -> Result<SimulationResult, ValidationError> {
        let result = simulate(&self.model, baseline, params)?;
        self.last = Some(result.clone());
        Ok(result)
    }

    /// The result of the most recent successful run, if any.
    pub fn last_result(&self) -> Option<&SimulationResult> {
        self.last.as_ref()
    }
}
