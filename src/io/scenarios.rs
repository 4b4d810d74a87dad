//! Scenario file ingest.
//!
//! Scenario files are TOML (`.toml`) or JSON (anything else):
//!
//! ```toml
//! baseline = 91.4
//!
//! [[scenario]]
//! name = "peak-week"
//! orderVolumeIncreasePct = 40.0
//! pickingElasticityPct = 55.0
//! dispatchElasticityPct = 50.0
//! ```

use std::path::Path;

use tracing::debug;

use crate::domain::ScenarioSet;
use crate::error::{AppError, EXIT_INPUT};

/// Load a scenario file, choosing the format by extension.
pub fn read_scenarios(path: &Path) -> Result<ScenarioSet, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to read scenarios '{}': {e}", path.display())))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let set = if is_toml {
        parse_scenarios_toml(&text)?
    } else {
        parse_scenarios_json(&text)?
    };

    if set.scenarios.is_empty() {
        return Err(AppError::new(
            EXIT_INPUT,
            format!("Scenario file '{}' defines no scenarios.", path.display()),
        ));
    }

    debug!(path = %path.display(), count = set.scenarios.len(), "loaded scenarios");
    Ok(set)
}

pub fn parse_scenarios_toml(text: &str) -> Result<ScenarioSet, AppError> {
    toml::from_str(text).map_err(|e| AppError::new(EXIT_INPUT, format!("Invalid scenario TOML: {e}")))
}

pub fn parse_scenarios_json(text: &str) -> Result<ScenarioSet, AppError> {
    serde_json::from_str(text).map_err(|e| AppError::new(EXIT_INPUT, format!("Invalid scenario JSON: {e}")))
}
