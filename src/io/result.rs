//! Read/write result JSON files.
//!
//! A result file is the portable form of one run:
//! - the `SimulationResult` itself (camelCase keys, the same document a UI
//!   consumes)
//! - the model calibration it was computed with
//! - tool name and generation timestamp

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::domain::SimulationResult;
use crate::error::{AppError, EXIT_INPUT, EXIT_INTERNAL};

/// Tool identifier written into result files.
pub const TOOL_NAME: &str = "loadsim";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub model: ModelConfig,
    pub result: SimulationResult,
}

impl ResultFile {
    pub fn new(model: ModelConfig, result: SimulationResult) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            generated_at: Utc::now(),
            model,
            result,
        }
    }
}

/// Serialize a bare result (no envelope) as pretty JSON.
pub fn result_to_json(result: &SimulationResult) -> Result<String, AppError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| AppError::new(EXIT_INTERNAL, format!("Failed to serialize result: {e}")))
}

/// Write a result JSON file.
pub fn write_result_json(path: &Path, file: &ResultFile) -> Result<(), AppError> {
    let out = File::create(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to create result JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write result JSON: {e}")))?;

    Ok(())
}

/// Read a result JSON file.
pub fn read_result_json(path: &Path) -> Result<ResultFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to open result JSON '{}': {e}", path.display())))?;
    let parsed: ResultFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Invalid result JSON: {e}")))?;
    Ok(parsed)
}
