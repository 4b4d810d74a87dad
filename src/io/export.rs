//! Export a swept curve to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::SimulationResult;
use crate::error::{AppError, EXIT_INPUT};
use crate::sim::CRITICAL_THRESHOLD;

/// Write the curve of `result` to a CSV file.
pub fn write_curve_csv(path: &Path, result: &SimulationResult) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to create curve CSV '{}': {e}", path.display())))?;
    write_curve_rows(&mut file, result)
}

/// Write the curve CSV (header + one row per load level) to any writer.
pub fn write_curve_rows<W: Write>(out: &mut W, result: &SimulationResult) -> Result<(), AppError> {
    writeln!(out, "load_pct,projected_score,baseline_score,below_critical")
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write curve CSV header: {e}")))?;

    for p in &result.curve {
        writeln!(
            out,
            "{},{:.4},{:.4},{}",
            p.load_pct,
            p.projected_score,
            p.baseline_score,
            p.projected_score < CRITICAL_THRESHOLD,
        )
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write curve CSV row: {e}")))?;
    }

    Ok(())
}
