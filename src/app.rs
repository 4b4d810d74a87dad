//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the model calibration
//! - runs simulations (single or batch)
//! - prints reports or JSON
//! - writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{BatchArgs, Command, RunArgs, ShowArgs};
use crate::config::ModelConfig;
use crate::error::{AppError, EXIT_INTERNAL};

pub mod pipeline;

/// Entry point for the `loadsim` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init_tracing();
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Batch(args) => handle_batch(args),
        Command::Show(args) => handle_show(args),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let model = ModelConfig::resolve(args.model.config.as_deref())?;
    let run = pipeline::run_single(model, args.baseline, args.order_increase, args.picking, args.dispatch)?;
    let result = run
        .session
        .last_result()
        .ok_or_else(|| AppError::new(EXIT_INTERNAL, "Simulation produced no result."))?;

    if args.json {
        println!("{}", crate::io::result_to_json(result)?);
    } else {
        println!("{}", crate::report::format_run_summary(result, run.session.model()));
        if !args.no_curve {
            println!("{}", crate::report::format_curve_table(result));
        }
    }

    // Optional exports.
    if let Some(path) = &args.export {
        let file = crate::io::ResultFile::new(*run.session.model(), result.clone());
        crate::io::write_result_json(path, &file)?;
        info!(path = %path.display(), "wrote result JSON");
    }
    if let Some(path) = &args.export_curve {
        crate::io::write_curve_csv(path, result)?;
        info!(path = %path.display(), "wrote curve CSV");
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let model = ModelConfig::resolve(args.model.config.as_deref())?;
    let batch = pipeline::run_scenarios(model, &args.scenarios, args.keep)?;
    info!(
        scenarios = batch.outcomes.len(),
        succeeded = batch.outcomes.iter().filter(|o| o.result.is_ok()).count(),
        "batch complete"
    );

    println!("{}", crate::report::format_batch(&batch.outcomes, &batch.history));
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let file = crate::io::read_result_json(&args.result)?;
    info!(tool = %file.tool, generated_at = %file.generated_at, "loaded result JSON");

    println!("Generated: {}", file.generated_at.to_rfc3339());
    println!("{}", crate::report::format_run_summary(&file.result, &file.model));
    if !args.no_curve {
        println!("{}", crate::report::format_curve_table(&file.result));
    }
    Ok(())
}
