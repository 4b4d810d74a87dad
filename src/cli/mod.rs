//! Command-line parsing for the load simulation engine.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "loadsim", version, about = "Operational load simulation and stress testing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one simulation and print the projection, risk and stress curve.
    Run(RunArgs),
    /// Run every scenario in a TOML/JSON file and compare the results.
    Batch(BatchArgs),
    /// Re-print a result JSON written by `loadsim run --export`.
    Show(ShowArgs),
}

/// Model calibration source, shared by commands that simulate.
#[derive(Debug, Args, Clone)]
pub struct ModelArgs {
    /// Model config TOML (falls back to $LOADSIM_CONFIG, then built-in defaults).
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Current-week baseline score (percent).
    #[arg(short = 'b', long, default_value_t = 91.4)]
    pub baseline: f64,

    /// Order volume surge above baseline (percent, 0-100).
    #[arg(short = 'o', long, default_value_t = 25.0)]
    pub order_increase: f64,

    /// Picking capacity elasticity (percent, 20-100).
    #[arg(short = 'p', long, default_value_t = 60.0)]
    pub picking: f64,

    /// Dispatch throughput elasticity (percent, 20-100).
    #[arg(short = 'd', long, default_value_t = 55.0)]
    pub dispatch: f64,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Skip the curve table in the text report.
    #[arg(long)]
    pub no_curve: bool,

    /// Export the result (with model calibration) to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the stress curve to CSV.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// Scenario file (`.toml`, otherwise JSON).
    #[arg(long, value_name = "FILE")]
    pub scenarios: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Number of results kept for the best/worst comparison.
    #[arg(long, default_value_t = 50)]
    pub keep: usize,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Result JSON file produced by `loadsim run --export`.
    #[arg(long, value_name = "JSON")]
    pub result: PathBuf,

    /// Skip the curve table.
    #[arg(long)]
    pub no_curve: bool,
}
