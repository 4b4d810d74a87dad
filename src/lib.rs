//! `loadsim` library crate.
//!
//! Operational load simulation: projects a delivery-performance score under
//! order surges and limited picking/dispatch elasticity, sweeps it across the
//! load domain, classifies risk and locates the breaking point.
//!
//! The binary (`loadsim`) is a thin wrapper around this library so that:
//!
//! - the engine is testable without spawning processes
//! - a display layer or service can embed it directly
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;
pub mod sim;
