//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - simulation inputs (`ElasticityParameters`, baseline validation)
//! - sweep samples (`CurvePoint`)
//! - run outputs (`SimulationResult`, `RiskLevel`, `BreakingPoint`)

pub mod types;

pub use types::*;
