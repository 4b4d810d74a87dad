//! Score projection models.
//!
//! Two models live side by side and are never merged:
//!
//! - `elasticity`: the load-sweep model, scaled by a stress fraction
//! - `point`: the "today under these settings" projection, which reads the
//!   parameters as absolute magnitudes with its own coefficient set
//!
//! Both are small, pure functions so the curve generator and the session can
//! stay generic.

pub mod elasticity;
pub mod point;

pub use elasticity::*;
pub use point::*;

/// Hard minimum of any projected score: total operational collapse.
pub const SCORE_FLOOR: f64 = 40.0;
