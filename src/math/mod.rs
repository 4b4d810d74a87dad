//! Numeric helpers shared by the models.

pub mod rounding;

pub use rounding::*;
