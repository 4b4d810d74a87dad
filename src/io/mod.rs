//! Input/output helpers.
//!
//! - result JSON read/write (`result`)
//! - curve CSV export (`export`)
//! - scenario file ingest (`scenarios`)

pub mod export;
pub mod result;
pub mod scenarios;

pub use export::*;
pub use result::*;
pub use scenarios::*;
