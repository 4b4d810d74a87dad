//! Simulation orchestration.
//!
//! Responsibilities:
//!
//! - sweep the load domain into a curve (`curve`)
//! - classify risk and locate the breaking point (`risk`, `breaking_point`)
//! - run validated simulations and keep the last result (`session`)
//! - evaluate many independent scenarios in parallel (`batch`)
//! - keep a bounded run history for comparisons (`history`)

pub mod batch;
pub mod breaking_point;
pub mod curve;
pub mod history;
pub mod risk;
pub mod session;

pub use batch::*;
pub use breaking_point::*;
pub use curve::*;
pub use history::*;
pub use risk::*;
pub use session::*;
