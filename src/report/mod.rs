//! Reporting utilities: formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the engine stays free of display concerns (rounding, guidance copy)
//! - output changes are localized

pub mod format;

pub use format::*;

use crate::domain::RiskLevel;

/// Operator guidance shown next to a risk level.
pub fn risk_guidance(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Operations remain stable. No immediate intervention required.",
        RiskLevel::Medium => "Performance degradation expected. Monitor closely and prepare contingency.",
        RiskLevel::High => "Significant disruption likely. Activate emergency dispatch protocols.",
        RiskLevel::Critical => "System failure imminent. Halt order intake and escalate immediately.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_guidance() {
        for level in RiskLevel::ALL {
            assert!(!risk_guidance(level).is_empty());
        }
    }
}
