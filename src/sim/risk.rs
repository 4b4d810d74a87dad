//! Risk classification of a projected score.

use crate::domain::RiskLevel;

/// Scores at or above this are `Low` risk.
pub const LOW_RISK_MIN: f64 = 88.0;
/// Scores at or above this (and below `LOW_RISK_MIN`) are `Medium` risk.
pub const MEDIUM_RISK_MIN: f64 = 80.0;
/// Scores at or above this (and below `MEDIUM_RISK_MIN`) are `High` risk.
pub const HIGH_RISK_MIN: f64 = 70.0;

/// Map a score to its risk band.
///
/// Boundaries belong to the less severe band. Anything that fails every
/// comparison (including NaN) is `Critical`.
pub fn classify(score: f64) -> RiskLevel {
    if score >= LOW_RISK_MIN {
        RiskLevel::Low
    } else if score >= MEDIUM_RISK_MIN {
        RiskLevel::Medium
    } else if score >= HIGH_RISK_MIN {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_resolve_toward_lower_severity() {
        assert_eq!(classify(88.0), RiskLevel::Low);
        assert_eq!(classify(87.9), RiskLevel::Medium);
        assert_eq!(classify(80.0), RiskLevel::Medium);
        assert_eq!(classify(79.999), RiskLevel::High);
        assert_eq!(classify(70.0), RiskLevel::High);
        assert_eq!(classify(69.999), RiskLevel::Critical);
    }

    #[test]
    fn total_over_extreme_inputs() {
        assert_eq!(classify(f64::INFINITY), RiskLevel::Low);
        assert_eq!(classify(f64::NEG_INFINITY), RiskLevel::Critical);
        assert_eq!(classify(f64::NAN), RiskLevel::Critical);
        assert_eq!(classify(-5.0), RiskLevel::Critical);
        assert_eq!(classify(150.0), RiskLevel::Low);
    }
}
