//! Breaking-point search over a swept curve.
//!
//! The critical threshold is separate from the risk bands in `risk`: a curve
//! can cross 75 while the point projection still classifies as `Medium`.

use crate::domain::{BreakingPoint, CurvePoint};

/// A swept score strictly below this marks operational breakdown.
pub const CRITICAL_THRESHOLD: f64 = 75.0;

/// First load level whose score drops below [`CRITICAL_THRESHOLD`].
///
/// Expects `curve` in ascending load order with scores already rounded, as
/// produced by [`generate_curve`](crate::sim::generate_curve).
pub fn find_breaking_point(curve: &[CurvePoint]) -> BreakingPoint {
    curve
        .iter()
        .find(|p| p.projected_score < CRITICAL_THRESHOLD)
        .map_or(BreakingPoint::BeyondDomain, |p| BreakingPoint::AtLoad(p.load_pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(load_pct: u32, projected_score: f64) -> CurvePoint {
        CurvePoint {
            load_pct,
            projected_score,
            baseline_score: 90.0,
        }
    }

    #[test]
    fn first_crossing_wins() {
        let curve = vec![point(0, 90.0), point(5, 74.9), point(10, 60.0)];
        assert_eq!(find_breaking_point(&curve), BreakingPoint::AtLoad(5));
    }

    #[test]
    fn exactly_threshold_is_not_a_crossing() {
        let curve = vec![point(0, 80.0), point(5, 75.0), point(10, 75.0)];
        assert_eq!(find_breaking_point(&curve), BreakingPoint::BeyondDomain);
    }

    #[test]
    fn crossing_at_full_load_is_distinct_from_beyond_domain() {
        let curve = vec![point(0, 90.0), point(95, 75.5), point(100, 74.0)];
        assert_eq!(find_breaking_point(&curve), BreakingPoint::AtLoad(100));
    }

    #[test]
    fn empty_curve_is_beyond_domain() {
        assert_eq!(find_breaking_point(&[]), BreakingPoint::BeyondDomain);
    }
}
