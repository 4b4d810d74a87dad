//! Decimal rounding for reported scores.

/// Round to one decimal place, halves away from zero.
///
/// `f64::round` already rounds halves away from zero; scaling by ten first
/// gives one-decimal precision. Values that are not exactly representable
/// (e.g. `0.05`) round according to their binary value.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
