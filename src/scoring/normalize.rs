//! Normalization helpers shared by both scorers.
//!
//! Each helper maps a raw metric onto a sub-score. None of them clamp on
//! both ends: only the combined score is forced into `[0, 1]`
//! (see [`clamp_unit`]), so out-of-range inputs still move the weighted
//! total before that final clamp.

/// Rate of `count` per `per` residents, or `None` for an empty population.
pub fn per_capita(count: u64, population: u64, per: f64) -> Option<f64> {
    if population == 0 {
        return None;
    }
    Some(count as f64 / population as f64 * per)
}

/// How far `rate` falls short of `adequate`, as `1 - rate / adequate`.
///
/// Floored at 0 once the rate meets the reference. A negative rate would
/// push this above 1; the result is not capped.
pub fn shortfall(rate: f64, adequate: f64) -> f64 {
    (1.0 - rate / adequate).max(0.0)
}

/// Linear ramp from 0 at `value == 0` to 1 at `value == span`, capped at 1.
///
/// Not floored: a negative value yields a negative sub-score.
pub fn capped_ramp(value: f64, span: f64) -> f64 {
    (value / span).min(1.0)
}

/// Clamp a combined score into `[0, 1]`.
pub fn clamp_unit(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}
