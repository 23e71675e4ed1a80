//! Weight rounding to loadable increments.

/// Smallest practical jump on a barbell (two 1.25 plates).
pub const DEFAULT_INCREMENT: f64 = 2.5;

/// Round `value` to the nearest multiple of `increment`, halves rounding up.
///
/// A non-positive or non-finite increment leaves the value untouched.
/// NaN input yields NaN.
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    if !increment.is_finite() || increment <= 0.0 {
        return value;
    }
    (value / increment + 0.5).floor() * increment
}

/// Round a derived weight to the default 2.5 increment.
pub fn round_weight(value: f64) -> f64 {
    round_to_increment(value, DEFAULT_INCREMENT)
}
