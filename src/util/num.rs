/// Converts an `i64` to the nearest `f64`.
///
/// The conversion is exact for magnitudes up to `2^53` and rounds to nearest
/// beyond that.
///
/// ## Example
/// ```
/// use calcline::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Returns `true` if `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use calcline::util::num::is_integral;
///
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(0.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
