//! Operand parsing and validation.
//!
//! Raw operands arrive as query-string values. [`parse_operand`] turns a
//! raw value into a typed `f64` in one pass; callers reuse the parsed
//! value for computation rather than re-parsing the string.
//!
//! # Safe-Integer Range
//!
//! A parsed value is accepted only within ±(2^53 − 1), the integers an
//! IEEE 754 double represents exactly. Finite values outside that range
//! (e.g. `1e300`) are rejected; do not relax this to an `is_finite`
//! check.

/// Largest accepted operand: 2^53 − 1.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Smallest accepted operand: −(2^53 − 1).
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;

/// Check whether a parsed value is an acceptable operand.
///
/// Returns `true` iff the value is not NaN and lies within the inclusive
/// safe-integer range. Infinities fail the range comparison.
///
/// # Examples
///
/// ```
/// use calc::validate::is_safe_number;
///
/// assert!(is_safe_number(0.0));
/// assert!(is_safe_number(-2.5));
/// assert!(!is_safe_number(f64::NAN));
/// assert!(!is_safe_number(9_007_199_254_740_992.0));
/// ```
pub fn is_safe_number(value: f64) -> bool {
    !value.is_nan() && value >= MIN_SAFE_INTEGER && value <= MAX_SAFE_INTEGER
}

/// Parse a raw query-string value into a validated operand.
///
/// Returns `None` if the value is absent, empty, not parseable as a
/// number, or outside the safe-integer range.
///
/// # Examples
///
/// ```
/// use calc::validate::parse_operand;
///
/// assert_eq!(parse_operand(Some("3.5")), Some(3.5));
/// assert_eq!(parse_operand(Some("abc")), None);
/// assert_eq!(parse_operand(None), None);
/// ```
pub fn parse_operand(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    is_safe_number(value).then_some(value)
}
