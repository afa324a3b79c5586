/// Parses the text of a numeric literal token.
///
/// Accepts an optional sign, an optional fractional part and an optional
/// exponent. Literals too large for `f64` become infinite rather than failing.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the text is not a numeric literal.
///
/// # Example
/// ```
/// use linecalc::util::num::parse_literal;
///
/// assert_eq!(parse_literal("-2.5"), Some(-2.5));
/// assert_eq!(parse_literal("+.5"), Some(0.5));
/// assert_eq!(parse_literal("3."), Some(3.0));
/// assert_eq!(parse_literal("1e3"), Some(1000.0));
/// assert_eq!(parse_literal("1e400"), Some(f64::INFINITY));
/// assert_eq!(parse_literal("x"), None);
/// ```
#[must_use]
pub fn parse_literal(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Returns `true` when `result` is NaN or infinite although every operand is
/// finite.
///
/// Operands that are already non-finite are allowed to propagate.
///
/// # Example
/// ```
/// use linecalc::util::num::lost_finiteness;
///
/// assert!(lost_finiteness(f64::NAN, &[-1.0]));
/// assert!(lost_finiteness(f64::INFINITY, &[1.0, 0.0]));
/// assert!(!lost_finiteness(f64::INFINITY, &[f64::INFINITY, 2.0]));
/// assert!(!lost_finiteness(4.0, &[2.0, 2.0]));
/// ```
#[must_use]
pub fn lost_finiteness(result: f64, operands: &[f64]) -> bool {
    !result.is_finite() && operands.iter().all(|x| x.is_finite())
}
