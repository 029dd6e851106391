/// Largest distance from the nearest integer at which a real value is still
/// printed as that integer.
pub const INTEGRAL_EPSILON: f64 = 1e-12;

/// Number of significant digits used when printing non-integral reals.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// `2^63` as an `f64`, the first value past the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest representable `f64`.
///
/// Integers above `2^53` in magnitude lose precision, exactly like a native
/// integer-to-double conversion.
///
/// ## Example
/// ```
/// use calc::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(i64::MAX), 9_223_372_036_854_775_808.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Returns the integer a real value should be printed as, if any.
///
/// A value qualifies when it is finite, its nearest integer lies inside the
/// `i64` range, and it is within [`INTEGRAL_EPSILON`] of that integer.
///
/// ## Example
/// ```
/// use calc::util::num::nearest_integral;
///
/// assert_eq!(nearest_integral(8.0), Some(8));
/// assert_eq!(nearest_integral(-3.0000000000000004), Some(-3));
/// assert_eq!(nearest_integral(0.5), None);
/// assert_eq!(nearest_integral(1e300), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn nearest_integral(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if !(-I64_BOUND..I64_BOUND).contains(&rounded) {
        return None;
    }
    if (value - rounded).abs() < INTEGRAL_EPSILON {
        Some(rounded as i64)
    } else {
        None
    }
}

/// Formats a real with `precision` significant digits, choosing between fixed
/// and exponent notation the way C's `%g` does.
///
/// Trailing zeros of the fraction are removed. Exponents carry a sign and at
/// least two digits. Non-finite values print as `inf`, `-inf`, `nan`.
///
/// ## Example
/// ```
/// use calc::util::num::format_general;
///
/// assert_eq!(format_general(0.1 + 0.2, 15), "0.3");
/// assert_eq!(format_general(2.5, 15), "2.5");
/// assert_eq!(format_general(1e300, 15), "1e+300");
/// assert_eq!(format_general(0.00001234, 15), "1.234e-05");
/// assert_eq!(format_general(f64::NEG_INFINITY, 15), "-inf");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return String::from(if value.is_sign_negative() { "-nan" } else { "nan" });
    }
    if value.is_infinite() {
        return String::from(if value < 0.0 { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);

    let precision_exp = i64::try_from(precision).unwrap_or(i64::MAX);
    if exponent < -4 || exponent >= precision_exp {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_fraction_zeros(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(precision_exp - 1 - exponent).unwrap_or(0);
        strip_fraction_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing remains after it.
fn strip_fraction_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_detection_respects_epsilon() {
        assert_eq!(nearest_integral(2.0 + 1e-13), Some(2));
        assert_eq!(nearest_integral(2.0 + 1e-9), None);
        assert_eq!(nearest_integral(-0.0), Some(0));
    }

    #[test]
    fn integral_detection_rejects_out_of_range_and_non_finite() {
        assert_eq!(nearest_integral(I64_BOUND), None);
        assert_eq!(nearest_integral(-I64_BOUND), Some(i64::MIN));
        assert_eq!(nearest_integral(f64::NAN), None);
        assert_eq!(nearest_integral(f64::INFINITY), None);
    }

    #[test]
    fn general_format_switches_to_exponent_at_precision() {
        assert_eq!(format_general(123_456_789_012_345.6, 15), "123456789012346");
        assert_eq!(format_general(1_234_567_890_123_456.0, 15), "1.23456789012346e+15");
        assert_eq!(format_general(0.0001, 15), "0.0001");
        assert_eq!(format_general(0.000_012_5, 15), "1.25e-05");
    }

    #[test]
    fn general_format_rounds_to_fifteen_digits() {
        assert_eq!(format_general(1.0 / 3.0, 15), "0.333333333333333");
        assert_eq!(format_general(-2.0 / 3.0, 15), "-0.666666666666667");
        assert_eq!(format_general(std::f64::consts::PI, 15), "3.14159265358979");
    }

    #[test]
    fn general_format_handles_special_values() {
        assert_eq!(format_general(f64::INFINITY, 15), "inf");
        assert_eq!(format_general(f64::NAN, 15), "nan");
        assert_eq!(format_general(-0.0, 15), "-0");
    }
}
