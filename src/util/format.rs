/// Default number of significant digits for printed results.
pub const DEFAULT_PRECISION: usize = 4;
/// More significant digits than an `f64` carries are not printed.
pub const MAX_PRECISION: usize = 17;

/// Formats `value` with `digits` significant digits, like C's `%.<digits>g`.
///
/// Scientific notation is used when the decimal exponent is below `-4` or at
/// least `digits`; fixed notation otherwise. Trailing zeros and a dangling
/// decimal point are removed. Non-finite values are spelled `inf`, `-inf` and
/// `nan`. `digits` is clamped to `1..=MAX_PRECISION`.
///
/// # Parameters
/// - `value`: The number to format.
/// - `digits`: Significant digits to keep.
///
/// # Returns
/// The formatted string.
///
/// # Example
/// ```
/// use infixcalc::util::format::significant;
///
/// assert_eq!(significant(26.828_571_428_571_4, 4), "26.83");
/// assert_eq!(significant(75.0, 4), "75");
/// assert_eq!(significant(123_456.0, 4), "1.235e+05");
/// assert_eq!(significant(0.000_012_5, 4), "1.25e-05");
/// assert_eq!(significant(f64::INFINITY, 4), "inf");
/// ```
#[must_use]
pub fn significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.clamp(1, MAX_PRECISION);
    // Rounding to `digits` first settles the exponent, e.g. 9.9996 -> 1.000e1.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e')
                                         .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let precision = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}",
                strip_trailing_zeros(mantissa),
                exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(precision - 1 - exponent).unwrap_or_default();
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
