//! Canonical numeric text.

/// Format a number the way `print` shows it.
///
/// Follows `%g` with the shortest digits that round-trip: scientific notation
/// when the decimal exponent is below -4 or at least 6, plain decimal otherwise.
/// Whole numbers carry no fractional part.
///
/// ```
/// use quill_ir::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1_000_000.0), "1e+06");
/// assert_eq!(format_number(0.000_000_15), "1.5e-07");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.234567e6`.
    let sci = format!("{n:e}");
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return format!("{n}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{n}");
    };

    if (-4..6).contains(&exponent) {
        format!("{n}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
