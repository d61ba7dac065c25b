//! Significant-digit rounding and exponent expansion

/// Round `value` to `digits` significant digits.
///
/// Non-finite values and zero are returned unchanged.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    format!("{:.*e}", digits.saturating_sub(1), value)
        .parse()
        .unwrap_or(value)
}

/// Render a finite value as plain decimal digits, never in exponent form
pub fn to_plain_decimal(value: f64) -> String {
    expand_exponent(&format!("{:e}", value))
}

/// Expand a numeral in exponent notation (`1.5e-7`, `2E21`) into plain
/// decimal digits. Strings without an exponent are returned as-is.
///
/// A positive exponent pads with trailing zeros, a negative one pads with
/// leading zeros after the decimal point.
pub fn expand_exponent(numeral: &str) -> String {
    let Some((coefficient, exponent)) = numeral.split_once(['e', 'E']) else {
        return numeral.to_string();
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return numeral.to_string();
    };

    let (sign, coefficient) = match coefficient.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", coefficient),
    };
    let (int_part, frac_part) = coefficient.split_once('.').unwrap_or((coefficient, ""));
    let digits = format!("{}{}", int_part, frac_part);

    // Index of the decimal point within `digits` once the exponent is applied
    let point = int_part.len() as i64 + exponent;

    let body = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else if point as usize >= digits.len() {
        format!("{}{}", digits, "0".repeat(point as usize - digits.len()))
    } else {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    };

    format!("{}{}", sign, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_significant_suppresses_noise() {
        assert_eq!(round_significant(0.1 + 0.2, 12), 0.3);
        assert_eq!(round_significant(1.0 / 3.0, 12), 0.333333333333);
        assert_eq!(round_significant(123456789012345.0, 12), 123456789012000.0);
        assert_eq!(round_significant(0.0, 12), 0.0);
        assert!(round_significant(f64::NAN, 12).is_nan());
    }

    #[test]
    fn test_expand_positive_exponent() {
        assert_eq!(expand_exponent("1e21"), "1000000000000000000000");
        assert_eq!(expand_exponent("1.5e3"), "1500");
        assert_eq!(expand_exponent("1.2345e2"), "123.45");
        assert_eq!(expand_exponent("-2.5E+4"), "-25000");
    }

    #[test]
    fn test_expand_non_positive_exponent() {
        assert_eq!(expand_exponent("1.5e-7"), "0.00000015");
        assert_eq!(expand_exponent("1.5e-1"), "0.15");
        assert_eq!(expand_exponent("5e0"), "5");
        assert_eq!(expand_exponent("-3e-2"), "-0.03");
    }

    #[test]
    fn test_expand_without_exponent() {
        assert_eq!(expand_exponent("42.5"), "42.5");
        assert_eq!(expand_exponent("1eX"), "1eX");
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(to_plain_decimal(0.3), "0.3");
        assert_eq!(to_plain_decimal(1e21), "1000000000000000000000");
        assert_eq!(to_plain_decimal(-0.000001), "-0.000001");
        assert_eq!(to_plain_decimal(16.0), "16");
    }
}
