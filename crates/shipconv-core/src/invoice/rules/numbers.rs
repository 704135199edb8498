//! Numeric cleaning and rendering for prices, amounts and weights.

use super::patterns::NON_NUMERIC;
use crate::error::ConvertError;

/// Strip everything except ASCII digits and periods ("$1,234.50" -> "1234.50").
pub fn clean_numeric(value: &str) -> String {
    NON_NUMERIC.replace_all(value, "").into_owned()
}

/// Parse a cleaned decimal string, naming the field on failure.
pub fn parse_decimal(field: &str, value: &str) -> Result<f64, ConvertError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConvertError::parse(field, value))
}

/// Render a value with its fractional part discarded (300.75 -> "300").
pub fn format_truncated(value: f64) -> String {
    format!("{:.0}", value.trunc())
}

/// Render a float as a shortest round-trip decimal.
///
/// Integral values keep a ".0" suffix and magnitudes outside `[1e-4, 1e16)`
/// switch to exponent form with a signed, two-digit exponent (`1e+16`).
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => formatted,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_numeric() {
        assert_eq!(clean_numeric("$1,234.50"), "1234.50");
        assert_eq!(clean_numeric("USD 30.00"), "30.00");
        assert_eq!(clean_numeric("N/A"), "");
        assert_eq!(clean_numeric("12.5 (FOC)"), "12.5");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("amount", "100.50").unwrap(), 100.5);
        assert_eq!(parse_decimal("amount", "7.").unwrap(), 7.0);
        assert_eq!(parse_decimal("amount", ".5").unwrap(), 0.5);

        let err = parse_decimal("amount", "1.2.3").unwrap_err();
        assert_eq!(err, ConvertError::parse("amount", "1.2.3"));
        assert!(parse_decimal("amount", ".").is_err());
    }

    #[test]
    fn test_format_truncated() {
        assert_eq!(format_truncated(300.75), "300");
        assert_eq!(format_truncated(0.0), "0");
        assert_eq!(format_truncated(99.999), "99");
        assert_eq!(format_truncated(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(30.0), "30.0");
        assert_eq!(format_float(12.5), "12.5");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
    }
}
