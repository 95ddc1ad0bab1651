//! Numeric formatting shared by both generators.
//!
//! Controller parsers are strict about numeric literals: Heidenhain rejects
//! superfluous trailing zeros and Fanuc expects integral spindle speeds, so
//! every number embedded in generated text goes through [`format_number`].

/// Format a value for embedding in generated program text.
///
/// Integral values render without a decimal point (`1000.0` -> `"1000"`);
/// fractional values render with up to 6 decimal digits, trimming trailing
/// zeros and a trailing point (`0.100000` -> `"0.1"`). Zero always renders
/// as `"0"`, never as an empty string.
pub fn format_number(value: f64) -> String {
    if value == value.trunc() {
        // {:.0} renders any integral f64 exactly; an i64 cast would
        // saturate above 2^63. Normalize -0.0 first.
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{:.0}", value);
    }
    let rounded = format!("{:.6}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values() {
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-300.0), "-300");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_huge_integral_values_render_exactly() {
        // Above i64::MAX a cast would saturate; distinct magnitudes must
        // stay distinct
        assert_eq!(format_number(1e19), "10000000000000000000");
        assert_eq!(format_number(2e19), "20000000000000000000");
        assert_eq!(format_number(-1e19), "-10000000000000000000");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-50.25), "-50.25");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_rounds_to_six_decimals_and_trims() {
        assert_eq!(format_number(1.2300001), "1.23");
        assert_eq!(format_number(1.9999999), "2");
        assert_eq!(format_number(0.1234567), "0.123457");
    }

    #[test]
    fn test_round_trips_at_six_decimal_precision() {
        for value in [0.1, 76.2, 123.456, -3.000004, 5080.0] {
            let parsed: f64 = format_number(value).parse().unwrap();
            assert_eq!(parsed, (value * 1e6).round() / 1e6);
        }
    }
}
