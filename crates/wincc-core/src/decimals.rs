use wincc_model::{ConversionError, Result};

/// Map a decimal-places count to a WinCC display format code.
///
/// The value is parsed as a number and truncated; counts outside 0..=3
/// fall back to `s9999999`.
pub fn decimal_format(decimals: &str) -> Result<&'static str> {
    let parsed: f64 = decimals
        .trim()
        .parse()
        .map_err(|_| invalid(decimals))?;
    if !parsed.is_finite() {
        return Err(invalid(decimals));
    }
    let format = match parsed.trunc() as i64 {
        0 => "s999999",
        1 => "s999999.9",
        2 => "s999999.99",
        3 => "s999999.999",
        _ => "s9999999",
    };
    Ok(format)
}

fn invalid(value: &str) -> ConversionError {
    ConversionError::InvalidFormat {
        tag: None,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_counts() {
        assert_eq!(decimal_format("0").unwrap(), "s999999");
        assert_eq!(decimal_format("1").unwrap(), "s999999.9");
        assert_eq!(decimal_format("2").unwrap(), "s999999.99");
        assert_eq!(decimal_format("3").unwrap(), "s999999.999");
        assert_eq!(decimal_format("7").unwrap(), "s9999999");
    }

    #[test]
    fn truncates_fractional_counts() {
        assert_eq!(decimal_format("2.0").unwrap(), "s999999.99");
        assert_eq!(decimal_format("1.9").unwrap(), "s999999.9");
        assert_eq!(decimal_format("-0.5").unwrap(), "s999999");
        assert_eq!(decimal_format("-1").unwrap(), "s9999999");
    }

    #[test]
    fn rejects_non_numeric() {
        for value in ["", "two", "nan", "inf"] {
            assert!(
                matches!(
                    decimal_format(value),
                    Err(ConversionError::InvalidFormat { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }
}
