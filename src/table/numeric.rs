//! Locale-aware numeric coercion
//!
//! Source tables write decimals with a comma, leave cells blank, or mark
//! trace amounts with "tr". A cell that still fails to parse coerces to 0.0
//! instead of aborting the table build; one malformed row must not lose the
//! other few thousand.

/// Sentinels meaning "no measurable value" in the source tables
const NO_VALUE_SENTINELS: [&str; 2] = ["-", "tr"];

/// Coerce one raw macro cell to a non-negative finite f64.
///
/// Lossy by policy: unparseable and negative values become 0.0 with a debug
/// log, never an error.
pub fn coerce_macro_value(raw: &str) -> f64 {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return 0.0;
    }
    let lower = trimmed.to_lowercase();
    if NO_VALUE_SENTINELS.contains(&lower.as_str()) {
        return 0.0;
    }

    // Decimal comma -> decimal point
    let rewritten = trimmed.replace(',', ".");

    match rewritten.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        Ok(v) => {
            tracing::debug!("macro cell '{}' parsed to out-of-range {}, defaulting to 0.0", raw, v);
            0.0
        }
        Err(_) => {
            tracing::debug!("macro cell '{}' is not numeric, defaulting to 0.0", raw);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_point_and_comma_agree() {
        assert_eq!(coerce_macro_value("2.7"), 2.7);
        assert_eq!(coerce_macro_value("2,7"), 2.7);
        assert_eq!(coerce_macro_value("130"), 130.0);
    }

    #[test]
    fn test_whitespace_stripped() {
        assert_eq!(coerce_macro_value("  28,1  "), 28.1);
    }

    #[test]
    fn test_no_value_sentinels() {
        assert_eq!(coerce_macro_value(""), 0.0);
        assert_eq!(coerce_macro_value("   "), 0.0);
        assert_eq!(coerce_macro_value("-"), 0.0);
        assert_eq!(coerce_macro_value("tr"), 0.0);
        assert_eq!(coerce_macro_value("Tr"), 0.0);
        assert_eq!(coerce_macro_value("TR"), 0.0);
    }

    #[test]
    fn test_garbage_defaults_to_zero() {
        assert_eq!(coerce_macro_value("n/a"), 0.0);
        assert_eq!(coerce_macro_value("12,3,4"), 0.0);
        assert_eq!(coerce_macro_value("abc"), 0.0);
    }

    #[test]
    fn test_negative_and_non_finite_default_to_zero() {
        assert_eq!(coerce_macro_value("-5,0"), 0.0);
        assert_eq!(coerce_macro_value("inf"), 0.0);
        assert_eq!(coerce_macro_value("NaN"), 0.0);
    }
}
