//! Price formatting service.
//!
//! Renders prices the way the store front displays them: zero decimal
//! digits, Danish thousands grouping, and a trailing currency suffix
//! (`1.234 kr`). An absent or non-finite value is a valid, displayable
//! state and formats as the empty string.

use crate::constants::CURRENCY_SUFFIX;

/// Formats a price for display.
///
/// Returns the empty string for `None`, NaN, and infinities; otherwise the
/// value is rounded half-away-from-zero to whole units, grouped in
/// thousands with `.`, and suffixed with the currency.
///
/// # Examples
///
/// ```
/// use butik::services::price::format_price;
///
/// assert_eq!(format_price(Some(1234.56)), "1.235 kr");
/// assert_eq!(format_price(None), "");
/// ```
#[must_use]
pub fn format_price(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if !value.is_finite() {
        return String::new();
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    // Catalog prices fit comfortably in i128; absurd magnitudes saturate.
    let magnitude = rounded.abs() as i128;

    format!("{sign}{}{CURRENCY_SUFFIX}", group_thousands(magnitude))
}

/// Groups a non-negative integer in blocks of three with `.` separators.
fn group_thousands(mut value: i128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut blocks = Vec::new();
    while value > 0 {
        blocks.push((value % 1000) as u16);
        value /= 1000;
    }

    let mut out = String::new();
    for (i, block) in blocks.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&block.to_string());
        } else {
            out.push_str(&format!(".{block:03}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_price_formats_empty() {
        assert_eq!(format_price(None), "");
    }

    #[test]
    fn test_non_finite_formats_empty() {
        assert_eq!(format_price(Some(f64::NAN)), "");
        assert_eq!(format_price(Some(f64::INFINITY)), "");
        assert_eq!(format_price(Some(f64::NEG_INFINITY)), "");
    }

    #[test]
    fn test_small_values_have_no_grouping() {
        assert_eq!(format_price(Some(0.0)), "0 kr");
        assert_eq!(format_price(Some(9.0)), "9 kr");
        assert_eq!(format_price(Some(999.0)), "999 kr");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_price(Some(1000.0)), "1.000 kr");
        assert_eq!(format_price(Some(1234.0)), "1.234 kr");
        assert_eq!(format_price(Some(1_234_567.0)), "1.234.567 kr");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_price(Some(129.5)), "130 kr");
        assert_eq!(format_price(Some(129.49)), "129 kr");
        assert_eq!(format_price(Some(-129.5)), "-130 kr");
    }

    #[test]
    fn test_interior_blocks_are_zero_padded() {
        assert_eq!(format_price(Some(1_002_003.0)), "1.002.003 kr");
        assert_eq!(format_price(Some(10_000.0)), "10.000 kr");
    }

    #[test]
    fn test_finite_output_ends_with_suffix_without_decimals() {
        for value in [0.01, 12.34, 999.99, 12345.67] {
            let formatted = format_price(Some(value));
            assert!(formatted.ends_with(" kr"), "missing suffix: {formatted}");
            assert!(!formatted.contains(','), "decimal separator: {formatted}");
        }
    }
}
