//! Loose numeric coercion for spreadsheet exports.
//!
//! Values failing coercion become [`None`] rather than an error.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a float, accepting a comma as the decimal separator when there is no dot.
#[must_use]
pub fn parse_f64(text: &str) -> Option<f64> {
    parse_with(text).filter(|value: &f64| value.is_finite())
}

#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| parse_with(text))
}

fn parse_with<T: FromStr>(text: &str) -> Option<T> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(value) = text.parse() {
        return Some(value);
    }
    if text.contains(',') && !text.contains('.') {
        return text.replace(',', ".").parse().ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_ok() {
        assert_eq!(parse_f64("12000"), Some(12000.0));
        assert_eq!(parse_f64(" 9000.0 "), Some(9000.0));
        assert_eq!(parse_f64("550,5"), Some(550.5));
    }

    #[test]
    fn test_parse_f64_missing() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("   "), None);
        assert_eq!(parse_f64("12.000,5"), None);
        assert_eq!(parse_f64("N/A"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0.656"), Some(Decimal::new(656, 3)));
        assert_eq!(parse_decimal("0,656"), Some(Decimal::new(656, 3)));
        assert_eq!(parse_decimal("abc"), None);
    }
}
