//! Format - Number and Price Formatting

use crate::constants::CURRENCY_SYMBOL;

/// Insert thousands separators into a run of ASCII digits
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format a number with thousands separators and at most two decimals
///
/// Trailing zero decimals are dropped: `1234567.5` renders as `1,234,567.5`
/// and `50.0` as `50`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut result = String::new();
    if value < 0.0 && fixed != "0.00" {
        result.push('-');
    }
    result.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }
    result
}

/// Format an integer count with thousands separators
pub fn format_count(n: i64) -> String {
    format_grouped(n as f64)
}

/// Format a price with the currency symbol
pub fn format_price(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_grouped(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1234567.0), "1,234,567");
    }

    #[test]
    fn keeps_up_to_two_decimals() {
        assert_eq!(format_grouped(1234567.5), "1,234,567.5");
        assert_eq!(format_grouped(19.999), "20");
        assert_eq!(format_grouped(0.25), "0.25");
    }

    #[test]
    fn negative_values() {
        assert_eq!(format_grouped(-1500.0), "-1,500");
        assert_eq!(format_grouped(-0.001), "0");
    }

    #[test]
    fn price_and_count() {
        assert_eq!(format_price(50.0), "₹50");
        assert_eq!(format_price(3499.0), "₹3,499");
        assert_eq!(format_count(12000), "12,000");
    }
}
