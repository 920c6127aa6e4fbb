//! Restaurant Menu Business Logic Helpers
//!
//! This module contains helper functions for price handling and formatting.

use super::models::Dish;

/// Parses user-entered price text.
///
/// Like a form's number field, only the leading decimal literal counts:
/// `"12abc"` reads as `12`. Returns `None` when there is no leading number,
/// or when it is negative or not finite.
pub fn parse_price(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let literal = &text[..leading_decimal_len(text)];
    if literal.is_empty() {
        return None;
    }

    let value = literal.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value)
}

/// Byte length of the longest decimal literal (sign, digits, fraction,
/// exponent) at the start of `text`; 0 when it does not start with one.
fn leading_decimal_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    end
}

/// Formats a price with exactly two fractional digits, e.g. `9.5` -> `"9.50"`.
///
/// Rounds with [`round_to_cents`], so `0.125` becomes `"0.13"`.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

/// Rounds to whole cents, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Produces a human-readable summary of a menu, one dish per line.
///
/// Example output: `"Main: Soup - R9.50"`.
pub fn format_menu_summary(dishes: &[Dish]) -> String {
    dishes
        .iter()
        .map(|d| format!("{}: {} - R{}", d.course_type, d.dish_name, d.dish_price))
        .collect::<Vec<_>>()
        .join("\n")
}
