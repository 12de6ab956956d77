//! Number parsing and locale-aware display formatting.

use crate::display::Language;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for prices and amounts in KD or fils
pub const FILS_DECIMALS: u32 = 3;

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const ARABIC_DECIMAL: char = '٫';
const ARABIC_GROUP: char = '٬';

/// Parse user input into a number, never failing.
///
/// Arabic-Indic digits and the Arabic decimal separator are accepted.
/// A comma is a thousands separator only when exactly three digits follow
/// it; any other comma ends the number, so `0,5` reads as 0. The longest
/// numeric prefix is used and empty or non-numeric text yields 0.
pub fn parse_input_number(raw: &str) -> f64 {
    let latin: Vec<char> = raw
        .trim()
        .chars()
        .map(|c| match ARABIC_DIGITS.iter().position(|d| *d == c) {
            Some(i) => char::from(b'0' + i as u8),
            None if c == ARABIC_DECIMAL => '.',
            None if c == ARABIC_GROUP => ',',
            None => c,
        })
        .collect();

    let mut normalized = String::with_capacity(latin.len());
    for (i, c) in latin.iter().enumerate() {
        if *c == ',' {
            if is_group_separator(&latin[i + 1..]) {
                continue;
            }
            break;
        }
        normalized.push(*c);
    }

    let prefix = numeric_prefix(&normalized);
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn is_group_separator(rest: &[char]) -> bool {
    rest.len() >= 3
        && rest[..3].iter().all(|c| c.is_ascii_digit())
        && !rest.get(3).is_some_and(|c| c.is_ascii_digit())
}

/// Parse input and clamp negatives to 0.
pub fn parse_non_negative(raw: &str) -> f64 {
    parse_input_number(raw).max(0.0)
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut digits = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return "";
    }

    // Optional exponent, only taken when complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end..].iter().take_while(|b| b.is_ascii_digit()).count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &s[..end]
}

/// Format with exactly `decimals` fraction digits, grouped thousands and
/// the digits of `language`. Non-finite values are shown as "0".
pub fn format_number(value: f64, language: Language, decimals: u32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    localize(&fixed(value, decimals), language)
}

/// Format a price or amount to fils precision
pub fn format_fils(value: f64, language: Language) -> String {
    format_number(value, language, FILS_DECIMALS)
}

/// Format with at most `max_decimals` fraction digits, dropping trailing zeros.
pub fn format_trimmed(value: f64, language: Language, max_decimals: u32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let s = fixed(value, max_decimals);
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    localize(trimmed, language)
}

/// Format a share count
pub fn format_shares(value: f64, language: Language) -> String {
    format_trimmed(value, language, FILS_DECIMALS)
}

/// Plain `-1234.500` rendering, rounded half away from zero.
fn fixed(value: f64, decimals: u32) -> String {
    match Decimal::from_f64(value) {
        Some(d) => {
            let mut rounded = d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            rounded.rescale(decimals);
            rounded.to_string()
        }
        // Beyond Decimal's range
        None => format!("{:.*}", decimals as usize, value),
    }
}

fn localize(plain: &str, language: Language) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let (group, decimal) = match language {
        Language::En => (',', '.'),
        Language::Ar => (ARABIC_GROUP, ARABIC_DECIMAL),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(group);
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push(decimal);
        out.push_str(frac);
    }

    match language {
        Language::En => out,
        Language::Ar => out.chars().map(to_arabic_digit).collect(),
    }
}

fn to_arabic_digit(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => ARABIC_DIGITS[d as usize],
        None => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_plain_numbers() {
        assert_eq!(parse_input_number("775"), 775.0);
        assert_eq!(parse_input_number(" 0.500 "), 0.5);
        assert_eq!(parse_input_number("-3"), -3.0);
        assert_eq!(parse_input_number("1e3"), 1000.0);
    }

    #[test]
    fn parse_coerces_garbage_to_zero() {
        assert_eq!(parse_input_number(""), 0.0);
        assert_eq!(parse_input_number("abc"), 0.0);
        assert_eq!(parse_input_number("."), 0.0);
        assert_eq!(parse_input_number("-"), 0.0);
    }

    #[test]
    fn parse_takes_numeric_prefix() {
        assert_eq!(parse_input_number("12fils"), 12.0);
        assert_eq!(parse_input_number("1.5.2"), 1.5);
        assert_eq!(parse_input_number("2e"), 2.0);
    }

    #[test]
    fn parse_arabic_digits_and_separators() {
        assert_eq!(parse_input_number("٧٧٥"), 775.0);
        assert_eq!(parse_input_number("٠٫٥"), 0.5);
        assert_eq!(parse_input_number("١٠٠٬٠٠٠"), 100_000.0);
        assert_eq!(parse_input_number("100,000"), 100_000.0);
        assert_eq!(parse_input_number("1,000,000.5"), 1_000_000.5);
    }

    #[test]
    fn parse_stops_at_decimal_comma() {
        assert_eq!(parse_input_number("0,5"), 0.0);
        assert_eq!(parse_input_number("12,50"), 12.0);
        assert_eq!(parse_input_number("1,0000"), 1.0);
        assert_eq!(parse_input_number("٠٬٥"), 0.0);
    }

    #[test]
    fn parse_non_negative_clamps() {
        assert_eq!(parse_non_negative("-5"), 0.0);
        assert_eq!(parse_non_negative("5"), 5.0);
    }

    #[test]
    fn format_english() {
        assert_eq!(format_fils(717.5925925925925, Language::En), "717.593");
        assert_eq!(format_fils(1200.0, Language::En), "1,200.000");
        assert_eq!(format_number(1_200_000.0, Language::En, 0), "1,200,000");
        assert_eq!(format_fils(0.0005, Language::En), "0.001");
        assert_eq!(format_fils(-1234.5, Language::En), "-1,234.500");
    }

    #[test]
    fn format_arabic() {
        assert_eq!(format_fils(717.5925925925925, Language::Ar), "٧١٧٫٥٩٣");
        assert_eq!(format_number(108_000.0, Language::Ar, 0), "١٠٨٬٠٠٠");
    }

    #[test]
    fn format_non_finite_as_zero() {
        assert_eq!(format_fils(f64::INFINITY, Language::En), "0");
        assert_eq!(format_fils(f64::NAN, Language::Ar), "0");
        assert_eq!(format_shares(f64::NEG_INFINITY, Language::En), "0");
    }

    #[test]
    fn format_negative_zero_without_sign() {
        assert_eq!(format_fils(-0.0001, Language::En), "0.000");
    }

    #[test]
    fn format_shares_trims_zeros() {
        assert_eq!(format_shares(8000.0, Language::En), "8,000");
        assert_eq!(format_shares(12.5, Language::En), "12.5");
        assert_eq!(format_trimmed(8.0, Language::Ar, 2), "٨");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let half = dec!(2.0005);
        assert_eq!(
            half.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero),
            dec!(2.001)
        );
        assert_eq!(format_number(2.5, Language::En, 0), "3");
    }
}
