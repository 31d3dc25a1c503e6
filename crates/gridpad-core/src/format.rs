//! Display formatting for cell values.
//!
//! Numeric-looking values render as US-dollar amounts; everything else is
//! shown verbatim. Formatting is display-only and never fails.

use regex::Regex;
use std::sync::LazyLock;

/// Decimal number after `$` and `,` have been stripped.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

/// Format a raw cell value for display.
///
/// ```
/// use gridpad_core::format_cell;
///
/// assert_eq!(format_cell("1234.5"), "$1,234.50");
/// assert_eq!(format_cell("-100"), "-$100.00");
/// assert_eq!(format_cell("N/A"), "N/A");
/// ```
pub fn format_cell(raw: &str) -> String {
    if raw.trim().is_empty() {
        return raw.to_string();
    }
    match parse_amount(raw) {
        Some(value) => format_currency(value),
        None => raw.to_string(),
    }
}

/// Parse a numeric-looking value, ignoring currency symbols and separators.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let cleaned = cleaned.trim();
    if !NUMBER_RE.is_match(cleaned) {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Render `value` as `$1,234.56` / `-$1,234.56`.
///
/// Rounds half-up on the shortest decimal representation of `value`, so
/// `1.005` becomes `$1.01`.
fn format_currency(value: f64) -> String {
    // f64's Display is the shortest round-trip form and never uses exponents.
    let digits = value.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let (whole, cents) = round_to_cents(int_part, frac_part);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(&whole), cents)
}

fn round_to_cents(int_part: &str, frac_part: &str) -> (String, String) {
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_numbers_as_currency() {
        assert_eq!(format_cell("1000"), "$1,000.00");
        assert_eq!(format_cell("0"), "$0.00");
        assert_eq!(format_cell("999999"), "$999,999.00");
        assert_eq!(format_cell("1234567"), "$1,234,567.00");
    }

    #[test]
    fn formats_decimals_to_two_places() {
        assert_eq!(format_cell("1234.56"), "$1,234.56");
        assert_eq!(format_cell("10.5"), "$10.50");
        assert_eq!(format_cell("10.99"), "$10.99");
        assert_eq!(format_cell(".5"), "$0.50");
    }

    #[test]
    fn rounds_half_up_at_third_decimal() {
        assert_eq!(format_cell("10.999"), "$11.00");
        assert_eq!(format_cell("1.005"), "$1.01");
        assert_eq!(format_cell("2.674"), "$2.67");
        assert_eq!(format_cell("999.995"), "$1,000.00");
    }

    #[test]
    fn puts_minus_before_currency_symbol() {
        assert_eq!(format_cell("-100"), "-$100.00");
        assert_eq!(format_cell("-1234.56"), "-$1,234.56");
        assert_eq!(format_cell("$-5"), "-$5.00");
    }

    #[test]
    fn passes_through_non_numeric_values() {
        assert_eq!(format_cell("hello"), "hello");
        assert_eq!(format_cell("12abc"), "12abc");
        assert_eq!(format_cell("N/A"), "N/A");
        assert_eq!(format_cell("$"), "$");
        assert_eq!(format_cell("1.2.3"), "1.2.3");
        assert_eq!(format_cell("inf"), "inf");
        assert_eq!(format_cell("NaN"), "NaN");
    }

    #[test]
    fn radix_literals_are_not_amounts() {
        assert_eq!(format_cell("0x1A"), "0x1A");
        assert_eq!(format_cell("0b11"), "0b11");
        assert_eq!(format_cell("0o7"), "0o7");
        assert_eq!(parse_amount("0x1A"), None);
    }

    #[test]
    fn keeps_blank_values_untouched() {
        assert_eq!(format_cell(""), "");
        assert_eq!(format_cell("  "), "  ");
        assert_eq!(format_cell("\t"), "\t");
    }

    #[test]
    fn reformats_existing_currency() {
        assert_eq!(format_cell("$1,234.56"), "$1,234.56");
        assert_eq!(format_cell("$100"), "$100.00");
        assert_eq!(format_cell(" $ 42 "), "$42.00");
    }

    #[test]
    fn accepts_sign_and_exponent_forms() {
        assert_eq!(format_cell("+7"), "$7.00");
        assert_eq!(format_cell("1e3"), "$1,000.00");
        assert_eq!(format_cell("2.5E-1"), "$0.25");
    }

    #[test]
    fn formatting_is_idempotent_for_numeric_values() {
        for raw in [
            "0", "1", "-1", "10.999", "1.005", "1234.5", "-1234.567", "$1,000", "1e21", "0.001",
        ] {
            let once = format_cell(raw);
            assert_eq!(format_cell(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn parse_amount_ignores_symbols_and_separators() {
        assert_eq!(parse_amount("$1,234.50"), Some(1234.5));
        assert_eq!(parse_amount("1,2,3"), Some(123.0));
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount(""), None);
    }
}
