//! Number-text formatting: separator insertion and final rendering.

use crate::api::ConversionOptions;

/// Inserts `separator` between thousands groups, right to left.
pub(crate) fn insert_separators(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Strips leading zeros; an all-zero string becomes empty.
pub(crate) fn trim_leading_zeros(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

/// Renders sign, integral and fractional digits as canonical number text.
///
/// An empty or all-zero integral part always renders a single leading "0";
/// the sign is dropped when every digit is zero.
pub(crate) fn render_number(
    negative: bool,
    integral: &str,
    fractional: &str,
    options: &ConversionOptions,
) -> String {
    let trimmed = trim_leading_zeros(integral);
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
    let nonzero = trimmed != "0" || fractional.bytes().any(|b| b != b'0');

    let mut out = String::new();
    if negative && nonzero {
        out.push('-');
    }
    if options.use_thousands_separators {
        out.push_str(&insert_separators(trimmed, options.thousands_separator_symbol));
    } else {
        out.push_str(trimmed);
    }
    if !fractional.is_empty() {
        out.push(options.decimal_separator_symbol);
        out.push_str(fractional);
    }
    out
}
