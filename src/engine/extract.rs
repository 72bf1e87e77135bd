//! Number-text extraction.
//!
//! Parses canonical decimal text into [`NumberParts`] and resolves any
//! scientific-notation exponent by shifting digits between the integral and
//! fractional parts. The accepted grammar, with SEP/DEC the configured
//! separator symbols:
//!
//! ```text
//! ["-"] (digit{1,3} (SEP digit{3})* | digit+) [DEC digit+] [("e"|"E") ["-"|"+"] digit+]
//! ```

use crate::api::ConversionOptions;
use crate::{ConversionError, NumberParts};

/// Exponents beyond this shift past even the long-scale ceiling (factor 100,
/// 10^603) and are rejected before any digit shifting takes place.
const MAX_EXPONENT: i32 = 620;

/// Parses `text` into resolved [`NumberParts`], or fails with
/// [`ConversionError::NotANumber`].
pub(crate) fn extract(text: &str, options: &ConversionOptions) -> Result<NumberParts, ConversionError> {
    let trimmed = text.trim();
    let not_a_number = || ConversionError::NotANumber(text.to_string());

    let sep = options.thousands_separator_symbol;
    let dec = options.decimal_separator_symbol;

    let mut chars = trimmed.chars().peekable();
    let mut negative = false;
    if chars.peek() == Some(&'-') {
        negative = true;
        chars.next();
    }

    // Integral digits, optionally in thousands groups.
    let mut integral = String::new();
    let mut group_lens: Vec<usize> = Vec::new();
    let mut run = 0usize;
    let mut grouped = false;
    loop {
        match chars.peek().copied() {
            Some(c) if c.is_ascii_digit() => {
                integral.push(c);
                run += 1;
                chars.next();
            }
            Some(c) if c == sep => {
                grouped = true;
                group_lens.push(run);
                run = 0;
                chars.next();
            }
            _ => break,
        }
    }
    if grouped {
        group_lens.push(run);
        let (first, rest) = group_lens.split_first().ok_or_else(not_a_number)?;
        if *first == 0 || *first > 3 || rest.iter().any(|&len| len != 3) {
            return Err(not_a_number());
        }
    }
    if integral.is_empty() {
        return Err(not_a_number());
    }

    // Fractional digits.
    let mut fractional = String::new();
    if chars.peek() == Some(&dec) {
        chars.next();
        while let Some(c) = chars.peek().copied() {
            if !c.is_ascii_digit() {
                break;
            }
            fractional.push(c);
            chars.next();
        }
        if fractional.is_empty() {
            return Err(not_a_number());
        }
    }

    // Exponent.
    let mut exponent = 0i32;
    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        let exponent_negative = match chars.peek() {
            Some('-') => {
                chars.next();
                true
            }
            Some('+') => {
                chars.next();
                false
            }
            _ => false,
        };
        let mut digits = String::new();
        while let Some(c) = chars.peek().copied() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            chars.next();
        }
        if digits.is_empty() {
            return Err(not_a_number());
        }
        exponent = digits
            .parse::<i32>()
            .map_err(|_| ConversionError::ExponentOutOfRange(text.to_string()))?;
        if exponent_negative {
            exponent = -exponent;
        }
        if exponent.abs() > MAX_EXPONENT {
            return Err(ConversionError::ExponentOutOfRange(text.to_string()));
        }
    }

    if chars.next().is_some() {
        return Err(not_a_number());
    }

    let mut parts = NumberParts { negative, integral, fractional, exponent };
    resolve_exponent(&mut parts);
    Ok(parts)
}

/// Shifts the decimal point per the exponent, zero-padding as needed, so the
/// returned parts are plain positional digits.
fn resolve_exponent(parts: &mut NumberParts) {
    if parts.exponent > 0 {
        let shift = parts.exponent as usize;
        let take = shift.min(parts.fractional.len());
        parts.integral.push_str(&parts.fractional[..take]);
        for _ in take..shift {
            parts.integral.push('0');
        }
        parts.fractional.drain(..take);
    } else if parts.exponent < 0 {
        let shift = parts.exponent.unsigned_abs() as usize;
        if shift >= parts.integral.len() {
            let mut fractional = "0".repeat(shift - parts.integral.len());
            fractional.push_str(&parts.integral);
            fractional.push_str(&parts.fractional);
            parts.integral.clear();
            parts.fractional = fractional;
        } else {
            let moved = parts.integral.split_off(parts.integral.len() - shift);
            parts.fractional.insert_str(0, &moved);
        }
    }
    parts.exponent = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ConversionOptions;

    fn english() -> ConversionOptions {
        ConversionOptions::default()
    }

    fn german() -> ConversionOptions {
        ConversionOptions {
            thousands_separator_symbol: '.',
            decimal_separator_symbol: ',',
            ..ConversionOptions::default()
        }
    }

    fn parts(text: &str, options: &ConversionOptions) -> NumberParts {
        extract(text, options).unwrap()
    }

    #[test]
    fn plain_and_grouped_integrals() {
        assert_eq!(parts("0", &english()).integral, "0");
        assert_eq!(parts("1000000", &english()).integral, "1000000");
        assert_eq!(parts("1,000,000", &english()).integral, "1000000");
        assert!(extract("1,00,000", &english()).is_err());
        assert!(extract("1,000,00", &english()).is_err());
        assert!(extract(",000", &english()).is_err());
        assert!(extract("1,0000", &english()).is_err());
    }

    #[test]
    fn sign_and_fraction() {
        let p = parts("-6.25", &english());
        assert!(p.negative);
        assert_eq!(p.integral, "6");
        assert_eq!(p.fractional, "25");

        assert!(extract("-", &english()).is_err());
        assert!(extract("0.333.333", &english()).is_err());
        assert!(extract("0.333 333", &english()).is_err());
        assert!(extract("1.", &english()).is_err());
    }

    #[test]
    fn german_separators() {
        assert_eq!(parts("1.000.000", &german()).integral, "1000000");
        assert!(extract("1.00.000", &german()).is_err());
        let p = parts("0,333333", &german());
        assert_eq!(p.fractional, "333333");
        assert!(extract("0,333,333", &german()).is_err());
    }

    #[test]
    fn exponent_resolution() {
        assert_eq!(parts("1e3", &english()).integral, "1000");
        let p = parts("1.23e6", &english());
        assert_eq!(p.integral, "1230000");
        assert_eq!(p.fractional, "");

        let p = parts("1.2345e2", &english());
        assert_eq!(p.integral, "123");
        assert_eq!(p.fractional, "45");

        let p = parts("-6.25e-2", &english());
        assert!(p.negative);
        assert_eq!(p.integral, "");
        assert_eq!(p.fractional, "0625");

        let p = parts("1e-3", &english());
        assert_eq!(p.integral, "");
        assert_eq!(p.fractional, "001");

        assert!(extract("1-e3", &english()).is_err());
        assert!(extract("1e", &english()).is_err());
        assert_eq!(
            extract("1e9999", &english()),
            Err(ConversionError::ExponentOutOfRange("1e9999".to_string()))
        );
    }
}
