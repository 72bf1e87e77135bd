//! Bidirectional conversion between canonical decimal number text (like
//! `-1,234.56e3`) and English numeral text (like `negative one million two
//! hundred thirty-four thousand five hundred sixty`), under a configurable
//! naming system (short scale or long scale) and configurable formatting.
//!
//! The public surface is [`is_number`], [`is_numeral`], [`to_number`],
//! [`to_numeral`] and [`convert`], all driven by [`ConversionOptions`].

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;

pub use api::{ConversionOptions, NamingSystem, convert, is_number, is_numeral, to_number, to_numeral};
pub use error::ConversionError;

// --- Internal types ---------------------------------------------------------

/// Sign, digit strings and exponent extracted from canonical number text.
///
/// The extractor resolves any scientific-notation exponent by shifting digits
/// between the integral and fractional parts, so downstream code always sees
/// `exponent == 0`. Both digit strings hold `0`-`9` only; at least one of
/// them is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumberParts {
    pub negative: bool,
    pub integral: String,
    pub fractional: String,
    pub exponent: i32,
}

impl NumberParts {
    /// True if every digit in both parts is zero.
    pub fn is_zero(&self) -> bool {
        self.integral.bytes().chain(self.fractional.bytes()).all(|b| b == b'0')
    }
}

/// Classification of a single numeral term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TermKind {
    /// A base word or digit literal contributing a value in `0..=999`.
    Additive(u16),
    /// A scale word contributing a power-of-ten shift (hundred = 2,
    /// thousand = 3, myriad = 4, -illion/-illiard per the Latin resolver).
    Multiplicative(u32),
}

/// Accumulator for one magnitude band of a numeral.
///
/// `fragment` holds the digits contributed so far (including any folded-in
/// "hundred" multiplication), `power` the zeros appended by scale words of
/// shift >= 3, and `text` the source terms for error messages. Groups are
/// created and consumed entirely within one `to_number` call.
#[derive(Debug, Clone)]
pub(crate) struct Group {
    pub fragment: u64,
    pub power: u32,
    pub last_shift: Option<u32>,
    pub text: String,
}

impl Group {
    pub fn new() -> Self {
        Group { fragment: 0, power: 0, last_shift: None, text: String::new() }
    }

    /// True if no term has contributed to this group yet.
    pub fn is_untouched(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push_text(&mut self, term: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(term);
    }
}
