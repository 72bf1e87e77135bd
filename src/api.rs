use crate::ConversionError;
use crate::engine;

/// Numeral naming systems.
///
/// Under the short scale an "-illion" of factor *f* denotes 10^(3f+3)
/// (billion = 10^9); under the long scale it denotes 10^(6f) and the
/// additional "-illiard" of factor *f* denotes 10^(6f+3) (billion = 10^12,
/// milliard = 10^9).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingSystem {
    #[default]
    ShortScale,
    LongScale,
}

/// Options used to guide conversion between numbers and numerals.
///
/// Immutable per conversion call; every entry point takes them by shared
/// reference and nothing mutates state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub naming_system: NamingSystem,
    /// Reserved for number output; accepted but currently inert.
    pub use_scientific_notation: bool,
    /// Whether number output groups the integral part in thousands.
    pub use_thousands_separators: bool,
    /// Whether a purely fractional number gets a leading "zero"/"0".
    pub force_leading_zero: bool,
    pub thousands_separator_symbol: char,
    pub decimal_separator_symbol: char,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            naming_system: NamingSystem::ShortScale,
            use_scientific_notation: false,
            use_thousands_separators: true,
            force_leading_zero: true,
            thousands_separator_symbol: ',',
            decimal_separator_symbol: '.',
        }
    }
}

impl ConversionOptions {
    /// Checks that the separator symbols differ and neither collides with
    /// the digit, sign or exponent characters of the number grammar.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.thousands_separator_symbol == self.decimal_separator_symbol {
            return Err(ConversionError::SeparatorClash(self.decimal_separator_symbol));
        }
        for symbol in [self.thousands_separator_symbol, self.decimal_separator_symbol] {
            if symbol.is_ascii_digit() || matches!(symbol, '-' | '+' | 'e' | 'E') {
                return Err(ConversionError::InvalidSeparator(symbol));
            }
        }
        Ok(())
    }
}

/// True iff `text` matches the canonical number grammar under `options`.
///
/// # Example
/// ```
/// use numerus::{ConversionOptions, is_number};
///
/// let options = ConversionOptions::default();
/// assert!(is_number("1,000", &options));
/// assert!(is_number("-6.25e-2", &options));
/// assert!(!is_number("1,00,000", &options));
/// ```
pub fn is_number(text: &str, options: &ConversionOptions) -> bool {
    options.validate().is_ok() && engine::extract::extract(text, options).is_ok()
}

/// True iff `text` has the loose lexical shape of a numeral: one or more
/// alphabetic or digit tokens joined by spaces or hyphens.
///
/// This is a cheap pre-filter; the full grammar is validated by
/// [`to_number`].
pub fn is_numeral(text: &str) -> bool {
    regex!(r"^[A-Za-z0-9]+(?:[\s-]+[A-Za-z0-9]+)*$").is_match(text.trim())
}

/// Converts numeral text into canonical number text.
///
/// # Example
/// ```
/// use numerus::{ConversionOptions, to_number};
///
/// let options = ConversionOptions::default();
/// assert_eq!(to_number("nineteen hundred", &options).unwrap(), "1,900");
/// assert_eq!(to_number("a hundred", &options).unwrap(), "100");
/// ```
///
/// # Errors
/// Fails with a [`ConversionError`] on any lexical or grammar violation;
/// no partial number is ever returned.
pub fn to_number(numeral: &str, options: &ConversionOptions) -> Result<String, ConversionError> {
    options.validate()?;
    engine::to_number::to_number(numeral, options)
}

/// Converts canonical number text into numeral text.
///
/// # Example
/// ```
/// use numerus::{ConversionOptions, to_numeral};
///
/// let options = ConversionOptions::default();
/// assert_eq!(to_numeral("1.23e6", &options).unwrap(), "one million two hundred thirty thousand");
/// ```
///
/// # Errors
/// Fails with a [`ConversionError`] when the input is not a number or its
/// magnitude is beyond centillion.
pub fn to_numeral(number: &str, options: &ConversionOptions) -> Result<String, ConversionError> {
    options.validate()?;
    engine::to_numeral::to_numeral(number, options)
}

/// Converts in whichever direction fits: numbers become numerals, anything
/// else is treated as a numeral and becomes a number.
///
/// # Example
/// ```
/// use numerus::{ConversionOptions, convert};
///
/// let options = ConversionOptions::default();
/// assert_eq!(convert("704,083,011", &options).unwrap(),
///            "seven hundred four million eighty-three thousand eleven");
/// assert_eq!(convert("twelve thousand", &options).unwrap(), "12,000");
/// ```
pub fn convert(text: &str, options: &ConversionOptions) -> Result<String, ConversionError> {
    options.validate()?;
    if engine::extract::extract(text, options).is_ok() {
        engine::to_numeral::to_numeral(text, options)
    } else {
        engine::to_number::to_number(text, options)
    }
}
