//! Numeral generation, the inverse of `to_number`.
//!
//! Integral digits are walked right to left in windows of three. Each
//! non-zero window emits its base words (irregular teen forms take priority,
//! tens-ones pairs hyphenate) followed by the scale word for its decimal
//! place; fully-zero windows emit nothing. Fractional digits are spelled out
//! one word per digit after "point".

use crate::ConversionError;
use crate::api::{ConversionOptions, NamingSystem};

use super::latin::{self, ScaleSuffix};
use super::{extract, format, lexicon};

/// Converts canonical number text into numeral text. Malformed number text
/// fails with the extractor's error.
pub(crate) fn to_numeral(number: &str, options: &ConversionOptions) -> Result<String, ConversionError> {
    let parts = extract::extract(number, options)?;
    let integral = format::trim_leading_zeros(&parts.integral);

    let mut words: Vec<String> = Vec::new();
    if parts.negative && !parts.is_zero() {
        words.push("negative".to_string());
    }

    if integral.is_empty() {
        if parts.fractional.is_empty() || options.force_leading_zero {
            words.push("zero".to_string());
        }
    } else {
        integral_words(integral, options.naming_system, &mut words)?;
    }

    if !parts.fractional.is_empty() {
        words.push("point".to_string());
        for byte in parts.fractional.bytes() {
            words.push(lexicon::digit_word(byte).to_string());
        }
    }

    Ok(words.join(" "))
}

/// Emits the words for a non-empty integral digit string.
fn integral_words(
    digits: &str,
    naming_system: NamingSystem,
    out: &mut Vec<String>,
) -> Result<(), ConversionError> {
    let group_count = digits.len().div_ceil(3);
    for group_index in (0..group_count).rev() {
        let end = digits.len() - group_index * 3;
        let start = end.saturating_sub(3);
        let value = digits[start..end].bytes().fold(0u16, |v, b| v * 10 + u16::from(b - b'0'));
        if value == 0 {
            continue;
        }
        group_words(value, out);
        if let Some(scale) = scale_word(group_index, naming_system)? {
            out.push(scale);
        }
    }
    Ok(())
}

/// Base words for one 0..=999 window: hundreds, then the irregular-form
/// tens/ones pair.
fn group_words(value: u16, out: &mut Vec<String>) {
    let hundreds = value / 100;
    let rest = value % 100;
    if hundreds > 0 {
        out.push(lexicon::base_word(hundreds).to_string());
        out.push("hundred".to_string());
    }
    if rest == 0 {
        return;
    }
    if rest < 20 {
        // Covers the literal teen words, which take priority over any
        // tens + ones composition.
        out.push(lexicon::base_word(rest).to_string());
        return;
    }
    let tens = rest - rest % 10;
    let ones = rest % 10;
    if ones == 0 {
        out.push(lexicon::base_word(tens).to_string());
    } else {
        out.push(format!("{}-{}", lexicon::base_word(tens), lexicon::base_word(ones)));
    }
}

/// Scale word for the window at `group_index` (0 = ones). Place 3 is always
/// "thousand"; places >= 6 synthesize the Latin-root word for the naming
/// system in use.
fn scale_word(
    group_index: usize,
    naming_system: NamingSystem,
) -> Result<Option<String>, ConversionError> {
    match group_index {
        0 => Ok(None),
        1 => Ok(Some("thousand".to_string())),
        _ => {
            let place = 3 * group_index as u32;
            let word = match naming_system {
                NamingSystem::ShortScale => {
                    latin::scale_word_for_factor((place - 3) / 3, ScaleSuffix::Illion)?
                }
                NamingSystem::LongScale => {
                    if place % 6 == 0 {
                        latin::scale_word_for_factor(place / 6, ScaleSuffix::Illion)?
                    } else {
                        latin::scale_word_for_factor((place - 3) / 6, ScaleSuffix::Illiard)?
                    }
                }
            };
            Ok(Some(word))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ConversionOptions;

    fn numeral(number: &str) -> Result<String, ConversionError> {
        to_numeral(number, &ConversionOptions::default())
    }

    #[test]
    fn irregular_forms() {
        assert_eq!(numeral("0").unwrap(), "zero");
        assert_eq!(numeral("13").unwrap(), "thirteen");
        assert_eq!(numeral("20").unwrap(), "twenty");
        assert_eq!(numeral("21").unwrap(), "twenty-one");
        assert_eq!(numeral("44").unwrap(), "forty-four");
        assert_eq!(numeral("110").unwrap(), "one hundred ten");
        assert_eq!(numeral("999").unwrap(), "nine hundred ninety-nine");
    }

    #[test]
    fn zero_groups_are_silent() {
        assert_eq!(numeral("1,000,011").unwrap(), "one million eleven");
        assert_eq!(numeral("704,083,011").unwrap(), "seven hundred four million eighty-three thousand eleven");
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(numeral("0033").unwrap(), "thirty-three");
    }

    #[test]
    fn negative_and_zero_sign() {
        assert_eq!(numeral("-56").unwrap(), "negative fifty-six");
        assert_eq!(numeral("-0").unwrap(), "zero");
    }

    #[test]
    fn fractional_leading_zero_policy() {
        let default = ConversionOptions::default();
        assert_eq!(to_numeral("0.0625", &default).unwrap(), "zero point zero six two five");

        let bare = ConversionOptions { force_leading_zero: false, ..default };
        assert_eq!(to_numeral("0.0625", &bare).unwrap(), "point zero six two five");
        assert_eq!(to_numeral("3.1415926", &bare).unwrap(), "three point one four one five nine two six");
    }

    #[test]
    fn long_scale_places() {
        let long = ConversionOptions { naming_system: NamingSystem::LongScale, ..Default::default() };
        assert_eq!(to_numeral("1,000,000,000", &long).unwrap(), "one milliard");
        assert_eq!(to_numeral("1,000,000,000,000", &long).unwrap(), "one billion");
    }

    #[test]
    fn capacity_ceiling() {
        // 10^306 needs the 101st "-illion" under short scale.
        let too_big = format!("1{}", "0".repeat(306));
        assert!(matches!(
            numeral(&too_big),
            Err(ConversionError::FactorBeyondCentillion(101))
        ));
    }
}
