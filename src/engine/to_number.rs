//! Numeral tokenization, grammar validation and group merging.
//!
//! A numeral is a stream of terms, split on whitespace and hyphens. Each
//! term is classified as additive (a base word or a <= 3-digit literal) or
//! multiplicative (hundred/thousand/myriad or an "-illion"/"-illiard" scale
//! word). Additive values merge into the current magnitude group by place
//! value; scale words of shift >= 3 mark group boundaries. Closed groups
//! must descend strictly in magnitude and finally merge into one digit
//! string, again by place value.

use crate::api::{ConversionOptions, NamingSystem};
use crate::{ConversionError, Group, TermKind};

use super::{format, latin, lexicon};

/// Converts numeral text into canonical number text.
pub(crate) fn to_number(numeral: &str, options: &ConversionOptions) -> Result<String, ConversionError> {
    let lowered = numeral.to_lowercase();
    let mut terms = tokenize(&lowered)?;
    if terms.is_empty() {
        return Err(ConversionError::EmptyNumeral);
    }

    let mut negative = false;
    if terms[0] == "negative" || terms[0] == "minus" {
        negative = true;
        terms.remove(0);
    }

    let (integral_terms, fraction_terms) = match terms.iter().position(|&t| t == "point") {
        Some(index) => (&terms[..index], Some(&terms[index + 1..])),
        None => (&terms[..], None),
    };

    let integral = parse_integral(integral_terms, options.naming_system)?;
    let fractional = match fraction_terms {
        Some(terms) => parse_fraction(terms)?,
        None => String::new(),
    };

    if integral.is_empty() && fractional.is_empty() {
        return Err(ConversionError::EmptyNumeral);
    }

    Ok(format::render_number(negative, &integral, &fractional, options))
}

/// Splits on whitespace and hyphens; every term must be one alphabetic or
/// one digit run.
fn tokenize(text: &str) -> Result<Vec<&str>, ConversionError> {
    let mut terms = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c == '-') {
        if token.is_empty() {
            continue;
        }
        let alphabetic = token.chars().all(|c| c.is_ascii_alphabetic());
        let numeric = token.chars().all(|c| c.is_ascii_digit());
        if !alphabetic && !numeric {
            return Err(ConversionError::InvalidTerm(token.to_string()));
        }
        terms.push(token);
    }
    Ok(terms)
}

/// Classifies one term. Both interpretations are attempted independently;
/// terms shaped like scale words surface the Latin resolver's specific
/// error, every other unknown term surfaces the additive-lookup error.
fn classify(term: &str, naming_system: NamingSystem) -> Result<TermKind, ConversionError> {
    match additive_value(term) {
        Ok(value) => Ok(TermKind::Additive(value)),
        Err(additive_error) => match multiplicative_shift(term, naming_system)? {
            Some(shift) => Ok(TermKind::Multiplicative(shift)),
            None => Err(additive_error),
        },
    }
}

fn additive_value(term: &str) -> Result<u16, ConversionError> {
    if let Some(&value) = lexicon::WORD_TO_VALUE.get(term) {
        return Ok(value);
    }
    if term.len() <= 3 && term.chars().all(|c| c.is_ascii_digit()) {
        return term.parse::<u16>().map_err(|_| ConversionError::InvalidTerm(term.to_string()));
    }
    Err(ConversionError::InvalidTerm(term.to_string()))
}

fn multiplicative_shift(
    term: &str,
    naming_system: NamingSystem,
) -> Result<Option<u32>, ConversionError> {
    if let Some(&shift) = lexicon::MULTIPLIER_SHIFTS.get(term) {
        return Ok(Some(shift));
    }
    latin::scale_word_power(term, naming_system)
}

/// Runs the term state machine and merges the closed groups into one digit
/// string. Returns an empty string when there are no integral terms (a
/// purely fractional numeral).
fn parse_integral(terms: &[&str], naming_system: NamingSystem) -> Result<String, ConversionError> {
    if terms.is_empty() {
        return Ok(String::new());
    }

    let mut closed: Vec<Group> = Vec::new();
    let mut current = Group::new();
    let mut after_scale_boundary = false;
    let mut zero_seen = false;
    let mut first = true;

    for &term in terms {
        if zero_seen {
            return Err(ConversionError::ZeroInCompound(term.to_string()));
        }
        let kind = if first && term == "a" {
            // Leading indefinite article: "a hundred" reads as one hundred.
            TermKind::Additive(1)
        } else {
            classify(term, naming_system)?
        };
        first = false;

        match kind {
            TermKind::Additive(value) => {
                if value == 0 {
                    if !current.is_untouched() || !closed.is_empty() {
                        return Err(ConversionError::ZeroInCompound(current.text.clone()));
                    }
                    zero_seen = true;
                    current.push_text(term);
                    continue;
                }
                if after_scale_boundary {
                    close_group(&mut closed, current)?;
                    current = Group::new();
                    after_scale_boundary = false;
                }
                current.fragment = merge_fragments(&current, u64::from(value), term)?;
                current.push_text(term);
            }
            TermKind::Multiplicative(shift) => {
                if let Some(last) = current.last_shift {
                    if shift <= last {
                        return Err(ConversionError::MisorderedScale {
                            previous: current.text.clone(),
                            current: term.to_string(),
                        });
                    }
                }
                if current.fragment == 0 {
                    // "thousand" alone means one thousand.
                    current.fragment = 1;
                }
                if shift < 3 {
                    current.fragment *= 100;
                } else {
                    current.power += shift;
                    after_scale_boundary = true;
                }
                current.last_shift = Some(shift);
                current.push_text(term);
            }
        }
    }

    close_group(&mut closed, current)?;
    merge_groups(&closed)
}

/// Closes a group, enforcing strictly descending magnitudes across groups.
fn close_group(closed: &mut Vec<Group>, group: Group) -> Result<(), ConversionError> {
    if group.is_untouched() {
        return Ok(());
    }
    if let Some(previous) = closed.last() {
        match group.power.cmp(&previous.power) {
            std::cmp::Ordering::Equal => {
                return Err(ConversionError::DuplicateMagnitude {
                    previous: previous.text.clone(),
                    current: group.text,
                });
            }
            std::cmp::Ordering::Greater => {
                return Err(ConversionError::MisorderedMagnitude {
                    previous: previous.text.clone(),
                    current: group.text,
                });
            }
            std::cmp::Ordering::Less => {}
        }
    }
    closed.push(group);
    Ok(())
}

/// Place-value merge of an incoming additive value into a group fragment.
/// Each decimal place may be supplied by at most one side; English numerals
/// never require digit addition within a group ("seven hundred" + "four"
/// merges to 704, "seventeen" + "four" conflicts).
fn merge_fragments(group: &Group, incoming: u64, term: &str) -> Result<u64, ConversionError> {
    let mut a = group.fragment;
    let mut b = incoming;
    while a > 0 && b > 0 {
        if a % 10 != 0 && b % 10 != 0 {
            return Err(ConversionError::OverlappingTerms {
                existing: group.text.clone(),
                incoming: term.to_string(),
            });
        }
        a /= 10;
        b /= 10;
    }
    Ok(group.fragment + incoming)
}

/// Merges all closed groups into one digit string by place value. Groups
/// normally occupy disjoint digit ranges; an overlap here means the numeral
/// interleaved magnitudes, e.g. "six thousand seventeen hundred".
fn merge_groups(groups: &[Group]) -> Result<String, ConversionError> {
    let width = groups
        .iter()
        .map(|g| digit_count(g.fragment) + g.power as usize)
        .max()
        .unwrap_or(0);
    let mut digits = vec![b'0'; width];
    let mut owners: Vec<Option<usize>> = vec![None; width];

    for (index, group) in groups.iter().enumerate() {
        let fragment = group.fragment.to_string();
        for (offset, byte) in fragment.bytes().rev().enumerate() {
            if byte == b'0' {
                continue;
            }
            let position = width - 1 - (group.power as usize + offset);
            if let Some(owner) = owners[position] {
                return Err(ConversionError::OverlappingTerms {
                    existing: groups[owner].text.clone(),
                    incoming: group.text.clone(),
                });
            }
            digits[position] = byte;
            owners[position] = Some(index);
        }
    }

    let merged: String = digits.iter().map(|&b| b as char).collect();
    let trimmed = format::trim_leading_zeros(&merged);
    Ok(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
}

/// Fractional digits after "point": each term must name a single digit.
fn parse_fraction(terms: &[&str]) -> Result<String, ConversionError> {
    if terms.is_empty() {
        return Err(ConversionError::EmptyFraction);
    }
    let mut digits = String::with_capacity(terms.len());
    for &term in terms {
        let single = term.len() == 1 || term.chars().all(|c| c.is_ascii_alphabetic());
        match additive_value(term) {
            Ok(value) if value <= 9 && single => digits.push((b'0' + value as u8) as char),
            _ => return Err(ConversionError::InvalidFractionDigit(term.to_string())),
        }
    }
    Ok(digits)
}

fn digit_count(value: u64) -> usize {
    if value == 0 { 1 } else { (value.ilog10() + 1) as usize }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ConversionOptions;

    fn number(numeral: &str) -> Result<String, ConversionError> {
        to_number(numeral, &ConversionOptions::default())
    }

    #[test]
    fn tokenizer_rejects_mixed_terms() {
        assert!(matches!(number("@"), Err(ConversionError::InvalidTerm(_))));
        assert!(matches!(number("one2"), Err(ConversionError::InvalidTerm(_))));
    }

    #[test]
    fn implicit_one() {
        assert_eq!(number("hundred").unwrap(), "100");
        assert_eq!(number("a hundred").unwrap(), "100");
        assert_eq!(number("thousand").unwrap(), "1,000");
        assert_eq!(number("myriad").unwrap(), "10,000");
    }

    #[test]
    fn place_value_merge() {
        assert_eq!(number("seven hundred four").unwrap(), "704");
        assert_eq!(number("nineteen hundred").unwrap(), "1,900");
        assert_eq!(number("nineteen hundred five").unwrap(), "1,905");
        assert!(matches!(
            number("seventeen four"),
            Err(ConversionError::OverlappingTerms { .. })
        ));
        assert!(matches!(
            number("twenty ten"),
            Err(ConversionError::OverlappingTerms { .. })
        ));
    }

    #[test]
    fn ascending_scales_within_a_group() {
        assert_eq!(number("one thousand million").unwrap(), "1,000,000,000");
        assert_eq!(number("two thousand billion").unwrap(), "2,000,000,000,000");
        assert!(matches!(
            number("four million thousand"),
            Err(ConversionError::MisorderedScale { .. })
        ));
        assert!(matches!(
            number("thousand thousand"),
            Err(ConversionError::MisorderedScale { .. })
        ));
    }

    #[test]
    fn group_ordering() {
        assert_eq!(number("seven hundred four million eighty three thousand eleven").unwrap(), "704,083,011");
        assert!(matches!(
            number("six thousand fourty-four million"),
            Err(ConversionError::MisorderedMagnitude { .. })
        ));
        assert!(matches!(
            number("six thousand twenty thousand ten"),
            Err(ConversionError::DuplicateMagnitude { .. })
        ));
        assert!(matches!(
            number("six thousand seventeen hundred"),
            Err(ConversionError::OverlappingTerms { .. })
        ));
    }

    #[test]
    fn zero_stands_alone() {
        assert_eq!(number("zero").unwrap(), "0");
        assert!(matches!(number("zero thousand"), Err(ConversionError::ZeroInCompound(_))));
        assert!(matches!(number("five zero"), Err(ConversionError::ZeroInCompound(_))));
        assert!(matches!(number("zero five"), Err(ConversionError::ZeroInCompound(_))));
    }

    #[test]
    fn signs_and_emptiness() {
        assert_eq!(number("minus fifty-six").unwrap(), "-56");
        assert_eq!(number("negative sixty-six").unwrap(), "-66");
        assert_eq!(number("negative zero").unwrap(), "0");
        assert!(matches!(number(""), Err(ConversionError::EmptyNumeral)));
        assert!(matches!(number("negative"), Err(ConversionError::EmptyNumeral)));
    }

    #[test]
    fn fractions() {
        assert_eq!(number("point zero six two five").unwrap(), "0.0625");
        assert_eq!(number("three point one four one five nine two six").unwrap(), "3.1415926");
        assert_eq!(number("negative point five").unwrap(), "-0.5");
        assert!(matches!(number("one point"), Err(ConversionError::EmptyFraction)));
        assert!(matches!(
            number("one point twenty"),
            Err(ConversionError::InvalidFractionDigit(_))
        ));
    }

    #[test]
    fn digit_literal_terms() {
        assert_eq!(number("6 thousand").unwrap(), "6,000");
        assert_eq!(number("44 million").unwrap(), "44,000,000");
        assert!(matches!(number("1234 thousand"), Err(ConversionError::InvalidTerm(_))));
    }

    #[test]
    fn unknown_terms_surface_the_specific_error() {
        assert!(matches!(number("blorb"), Err(ConversionError::InvalidTerm(_))));
        assert!(matches!(number("gazillion"), Err(ConversionError::InvalidRoot(_))));
        assert!(matches!(
            number("one milliard"),
            Err(ConversionError::NamingSystemMismatch(_))
        ));
    }
}
