//! Process-wide lexicon tables.
//!
//! Each table exists as two one-directional maps built together from one
//! const source-of-truth list, so the directions cannot drift apart. The
//! maps are built lazily on first use and never mutated afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// English base terms: 0..=19 plus the tens. The single source of truth for
/// both lookup directions.
const BASE_TERMS: [(u16, &str); 28] = [
    (0, "zero"),
    (1, "one"),
    (2, "two"),
    (3, "three"),
    (4, "four"),
    (5, "five"),
    (6, "six"),
    (7, "seven"),
    (8, "eight"),
    (9, "nine"),
    (10, "ten"),
    (11, "eleven"),
    (12, "twelve"),
    (13, "thirteen"),
    (14, "fourteen"),
    (15, "fifteen"),
    (16, "sixteen"),
    (17, "seventeen"),
    (18, "eighteen"),
    (19, "nineteen"),
    (20, "twenty"),
    (30, "thirty"),
    (40, "forty"),
    (50, "fifty"),
    (60, "sixty"),
    (70, "seventy"),
    (80, "eighty"),
    (90, "ninety"),
];

pub(crate) static WORD_TO_VALUE: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    let mut map: HashMap<_, _> = BASE_TERMS.iter().map(|&(value, word)| (word, value)).collect();
    // Common variant spelling, accepted when reading only.
    map.insert("fourty", 40);
    map
});

pub(crate) static VALUE_TO_WORD: Lazy<HashMap<u16, &'static str>> =
    Lazy::new(|| BASE_TERMS.iter().copied().collect());

/// Fixed scale words below the Latin-root range, as power-of-ten shifts.
pub(crate) static MULTIPLIER_SHIFTS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| HashMap::from([("hundred", 2), ("thousand", 3), ("myriad", 4)]));

/// Distinctly named Latin prefixes. Together with a Latin root and the
/// suffix "-illion" or "-illiard" they form a standard dictionary number,
/// e.g. "tre" + "vigint" + "illion" = the 23rd "-illion".
pub(crate) const LATIN_PREFIXES: [(u16, &str); 9] = [
    (1, "un"),
    (2, "duo"),
    (3, "tre"),
    (4, "quattuor"),
    (5, "quin"),
    (6, "sex"),
    (7, "septen"),
    (8, "octo"),
    (9, "novem"),
];

pub(crate) static VALUE_TO_PREFIX: Lazy<HashMap<u16, &'static str>> =
    Lazy::new(|| LATIN_PREFIXES.iter().copied().collect());

/// Distinctly named Latin roots, stored without the "-illion"/"-illiard"
/// suffix. The "-illion" of factor f is 10^(3f+3) in short scale and 10^(6f)
/// in long scale; the long-scale "-illiard" of factor f is 10^(6f+3).
const LATIN_ROOTS: [(u16, &str); 19] = [
    (1, "m"),
    (2, "b"),
    (3, "tr"),
    (4, "quadr"),
    (5, "quint"),
    (6, "sext"),
    (7, "sept"),
    (8, "oct"),
    (9, "non"),
    (10, "dec"),
    (20, "vigint"),
    (30, "trigint"),
    (40, "quadragint"),
    (50, "quinquagint"),
    (60, "sexagint"),
    (70, "septuagint"),
    (80, "octogint"),
    (90, "nonagint"),
    (100, "cent"),
];

pub(crate) static ROOT_TO_FACTOR: Lazy<HashMap<&'static str, u16>> =
    Lazy::new(|| LATIN_ROOTS.iter().map(|&(factor, root)| (root, factor)).collect());

pub(crate) static FACTOR_TO_ROOT: Lazy<HashMap<u16, &'static str>> =
    Lazy::new(|| LATIN_ROOTS.iter().copied().collect());

/// Centillion is the largest supported scale root.
pub(crate) const MAX_FACTOR: u32 = 100;

/// Base word for a value the table covers (0..=19 and the tens).
pub(crate) fn base_word(value: u16) -> &'static str {
    VALUE_TO_WORD[&value]
}

/// Base word for a single ASCII digit.
pub(crate) fn digit_word(digit: u8) -> &'static str {
    base_word(u16::from(digit - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_consistent() {
        for &(value, word) in BASE_TERMS.iter() {
            assert_eq!(WORD_TO_VALUE[word], value);
            assert_eq!(VALUE_TO_WORD[&value], word);
        }
        for &(factor, root) in LATIN_ROOTS.iter() {
            assert_eq!(ROOT_TO_FACTOR[root], factor);
            assert_eq!(FACTOR_TO_ROOT[&factor], root);
        }
    }

    #[test]
    fn variant_spellings_read_only() {
        assert_eq!(WORD_TO_VALUE["fourty"], 40);
        assert_eq!(VALUE_TO_WORD[&40], "forty");
    }

    #[test]
    fn digit_words() {
        assert_eq!(digit_word(b'0'), "zero");
        assert_eq!(digit_word(b'9'), "nine");
    }
}
