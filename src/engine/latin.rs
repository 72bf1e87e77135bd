//! Latin root resolution.
//!
//! Converts between "-illion"/"-illiard" scale words and their integer
//! factors, in both directions. A word that is not in the root table
//! directly is decomposed into a known Latin prefix (1..=9) plus a base
//! root, e.g. "trevigint" = "tre" (3) + "vigint" (20) = factor 23.

use crate::ConversionError;
use crate::api::NamingSystem;

use super::lexicon::{FACTOR_TO_ROOT, LATIN_PREFIXES, MAX_FACTOR, ROOT_TO_FACTOR, VALUE_TO_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScaleSuffix {
    Illion,
    Illiard,
}

impl ScaleSuffix {
    fn as_str(self) -> &'static str {
        match self {
            ScaleSuffix::Illion => "illion",
            ScaleSuffix::Illiard => "illiard",
        }
    }
}

/// Magnitude shift of a scale word under the given naming system.
///
/// Returns `Ok(None)` when `word` does not carry an "-illion"/"-illiard"
/// suffix at all (it is then not a scale word, not an error). Words with the
/// suffix but an unresolvable root, a factor beyond centillion, or an
/// "-illiard" suffix under short scale fail with the specific error.
pub(crate) fn scale_word_power(
    word: &str,
    naming_system: NamingSystem,
) -> Result<Option<u32>, ConversionError> {
    let (root, suffix) = if let Some(root) = word.strip_suffix("illiard") {
        (root, ScaleSuffix::Illiard)
    } else if let Some(root) = word.strip_suffix("illion") {
        (root, ScaleSuffix::Illion)
    } else {
        return Ok(None);
    };

    if suffix == ScaleSuffix::Illiard && naming_system == NamingSystem::ShortScale {
        return Err(ConversionError::NamingSystemMismatch(word.to_string()));
    }
    if root.is_empty() {
        return Err(ConversionError::InvalidRoot(word.to_string()));
    }

    let factor = root_factor(root)?;
    if factor > MAX_FACTOR {
        return Err(ConversionError::FactorBeyondCentillion(factor));
    }

    Ok(Some(match (naming_system, suffix) {
        (NamingSystem::ShortScale, ScaleSuffix::Illion) => 3 * factor + 3,
        (NamingSystem::ShortScale, ScaleSuffix::Illiard) => unreachable!("rejected above"),
        (NamingSystem::LongScale, ScaleSuffix::Illion) => 6 * factor,
        (NamingSystem::LongScale, ScaleSuffix::Illiard) => 6 * factor + 3,
    }))
}

/// Integer factor of a Latin root, composing prefix + base root when the
/// root has no direct table entry.
fn root_factor(root: &str) -> Result<u32, ConversionError> {
    if let Some(&factor) = ROOT_TO_FACTOR.get(root) {
        return Ok(u32::from(factor));
    }
    for &(value, prefix) in LATIN_PREFIXES.iter() {
        if let Some(rest) = root.strip_prefix(prefix) {
            return match ROOT_TO_FACTOR.get(rest) {
                Some(&base) => Ok(u32::from(base) + u32::from(value)),
                None => Err(ConversionError::InvalidRoot(rest.to_string())),
            };
        }
    }
    Err(ConversionError::InvalidRoot(root.to_string()))
}

/// Synthesizes the scale word for a factor, the inverse of
/// [`scale_word_power`]. Performs the same prefix + root composition for
/// factors without a direct table entry.
pub(crate) fn scale_word_for_factor(
    factor: u32,
    suffix: ScaleSuffix,
) -> Result<String, ConversionError> {
    if factor == 0 || factor > MAX_FACTOR {
        return Err(ConversionError::FactorBeyondCentillion(factor));
    }
    let factor = factor as u16;
    let root = match FACTOR_TO_ROOT.get(&factor) {
        Some(&root) => root.to_string(),
        None => {
            // Non-direct factors are 11..=99 off the tens, so prefix and
            // base are both guaranteed table entries.
            let prefix_value = factor % 10;
            let base = factor - prefix_value;
            format!("{}{}", VALUE_TO_PREFIX[&prefix_value], FACTOR_TO_ROOT[&base])
        }
    };
    Ok(format!("{root}{}", suffix.as_str()))
}
