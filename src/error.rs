use thiserror::Error;

/// Errors surfaced by number/numeral conversions.
///
/// Every error is reported synchronously to the caller; a failed conversion
/// never yields a partial result. The variants fall into four families:
/// malformed input, capacity limits, naming-system mismatches, and numeral
/// grammar violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Thousands and decimal separator are configured to the same symbol.
    #[error("thousands separator and decimal separator are both '{0}'; they must differ")]
    SeparatorClash(char),

    /// A separator symbol that would be ambiguous inside number text.
    #[error("'{0}' is not a usable separator symbol")]
    InvalidSeparator(char),

    /// The input does not match the canonical number grammar.
    #[error("\"{0}\" is not a number")]
    NotANumber(String),

    /// A scientific-notation exponent beyond the supported magnitude ceiling.
    #[error("the exponent of \"{0}\" is beyond the supported magnitude ceiling")]
    ExponentOutOfRange(String),

    /// Numeral text without any terms (or nothing but a sign word).
    #[error("the numeral is empty")]
    EmptyNumeral,

    /// A term that is neither an additive base term nor a scale term.
    #[error("\"{0}\" is not a valid numeral term")]
    InvalidTerm(String),

    /// "point" with no fractional digit terms after it.
    #[error("\"point\" must be followed by single-digit terms")]
    EmptyFraction,

    /// A fractional term that does not name a single digit.
    #[error("\"{0}\" is not a single-digit term")]
    InvalidFractionDigit(String),

    /// An "-illion"/"-illiard" word whose Latin root cannot be resolved.
    #[error("\"{0}\" is not a valid Latin root")]
    InvalidRoot(String),

    /// A scale factor above centillion, the supported ceiling.
    #[error("scale factor {0} is beyond centillion (factor 100)")]
    FactorBeyondCentillion(u32),

    /// An "-illiard" term while the short-scale naming system is selected.
    #[error("\"{0}\" is a long-scale term but the short-scale naming system is selected")]
    NamingSystemMismatch(String),

    /// Two sub-numerals supplying the same decimal place.
    #[error("sub-numeral \"{incoming}\" overlaps \"{existing}\" and cannot be merged")]
    OverlappingTerms { existing: String, incoming: String },

    /// Two magnitude groups naming the same scale.
    #[error("\"{current}\" names the same magnitude as \"{previous}\"")]
    DuplicateMagnitude { previous: String, current: String },

    /// A magnitude group larger than one that came before it.
    #[error("\"{current}\" has a higher magnitude than \"{previous}\"; did you mean \"{current} {previous}\"?")]
    MisorderedMagnitude { previous: String, current: String },

    /// A scale term that does not increase the magnitude within its group.
    #[error("scale term \"{current}\" cannot follow \"{previous}\" within the same group")]
    MisorderedScale { previous: String, current: String },

    /// "zero" combined with any other term.
    #[error("\"zero\" cannot be combined with \"{0}\"")]
    ZeroInCompound(String),
}
