//! Conversion engine.
//!
//! A conversion is a short, purely functional pipeline over immutable,
//! lazily-built lexicon tables:
//!
//! ```text
//! number text ── extract (extract.rs) ──> NumberParts
//!                                             │
//!                                             v
//!                              to_numeral (to_numeral.rs)
//!                                - 3-digit groups, right to left
//!                                - irregular teen/tens forms
//!                                - scale word per group (latin.rs)
//!
//! numeral text ── tokenize + classify (to_number.rs)
//!                   - additive vs multiplicative terms (lexicon.rs, latin.rs)
//!                   - place-value merge into magnitude groups
//!                   - ordering/uniqueness checks across groups
//!                                             │
//!                                             v
//!                              digit string ── format.rs ──> number text
//! ```
//!
//! ## Responsibilities by module
//!
//! - `lexicon.rs`: the process-wide base-word, Latin-prefix and Latin-root
//!   tables, each built once from a single source-of-truth list.
//! - `latin.rs`: resolution between "-illion"/"-illiard" words and their
//!   integer factors, both directions, up to centillion (factor 100).
//! - `extract.rs`: canonical number grammar, thousands-grouping validation
//!   and scientific-notation resolution.
//! - `to_number.rs`: numeral tokenizer, grammar validator and group merger.
//! - `to_numeral.rs`: the inverse generator.
//! - `format.rs`: separator insertion and final number rendering.
//!
//! Nothing in here blocks, suspends or mutates shared state; every function
//! either completes synchronously or fails synchronously with a
//! [`crate::ConversionError`].

#[path = "engine/extract.rs"]
pub(crate) mod extract;
#[path = "engine/format.rs"]
pub(crate) mod format;
#[path = "engine/latin.rs"]
pub(crate) mod latin;
#[path = "engine/lexicon.rs"]
pub(crate) mod lexicon;
#[path = "engine/to_number.rs"]
pub(crate) mod to_number;
#[path = "engine/to_numeral.rs"]
pub(crate) mod to_numeral;
