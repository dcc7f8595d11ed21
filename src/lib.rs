//! # libtypo
//!
//! Character-level typo classification against a reference string.
//!
//! The library compares a user-entered *compared* text with a known
//! *accurate* text and annotates every character as correct, missing,
//! extra, swapped, or misspelled. It is the analysis engine behind
//! find-the-typo drills: the caller renders the annotated stream, the
//! library decides what each character is.
//!
//! The pipeline has four stages, each usable on its own:
//!
//! 1. [`alignment`] maps compared-text positions back to accurate-text
//!    indices (the *basis*).
//! 2. Compliance gates in [`formation`] reject comparisons too dissimilar
//!    to be worth annotating.
//! 3. [`formation`] lifts the basis to a typed-character stream of
//!    correct/missing/extra atoms.
//! 4. [`editing`] rewrites that stream into the user-facing form, fusing
//!    missing/extra pairs into misspells and marking swapped neighbors.
//!
//! ## Example
//!
//! ```rust
//! use libtypo::prelude::*;
//!
//! let annotated = libtypo::analyze("Hola", "Hello", &AnalysisConfig::default());
//!
//! let kinds: Vec<CharacterKind> = annotated.iter().map(|ch| ch.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         CharacterKind::Correct,        // H
//!         CharacterKind::Misspell('e'),  // o typed where e was intended
//!         CharacterKind::Correct,        // l
//!         CharacterKind::Misspell('l'),  // a typed where l was intended
//!         CharacterKind::Missing,        // o never typed
//!     ]
//! );
//! assert_eq!(annotated.typo_and_mistake_count(), 3);
//! ```
//!
//! ## Cost model
//!
//! The alignment enumerates candidate placements for repeated characters;
//! the candidate count is the product of `C(m + k - 1, k)` over all
//! characters (`k` occurrences compared, `m` accurate). Long inputs with
//! many repeated characters should be split into words or sentences by the
//! caller, or capped via
//! [`AnalysisConfig::with_raw_sequence_limit`](config::AnalysisConfig::with_raw_sequence_limit).
//!
//! The analysis itself is a pure, reentrant computation: no global state,
//! no I/O, no panics on any input. Off-thread scheduling is the caller's
//! concern.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alignment;
pub mod config;
pub mod editing;
pub mod formation;
pub mod text;

#[cfg(feature = "serialization")]
pub mod serialization;

pub use alignment::{calculate_basis, count_common_chars, Basis};
pub use config::{AnalysisConfig, CharQuantity, LetterCase};
pub use editing::make_user_friendly;
pub use formation::form_text;
pub use text::{CharacterKind, SwapSide, TypedCharacter, TypedText};

/// Common imports for convenient usage.
pub mod prelude {
    pub use crate::alignment::{calculate_basis, count_common_chars, Basis};
    pub use crate::analyze;
    pub use crate::config::{AnalysisConfig, CaseVersion, CharQuantity, LetterCase};
    pub use crate::editing::make_user_friendly;
    pub use crate::formation::form_text;
    pub use crate::text::{CharacterKind, SwapSide, TypedCharacter, TypedText};

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{from_json, to_json};
}

/// Annotate `compared` against `accurate` in one call.
///
/// Equivalent to [`form_text`] composed with [`make_user_friendly`]. All
/// degenerate inputs come back as result shapes rather than errors: an
/// empty compared text yields an all-missing annotation, an empty accurate
/// text an all-extra one, and a failed compliance gate renders the whole
/// compared text as extra.
///
/// # Example
///
/// ```rust
/// use libtypo::prelude::*;
///
/// // Swapped neighbors count as a single mistake.
/// let annotated = libtypo::analyze("dya", "day", &AnalysisConfig::default());
/// assert_eq!(annotated.typo_and_mistake_count(), 1);
///
/// // No shared characters at all: classified, not an error.
/// let annotated = libtypo::analyze("hi!", "bye", &AnalysisConfig::default());
/// assert!(annotated.is_completely_wrong());
/// ```
pub fn analyze(compared: &str, accurate: &str, config: &AnalysisConfig) -> TypedText {
    make_user_friendly(form_text(compared, accurate, config), config)
}
