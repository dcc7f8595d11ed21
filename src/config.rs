//! Analysis configuration: character-quantity thresholds and letter-case
//! policy.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A character quantity, expressed either as an absolute count or as a
/// share of the reference length.
///
/// Coefficients are interpreted over `[0.0, 1.0]`; out-of-range values are
/// clamped when resolved. Absolute counts are non-negative by construction.
///
/// # Example
///
/// ```rust
/// use libtypo::config::CharQuantity;
///
/// assert_eq!(CharQuantity::HALF.count(10), 5);
/// assert_eq!(CharQuantity::ALL.count(7), 7);
/// assert_eq!(CharQuantity::Count(9).count_clamped(5), 5);
/// assert_eq!(CharQuantity::Zero.count(100), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CharQuantity {
    /// An absolute number of characters.
    Count(usize),
    /// A share of the reference length in `[0.0, 1.0]`.
    Coefficient(f64),
    /// Exactly zero characters.
    Zero,
}

impl CharQuantity {
    /// The whole reference length.
    pub const ALL: CharQuantity = CharQuantity::Coefficient(1.0);
    /// Three quarters of the reference length.
    pub const HIGH: CharQuantity = CharQuantity::Coefficient(0.75);
    /// Half of the reference length.
    pub const HALF: CharQuantity = CharQuantity::Coefficient(0.5);
    /// A quarter of the reference length.
    pub const LOW: CharQuantity = CharQuantity::Coefficient(0.25);
    /// One character.
    pub const ONE: CharQuantity = CharQuantity::Count(1);
    /// Two characters.
    pub const TWO: CharQuantity = CharQuantity::Count(2);
    /// Three characters.
    pub const THREE: CharQuantity = CharQuantity::Count(3);

    /// Resolve the quantity against a reference length.
    ///
    /// Coefficients round to the nearest whole character and resolve to
    /// exactly `length` at `1.0`; absolute counts are returned as-is.
    pub fn count(&self, length: usize) -> usize {
        match *self {
            CharQuantity::Count(count) => count,
            CharQuantity::Coefficient(coefficient) => {
                let coefficient = coefficient.clamp(0.0, 1.0);
                if coefficient >= 1.0 {
                    length
                } else {
                    (length as f64 * coefficient).round() as usize
                }
            }
            CharQuantity::Zero => 0,
        }
    }

    /// Resolve the quantity and clamp the result to `[0, length]`.
    pub fn count_clamped(&self, length: usize) -> usize {
        self.count(length).min(length)
    }
}

/// Target form for letter-case normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CaseVersion {
    /// First character uppercased, the rest lowercased.
    Capitalized,
    /// Every character uppercased.
    Uppercase,
    /// Every character lowercased.
    Lowercase,
}

impl CaseVersion {
    /// Apply this version to a string, character by character.
    ///
    /// Transforms are scalar-level: multi-scalar case mappings are truncated
    /// to their first scalar so the character count never changes.
    pub(crate) fn apply_str(&self, s: &str) -> String {
        use crate::text::{to_lower_scalar, to_upper_scalar};
        s.chars()
            .enumerate()
            .map(|(index, c)| match self {
                CaseVersion::Capitalized => {
                    if index == 0 {
                        to_upper_scalar(c)
                    } else {
                        to_lower_scalar(c)
                    }
                }
                CaseVersion::Uppercase => to_upper_scalar(c),
                CaseVersion::Lowercase => to_lower_scalar(c),
            })
            .collect()
    }
}

/// How letter case participates in the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LetterCase {
    /// Keep both inputs as typed and flag case mismatches on correct
    /// characters via `correct_case`.
    Compare,
    /// Normalize both inputs to the given version before comparison;
    /// `correct_case` stays unset everywhere.
    Make(CaseVersion),
}

/// Configuration for one analysis call.
///
/// The default configuration has no thresholds, leaves letter case
/// untouched, and does not cap the alignment enumeration.
///
/// # Example
///
/// ```rust
/// use libtypo::config::{AnalysisConfig, CharQuantity, LetterCase};
///
/// let config = AnalysisConfig::new()
///     .with_required_correct_chars(CharQuantity::HALF)
///     .with_acceptable_wrong_chars(CharQuantity::THREE)
///     .with_letter_case(LetterCase::Compare);
///
/// assert_eq!(config.required_correct_chars(), Some(CharQuantity::HALF));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct AnalysisConfig {
    required_correct_chars: Option<CharQuantity>,
    acceptable_wrong_chars: Option<CharQuantity>,
    letter_case: Option<LetterCase>,
    raw_sequence_limit: Option<usize>,
}

impl AnalysisConfig {
    /// Create a configuration with everything unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least this many correct characters for the comparison to
    /// be worth annotating.
    pub fn with_required_correct_chars(mut self, quantity: CharQuantity) -> Self {
        self.required_correct_chars = Some(quantity);
        self
    }

    /// Tolerate at most this many wrong characters.
    pub fn with_acceptable_wrong_chars(mut self, quantity: CharQuantity) -> Self {
        self.acceptable_wrong_chars = Some(quantity);
        self
    }

    /// Set the letter-case policy.
    pub fn with_letter_case(mut self, letter_case: LetterCase) -> Self {
        self.letter_case = Some(letter_case);
        self
    }

    /// Cap the number of raw alignment sequences the math core may
    /// enumerate; a tripped cap classifies the comparison as
    /// non-compliant instead of running to completion.
    pub fn with_raw_sequence_limit(mut self, limit: usize) -> Self {
        self.raw_sequence_limit = Some(limit);
        self
    }

    /// The required-correct threshold, if set.
    pub fn required_correct_chars(&self) -> Option<CharQuantity> {
        self.required_correct_chars
    }

    /// The acceptable-wrong threshold, if set.
    pub fn acceptable_wrong_chars(&self) -> Option<CharQuantity> {
        self.acceptable_wrong_chars
    }

    /// The letter-case policy, if set.
    pub fn letter_case(&self) -> Option<LetterCase> {
        self.letter_case
    }

    /// The enumeration cap, if set.
    pub fn raw_sequence_limit(&self) -> Option<usize> {
        self.raw_sequence_limit
    }
}
