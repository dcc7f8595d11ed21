//! Typed characters and their classification.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Which member of a swapped pair a character is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SwapSide {
    /// The character that should come second but was typed first.
    Left,
    /// The character that should come first but was typed second.
    Right,
}

/// Classification of a single character of the compared text.
///
/// This is a closed set: every character of an annotated text is exactly
/// one of these five cases, so consumers can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CharacterKind {
    /// Present in both texts at matching positions.
    Correct,
    /// Present only in the accurate text.
    Missing,
    /// Present only in the compared text.
    Extra,
    /// One of an adjacent pair that appears in reversed order in the
    /// compared text.
    Swapped(SwapSide),
    /// Stands in place of a different intended character; carries the
    /// character that should have been typed.
    Misspell(char),
}

impl CharacterKind {
    /// Check whether this is the `Correct` case.
    pub fn is_correct(&self) -> bool {
        matches!(self, CharacterKind::Correct)
    }

    /// Check whether this is the `Missing` case.
    pub fn is_missing(&self) -> bool {
        matches!(self, CharacterKind::Missing)
    }

    /// Check whether this is the `Extra` case.
    pub fn is_extra(&self) -> bool {
        matches!(self, CharacterKind::Extra)
    }

    /// Check whether this is either side of a swapped pair.
    pub fn is_swapped(&self) -> bool {
        matches!(self, CharacterKind::Swapped(_))
    }

    /// Check whether this is the `Misspell` case.
    pub fn is_misspell(&self) -> bool {
        matches!(self, CharacterKind::Misspell(_))
    }

    /// The intended character, if this is a misspell.
    pub fn intended(&self) -> Option<char> {
        match self {
            CharacterKind::Misspell(intended) => Some(*intended),
            _ => None,
        }
    }
}

/// A single character of the compared text together with its
/// classification and, where letter case was compared, whether the case
/// matched the reference.
///
/// `correct_case` is `None` when letter case does not matter for this
/// character (the text was normalized, case comparison was not requested,
/// or the character is not a positional match).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct TypedCharacter {
    /// The character as it appears in the annotated stream.
    pub raw: char,
    /// Classification of this character.
    pub kind: CharacterKind,
    /// Whether the letter case matched the reference, when compared.
    pub correct_case: Option<bool>,
}

impl TypedCharacter {
    /// Create a typed character with no case information.
    pub fn new(raw: char, kind: CharacterKind) -> Self {
        Self {
            raw,
            kind,
            correct_case: None,
        }
    }

    /// Create a typed character with explicit case information.
    pub fn with_case(raw: char, kind: CharacterKind, correct_case: Option<bool>) -> Self {
        Self {
            raw,
            kind,
            correct_case,
        }
    }
}

/// First scalar of the full Unicode lowercase mapping.
///
/// The whole crate compares characters at the scalar level, so multi-scalar
/// case mappings are truncated to their first scalar.
pub(crate) fn to_lower_scalar(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// First scalar of the full Unicode uppercase mapping.
pub(crate) fn to_upper_scalar(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Scalar-level case-insensitive equality.
pub(crate) fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || to_lower_scalar(a) == to_lower_scalar(b)
}
