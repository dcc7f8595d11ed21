//! Lifting an index-level alignment into a typed-character stream.
//!
//! The former produces a [`TypedText`] containing only `Correct`,
//! `Missing`, and `Extra` characters; detecting misspells and swaps is the
//! editor's job. Inputs that are empty or fail a compliance gate come back
//! as the degenerate all-missing or all-extra shapes instead of an error.

mod compliance;

pub use compliance::{passes_exact_compliance, passes_quick_compliance};

use crate::alignment::{try_calculate_basis, Basis};
use crate::config::{AnalysisConfig, CaseVersion, LetterCase};
use crate::text::{CharacterKind, TypedCharacter, TypedText};

/// Form the typed-character stream for `compared` against `accurate`.
///
/// # Example
///
/// ```rust
/// use libtypo::config::AnalysisConfig;
/// use libtypo::formation::form_text;
/// use libtypo::text::CharacterKind;
///
/// let text = form_text("dyy", "day", &AnalysisConfig::default());
/// let kinds: Vec<CharacterKind> = text.iter().map(|ch| ch.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         CharacterKind::Correct,
///         CharacterKind::Missing,
///         CharacterKind::Correct,
///         CharacterKind::Extra,
///     ]
/// );
/// ```
pub fn form_text(compared: &str, accurate: &str, config: &AnalysisConfig) -> TypedText {
    // A make-case policy normalizes both inputs before any comparison.
    let (compared, accurate) = match config.letter_case() {
        Some(LetterCase::Make(version)) => {
            (version.apply_str(compared), version.apply_str(accurate))
        }
        _ => (compared.to_owned(), accurate.to_owned()),
    };

    if compared.is_empty() {
        return TypedText::uniform(&accurate, CharacterKind::Missing);
    }
    if accurate.is_empty() {
        return TypedText::uniform(&compared, CharacterKind::Extra);
    }

    if !passes_quick_compliance(&compared, &accurate, config) {
        return TypedText::uniform(&compared, CharacterKind::Extra);
    }

    let basis = match try_calculate_basis(&compared, &accurate, config.raw_sequence_limit()) {
        Ok(basis) => basis,
        // A tripped enumeration cap is classified, not surfaced.
        Err(_) => return TypedText::uniform(&compared, CharacterKind::Extra),
    };

    let accurate_chars: Vec<char> = accurate.chars().collect();
    if !passes_exact_compliance(&basis, accurate_chars.len(), config) {
        return TypedText::uniform(&compared, CharacterKind::Extra);
    }

    let formed = lift(&basis, &compared, &accurate_chars, config);
    match config.letter_case() {
        Some(LetterCase::Make(CaseVersion::Capitalized)) => formed.capitalized(),
        Some(LetterCase::Make(CaseVersion::Uppercase)) => formed.uppercased(),
        Some(LetterCase::Make(CaseVersion::Lowercase)) => formed.lowercased(),
        _ => formed,
    }
}

/// Turn the basis into the correct/missing/extra stream.
fn lift(
    basis: &Basis,
    compared: &str,
    accurate_chars: &[char],
    config: &AnalysisConfig,
) -> TypedText {
    let compare_case = matches!(config.letter_case(), Some(LetterCase::Compare));

    // Everything starts as extra; positions whose mapping participates in
    // the subsequence become correct.
    let mut characters: Vec<TypedCharacter> = compared
        .chars()
        .map(|c| TypedCharacter::new(c, CharacterKind::Extra))
        .collect();

    let subsequence = basis.subsequence();
    let mut cursor = 0;
    for (position, entry) in basis.sequence().iter().enumerate() {
        if cursor < subsequence.len() && *entry == Some(subsequence[cursor]) {
            characters[position].kind = CharacterKind::Correct;
            if compare_case {
                let case_matches = accurate_chars[subsequence[cursor]] == characters[position].raw;
                characters[position].correct_case = Some(case_matches);
            }
            cursor += 1;
        }
    }

    // Interleave the uncovered accurate characters: each one goes in front
    // of the first correct character whose index exceeds it, so the result
    // follows the accurate text's index order.
    let missing = basis.missing_elements();
    let mut result = Vec::with_capacity(characters.len() + missing.len());
    let mut missing_cursor = 0;
    let mut cursor = 0;
    for character in characters {
        if character.kind.is_correct() {
            let covered = subsequence[cursor];
            cursor += 1;
            while missing_cursor < missing.len() && missing[missing_cursor] < covered {
                result.push(TypedCharacter::new(
                    accurate_chars[missing[missing_cursor]],
                    CharacterKind::Missing,
                ));
                missing_cursor += 1;
            }
        }
        result.push(character);
    }
    while missing_cursor < missing.len() {
        result.push(TypedCharacter::new(
            accurate_chars[missing[missing_cursor]],
            CharacterKind::Missing,
        ));
        missing_cursor += 1;
    }

    TypedText::from_characters(result)
}
