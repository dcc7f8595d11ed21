//! The annotated text container and its aggregate queries.

use super::character::{to_lower_scalar, to_upper_scalar, CharacterKind, TypedCharacter};

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of typed characters.
///
/// A `TypedText` is the output of every pipeline stage: the former produces
/// one containing only `Correct`, `Missing`, and `Extra` characters, and the
/// editor rewrites it into the final user-facing annotation with `Misspell`
/// and `Swapped` added.
///
/// # Example
///
/// ```rust
/// use libtypo::text::{CharacterKind, TypedText};
///
/// let text = TypedText::uniform("abc", CharacterKind::Missing);
/// assert_eq!(text.len(), 3);
/// assert!(text.is_completely_wrong());
/// assert_eq!(text.raw_value(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct TypedText {
    characters: Vec<TypedCharacter>,
}

impl TypedText {
    /// Create an empty text.
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
        }
    }

    /// Create a text where every character of `raw` carries the same kind.
    pub fn uniform(raw: &str, kind: CharacterKind) -> Self {
        Self {
            characters: raw.chars().map(|c| TypedCharacter::new(c, kind)).collect(),
        }
    }

    /// Create a text from already-typed characters.
    pub fn from_characters(characters: Vec<TypedCharacter>) -> Self {
        Self { characters }
    }

    /// Consume the text, returning its characters.
    pub fn into_characters(self) -> Vec<TypedCharacter> {
        self.characters
    }

    /// The characters of this text.
    pub fn characters(&self) -> &[TypedCharacter] {
        &self.characters
    }

    /// Iterate over the characters.
    pub fn iter(&self) -> std::slice::Iter<'_, TypedCharacter> {
        self.characters.iter()
    }

    /// The character at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&TypedCharacter> {
        self.characters.get(index)
    }

    /// Number of characters in the annotation.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check whether the text holds no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Concatenation of every character's `raw` value; for a misspell the
    /// intended character follows immediately after the typed one.
    ///
    /// This is the form used when reconstructing the reference for display.
    pub fn raw_value(&self) -> String {
        let mut out = String::with_capacity(self.characters.len());
        for ch in &self.characters {
            out.push(ch.raw);
            if let CharacterKind::Misspell(intended) = ch.kind {
                out.push(intended);
            }
        }
        out
    }

    /// True when every character is `Correct` and none has a wrong case.
    pub fn is_absolutely_right(&self) -> bool {
        self.characters
            .iter()
            .all(|ch| ch.kind.is_correct() && ch.correct_case != Some(false))
    }

    /// True when every character is `Missing`, `Extra`, or `Misspell`.
    pub fn is_completely_wrong(&self) -> bool {
        self.characters
            .iter()
            .all(|ch| ch.kind.is_missing() || ch.kind.is_extra() || ch.kind.is_misspell())
    }

    /// Count of typos and mistakes.
    ///
    /// Each `Extra`, `Missing`, and `Misspell` character counts as one;
    /// a swapped pair counts as a single mistake.
    pub fn typo_and_mistake_count(&self) -> usize {
        let mut mistakes = 0;
        let mut swapped = 0;
        for ch in &self.characters {
            match ch.kind {
                CharacterKind::Extra | CharacterKind::Missing | CharacterKind::Misspell(_) => {
                    mistakes += 1;
                }
                CharacterKind::Swapped(_) => swapped += 1,
                CharacterKind::Correct => {}
            }
        }
        mistakes + swapped / 2
    }

    /// Count of characters whose letter case did not match the reference.
    pub fn wrong_letter_case_count(&self) -> usize {
        self.characters
            .iter()
            .filter(|ch| ch.correct_case == Some(false))
            .count()
    }

    /// Count of `Correct` characters.
    pub fn correct_count(&self) -> usize {
        self.characters
            .iter()
            .filter(|ch| ch.kind.is_correct())
            .count()
    }

    /// Length with each swapped pair counted as a single unit.
    pub fn effective_len(&self) -> usize {
        let swapped = self
            .characters
            .iter()
            .filter(|ch| ch.kind.is_swapped())
            .count();
        self.characters.len() - swapped / 2
    }

    /// A copy with the first character uppercased and the rest lowercased.
    ///
    /// Misspell payloads are transformed alongside the typed characters and
    /// `correct_case` is cleared on every transformed character.
    pub fn capitalized(&self) -> Self {
        self.transformed(|index, c| {
            if index == 0 {
                to_upper_scalar(c)
            } else {
                to_lower_scalar(c)
            }
        })
    }

    /// A copy with every character uppercased (misspell payloads included,
    /// `correct_case` cleared).
    pub fn uppercased(&self) -> Self {
        self.transformed(|_, c| to_upper_scalar(c))
    }

    /// A copy with every character lowercased (misspell payloads included,
    /// `correct_case` cleared).
    pub fn lowercased(&self) -> Self {
        self.transformed(|_, c| to_lower_scalar(c))
    }

    fn transformed(&self, transform: impl Fn(usize, char) -> char) -> Self {
        let characters = self
            .characters
            .iter()
            .enumerate()
            .map(|(index, ch)| {
                let kind = match ch.kind {
                    CharacterKind::Misspell(intended) => {
                        CharacterKind::Misspell(transform(index, intended))
                    }
                    other => other,
                };
                TypedCharacter::new(transform(index, ch.raw), kind)
            })
            .collect();
        Self { characters }
    }
}

impl FromIterator<TypedCharacter> for TypedText {
    fn from_iter<I: IntoIterator<Item = TypedCharacter>>(iter: I) -> Self {
        Self {
            characters: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TypedText {
    type Item = &'a TypedCharacter;
    type IntoIter = std::slice::Iter<'a, TypedCharacter>;

    fn into_iter(self) -> Self::IntoIter {
        self.characters.iter()
    }
}

impl IntoIterator for TypedText {
    type Item = TypedCharacter;
    type IntoIter = std::vec::IntoIter<TypedCharacter>;

    fn into_iter(self) -> Self::IntoIter {
        self.characters.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::SwapSide;

    fn correct(raw: char) -> TypedCharacter {
        TypedCharacter::new(raw, CharacterKind::Correct)
    }

    #[test]
    fn test_uniform_construction() {
        let text = TypedText::uniform("hi!", CharacterKind::Extra);
        assert_eq!(text.len(), 3);
        assert!(text.iter().all(|ch| ch.kind.is_extra()));
    }

    #[test]
    fn test_raw_value_includes_misspell_payload() {
        let text = TypedText::from_characters(vec![
            correct('H'),
            TypedCharacter::new('o', CharacterKind::Misspell('e')),
            correct('l'),
        ]);
        assert_eq!(text.raw_value(), "Hoel");
    }

    #[test]
    fn test_absolutely_right() {
        let mut chars = vec![correct('o'), correct('k')];
        assert!(TypedText::from_characters(chars.clone()).is_absolutely_right());

        chars[1].correct_case = Some(false);
        assert!(!TypedText::from_characters(chars.clone()).is_absolutely_right());

        chars[1].correct_case = Some(true);
        assert!(TypedText::from_characters(chars).is_absolutely_right());
    }

    #[test]
    fn test_completely_wrong() {
        let text = TypedText::from_characters(vec![
            TypedCharacter::new('a', CharacterKind::Extra),
            TypedCharacter::new('b', CharacterKind::Missing),
            TypedCharacter::new('c', CharacterKind::Misspell('d')),
        ]);
        assert!(text.is_completely_wrong());
        assert!(!TypedText::uniform("a", CharacterKind::Correct).is_completely_wrong());
    }

    #[test]
    fn test_typo_count_swap_pair_is_one_mistake() {
        let text = TypedText::from_characters(vec![
            correct('d'),
            TypedCharacter::new('y', CharacterKind::Swapped(SwapSide::Left)),
            TypedCharacter::new('a', CharacterKind::Swapped(SwapSide::Right)),
        ]);
        assert_eq!(text.typo_and_mistake_count(), 1);
        assert_eq!(text.effective_len(), 2);
        assert_eq!(text.correct_count(), 1);
    }

    #[test]
    fn test_wrong_letter_case_count() {
        let text = TypedText::from_characters(vec![
            TypedCharacter::with_case('h', CharacterKind::Correct, Some(false)),
            TypedCharacter::with_case('i', CharacterKind::Correct, Some(true)),
            correct('!'),
        ]);
        assert_eq!(text.wrong_letter_case_count(), 1);
    }

    #[test]
    fn test_case_transforms_clear_case_info() {
        let text = TypedText::from_characters(vec![TypedCharacter::with_case(
            'H',
            CharacterKind::Correct,
            Some(false),
        )]);
        let lowered = text.lowercased();
        assert_eq!(lowered.characters()[0].raw, 'h');
        assert_eq!(lowered.characters()[0].correct_case, None);
    }

    #[test]
    fn test_case_transforms_reach_misspell_payload() {
        let text = TypedText::from_characters(vec![
            TypedCharacter::new('a', CharacterKind::Misspell('b')),
            TypedCharacter::new('C', CharacterKind::Misspell('D')),
        ]);
        let upper = text.uppercased();
        assert_eq!(upper.characters()[0].kind, CharacterKind::Misspell('B'));

        let capped = text.capitalized();
        assert_eq!(capped.characters()[0].raw, 'A');
        assert_eq!(capped.characters()[0].kind, CharacterKind::Misspell('B'));
        assert_eq!(capped.characters()[1].raw, 'c');
        assert_eq!(capped.characters()[1].kind, CharacterKind::Misspell('d'));
    }

    #[test]
    fn test_empty_text_queries() {
        let text = TypedText::new();
        assert!(text.is_empty());
        assert!(text.is_absolutely_right());
        assert!(text.is_completely_wrong());
        assert_eq!(text.typo_and_mistake_count(), 0);
        assert_eq!(text.raw_value(), "");
    }
}
