//! Misspell fusion: collapse a missing/extra pair into one misspell.
//!
//! A missing character tells which character was intended; an extra
//! character tells what was typed instead. When both sides of such a pair
//! are open at the same time they describe a single misspelled character,
//! so the extra becomes `Misspell(intended)` and the missing disappears.

use std::collections::VecDeque;

use crate::text::{CharacterKind, TypedCharacter};

/// Fuse adjacent-in-stream missing/extra pairs into misspells, in place.
///
/// Pending positions queue up per side; any character that is neither
/// missing nor extra closes both queues.
pub fn fuse_misspells(characters: &mut Vec<TypedCharacter>) {
    let mut pending_missing: VecDeque<usize> = VecDeque::new();
    let mut pending_extra: VecDeque<usize> = VecDeque::new();

    let mut index = 0;
    while index < characters.len() {
        match characters[index].kind {
            CharacterKind::Missing => {
                if let Some(extra) = pending_extra.pop_front() {
                    let intended = characters[index].raw;
                    characters[extra].kind = CharacterKind::Misspell(intended);
                    characters[extra].correct_case = None;
                    characters.remove(index);
                    // The next character slid into `index`; queued positions
                    // all lie before the removal point.
                } else {
                    pending_missing.push_back(index);
                    index += 1;
                }
            }
            CharacterKind::Extra => {
                if let Some(missing) = pending_missing.pop_front() {
                    let intended = characters[missing].raw;
                    characters[index].kind = CharacterKind::Misspell(intended);
                    characters[index].correct_case = None;
                    characters.remove(missing);
                    for queued in pending_missing.iter_mut() {
                        *queued -= 1;
                    }
                    // Removing before `index` shifted the stream left; the
                    // next unprocessed character now sits at `index`.
                } else {
                    pending_extra.push_back(index);
                    index += 1;
                }
            }
            _ => {
                pending_missing.clear();
                pending_extra.clear();
                index += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(raw: char, kind: CharacterKind) -> TypedCharacter {
        TypedCharacter::new(raw, kind)
    }

    fn kinds(characters: &[TypedCharacter]) -> Vec<CharacterKind> {
        characters.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_extra_then_missing_fuses() {
        let mut characters = vec![
            ch('o', CharacterKind::Extra),
            ch('e', CharacterKind::Missing),
        ];
        fuse_misspells(&mut characters);
        assert_eq!(kinds(&characters), vec![CharacterKind::Misspell('e')]);
        assert_eq!(characters[0].raw, 'o');
    }

    #[test]
    fn test_missing_then_extra_fuses() {
        let mut characters = vec![
            ch('a', CharacterKind::Missing),
            ch('y', CharacterKind::Extra),
        ];
        fuse_misspells(&mut characters);
        assert_eq!(kinds(&characters), vec![CharacterKind::Misspell('a')]);
        assert_eq!(characters[0].raw, 'y');
    }

    #[test]
    fn test_correct_closes_pending_pairs() {
        let mut characters = vec![
            ch('x', CharacterKind::Extra),
            ch('k', CharacterKind::Correct),
            ch('m', CharacterKind::Missing),
        ];
        let before = characters.clone();
        fuse_misspells(&mut characters);
        assert_eq!(characters, before);
    }

    #[test]
    fn test_multiple_pairs_fuse_oldest_first() {
        let mut characters = vec![
            ch('p', CharacterKind::Missing),
            ch('q', CharacterKind::Missing),
            ch('x', CharacterKind::Extra),
            ch('y', CharacterKind::Extra),
        ];
        fuse_misspells(&mut characters);
        assert_eq!(
            kinds(&characters),
            vec![CharacterKind::Misspell('p'), CharacterKind::Misspell('q')]
        );
        assert_eq!(characters[0].raw, 'x');
        assert_eq!(characters[1].raw, 'y');
    }

    #[test]
    fn test_unbalanced_missing_survives() {
        let mut characters = vec![
            ch('a', CharacterKind::Missing),
            ch('b', CharacterKind::Missing),
            ch('x', CharacterKind::Extra),
        ];
        fuse_misspells(&mut characters);
        assert_eq!(
            kinds(&characters),
            vec![CharacterKind::Missing, CharacterKind::Misspell('a')]
        );
        assert_eq!(characters[0].raw, 'b');
        assert_eq!(characters[1].raw, 'x');
    }

    #[test]
    fn test_fused_misspell_clears_case_flag() {
        let mut characters = vec![
            TypedCharacter::with_case('o', CharacterKind::Extra, Some(false)),
            ch('e', CharacterKind::Missing),
        ];
        fuse_misspells(&mut characters);
        assert_eq!(characters[0].correct_case, None);
    }

    #[test]
    fn test_mixed_stream() {
        // h [o->e misspell] l [a->l misspell] o-missing, as in Hola/Hello.
        let mut characters = vec![
            ch('H', CharacterKind::Correct),
            ch('o', CharacterKind::Extra),
            ch('e', CharacterKind::Missing),
            ch('l', CharacterKind::Correct),
            ch('a', CharacterKind::Extra),
            ch('l', CharacterKind::Missing),
            ch('o', CharacterKind::Missing),
        ];
        fuse_misspells(&mut characters);
        assert_eq!(
            kinds(&characters),
            vec![
                CharacterKind::Correct,
                CharacterKind::Misspell('e'),
                CharacterKind::Correct,
                CharacterKind::Misspell('l'),
                CharacterKind::Missing,
            ]
        );
    }
}
