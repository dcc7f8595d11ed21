//! Run rotation: move an extra character in front of the identical correct
//! run it trails, so the fusion pass can see the missing/extra pair.
//!
//! A stream like `correct missing correct extra` over identical characters
//! hides the pair: the extra sits behind the correct run while the missing
//! sits in front of it. Rotating the run one step
//! (`correct missing extra correct`) brings the two together without
//! changing which characters the user sees.

use crate::text::{eq_ignore_case, CharacterKind, TypedCharacter};

/// Rotate qualifying correct runs so trailing extras meet their missing
/// partners. Operates in place; the stream's length never changes.
pub fn adjust(characters: &mut [TypedCharacter]) {
    // Unclosed missing characters to the left, and the current run of
    // identical correct characters (started only while one is unclosed).
    let mut missing_count = 0usize;
    let mut run_start: Option<usize> = None;

    let mut index = 0;
    while index < characters.len() {
        match characters[index].kind {
            CharacterKind::Missing => {
                missing_count += 1;
                run_start = None;
            }
            CharacterKind::Correct => {
                if missing_count == 0 {
                    run_start = None;
                } else {
                    match run_start {
                        None => run_start = Some(index),
                        Some(start) => {
                            if !eq_ignore_case(characters[index].raw, characters[start].raw) {
                                missing_count = 0;
                                run_start = None;
                            }
                        }
                    }
                }
            }
            CharacterKind::Extra => {
                let rotatable = run_start.is_some_and(|start| {
                    missing_count > 0
                        && eq_ignore_case(characters[index].raw, characters[start].raw)
                });
                match (rotatable, run_start) {
                    (true, Some(start)) => {
                        rotate(characters, start, index);
                        run_start = Some(start + 1);
                        missing_count -= 1;
                    }
                    _ => {
                        missing_count = 0;
                        run_start = None;
                    }
                }
            }
            _ => {
                missing_count = 0;
                run_start = None;
            }
        }
        index += 1;
    }
}

/// Shift the run `[start, end)` one step right: `end` joins the run as a
/// correct character and `start` becomes the extra.
///
/// Case correctness travels with the characters: each rotated position
/// takes the previous position's `correct_case`, inverted when the raw
/// characters differ (inside a run they can differ only by case).
fn rotate(characters: &mut [TypedCharacter], start: usize, end: usize) {
    for index in (start + 1..=end).rev() {
        let inherited = characters[index - 1].correct_case;
        let case_differs = characters[index].raw != characters[index - 1].raw;
        characters[index].kind = CharacterKind::Correct;
        characters[index].correct_case = if case_differs {
            inherited.map(|case| !case)
        } else {
            inherited
        };
    }
    characters[start].kind = CharacterKind::Extra;
    characters[start].correct_case = None;
}
