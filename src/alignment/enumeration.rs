//! Enumeration of raw alignment sequences.
//!
//! For every position of the compared text the enumerator either records
//! *unmapped* (the character never occurs in the accurate text) or picks one
//! of the positions the character occupies in the accurate text. Within one
//! raw sequence the positions chosen for successive occurrences of the same
//! compared character must form a non-decreasing sequence; this prunes pure
//! permutations of identical characters that could never win under the
//! smallest-sum tie-break and only inflate the search.
//!
//! Even with that pruning the enumeration is combinatorial: a character
//! occurring `k` times in the compared text and `m` times in the accurate
//! text contributes `C(m + k - 1, k)` placements, and the total number of
//! raw sequences is the product of that quantity over all characters.
//! Callers are expected to pre-split long inputs (or set a cap) rather than
//! expect the enumerator to shortcut; returning fewer or shorter sequences
//! would silently degrade the alignment quality.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::text::to_lower_scalar;

/// One candidate alignment: for each compared-text position, the chosen
/// accurate-text index or `None` for unmapped.
pub type RawSequence = Vec<Option<usize>>;

/// Error produced when the enumeration cap is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EnumerationError {
    /// More raw sequences exist than the configured cap allows.
    #[error("raw sequence enumeration exceeded the cap of {limit}")]
    LimitExceeded {
        /// The cap that was exceeded.
        limit: usize,
    },
}

/// Index of a case-folded character sequence: for each character, the
/// sorted list of positions it occupies.
#[derive(Debug, Clone, Default)]
pub(crate) struct CharPositions {
    positions: FxHashMap<char, Vec<usize>>,
}

impl CharPositions {
    /// Build the index over already-folded characters.
    pub(crate) fn index(text: &[char]) -> Self {
        let mut positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (position, &c) in text.iter().enumerate() {
            positions.entry(c).or_default().push(position);
        }
        Self { positions }
    }

    /// Sorted positions of `c`, if it occurs at all.
    pub(crate) fn positions(&self, c: char) -> Option<&[usize]> {
        self.positions.get(&c).map(Vec::as_slice)
    }
}

/// Enumerate every raw sequence for `compared` against the indexed accurate
/// text, observing the non-decreasing placement constraint.
///
/// `limit`, when given, caps how many complete sequences may be collected;
/// one more finished sequence than the cap aborts the walk.
pub(crate) fn enumerate_raw_sequences(
    compared: &[char],
    index: &CharPositions,
    limit: Option<usize>,
) -> Result<Vec<RawSequence>, EnumerationError> {
    let mut sequences = Vec::new();
    let mut current: RawSequence = Vec::with_capacity(compared.len());
    let mut last_chosen: FxHashMap<char, usize> = FxHashMap::default();
    backtrack(
        compared,
        index,
        limit,
        &mut last_chosen,
        &mut current,
        &mut sequences,
    )?;
    Ok(sequences)
}

fn backtrack(
    remaining: &[char],
    index: &CharPositions,
    limit: Option<usize>,
    last_chosen: &mut FxHashMap<char, usize>,
    current: &mut RawSequence,
    sequences: &mut Vec<RawSequence>,
) -> Result<(), EnumerationError> {
    let Some((&c, rest)) = remaining.split_first() else {
        if let Some(limit) = limit {
            if sequences.len() >= limit {
                return Err(EnumerationError::LimitExceeded { limit });
            }
        }
        sequences.push(current.clone());
        return Ok(());
    };

    let candidates: SmallVec<[usize; 8]> = match index.positions(c) {
        None => SmallVec::new(),
        Some(positions) => {
            // Successive occurrences of the same character may not move
            // backwards; start from the previously chosen position.
            let start = match last_chosen.get(&c) {
                Some(&floor) => positions.partition_point(|&p| p < floor),
                None => 0,
            };
            SmallVec::from_slice(&positions[start..])
        }
    };

    if candidates.is_empty() {
        current.push(None);
        backtrack(rest, index, limit, last_chosen, current, sequences)?;
        current.pop();
        return Ok(());
    }

    for &position in &candidates {
        let previous = last_chosen.insert(c, position);
        current.push(Some(position));
        let outcome = backtrack(rest, index, limit, last_chosen, current, sequences);
        current.pop();
        match previous {
            Some(previous) => {
                last_chosen.insert(c, previous);
            }
            None => {
                last_chosen.remove(&c);
            }
        }
        outcome?;
    }
    Ok(())
}

/// Count characters common to both strings, case-folded.
///
/// For every character the smaller of its two occurrence counts
/// contributes; the result is symmetric in its arguments.
///
/// # Example
///
/// ```rust
/// use libtypo::alignment::count_common_chars;
///
/// assert_eq!(count_common_chars("hello", "hola"), 3); // h, l, o
/// assert_eq!(count_common_chars("bye", "hi!"), 0);
/// assert_eq!(count_common_chars("AA", "aaa"), 2);
/// ```
pub fn count_common_chars(compared: &str, accurate: &str) -> usize {
    let mut compared_counts: FxHashMap<char, usize> = FxHashMap::default();
    for c in compared.chars() {
        *compared_counts.entry(to_lower_scalar(c)).or_insert(0) += 1;
    }

    let mut accurate_counts: FxHashMap<char, usize> = FxHashMap::default();
    for c in accurate.chars() {
        *accurate_counts.entry(to_lower_scalar(c)).or_insert(0) += 1;
    }

    compared_counts
        .iter()
        .map(|(c, &count)| count.min(accurate_counts.get(c).copied().unwrap_or(0)))
        .sum()
}
