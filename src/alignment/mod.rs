//! Index-level alignment of a compared text against an accurate text.
//!
//! The math core maps every position of the compared text back to a
//! position of the accurate text (or to nothing), then extracts the longest
//! strictly-increasing run of those mappings. The result is a [`Basis`]:
//! four index arrays over the accurate text's positions from which the
//! typed-character annotation is later formed.
//!
//! Matching is case-folded throughout; letter case is judged separately,
//! after position matching has decided which characters correspond.

mod enumeration;
mod lis;

pub use enumeration::{count_common_chars, EnumerationError, RawSequence};
pub use lis::longest_increasing_subsequence;

pub(crate) use enumeration::{enumerate_raw_sequences, CharPositions};

use crate::text::to_lower_scalar;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The index-level alignment of a compared text against an accurate text.
///
/// # Example
///
/// ```rust
/// use libtypo::alignment::calculate_basis;
///
/// let basis = calculate_basis("gotob", "robot");
/// assert_eq!(basis.sequence(), &[None, Some(1), Some(4), Some(1), Some(2)]);
/// assert_eq!(basis.subsequence(), &[1, 2]);
/// assert_eq!(basis.missing_elements(), &[0, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Basis {
    source_sequence: Vec<usize>,
    sequence: Vec<Option<usize>>,
    subsequence: Vec<usize>,
    missing_elements: Vec<usize>,
}

impl Basis {
    /// Build a basis from a chosen sequence/subsequence pair, deriving the
    /// source sequence and the uncovered accurate positions.
    fn from_alignment(
        accurate_len: usize,
        sequence: Vec<Option<usize>>,
        subsequence: Vec<usize>,
    ) -> Self {
        // The subsequence is strictly increasing, so one forward scan
        // finds everything it does not cover.
        let mut missing_elements = Vec::with_capacity(accurate_len - subsequence.len());
        let mut covered = subsequence.iter().peekable();
        for element in 0..accurate_len {
            if covered.peek() == Some(&&element) {
                covered.next();
            } else {
                missing_elements.push(element);
            }
        }
        Self {
            source_sequence: (0..accurate_len).collect(),
            sequence,
            subsequence,
            missing_elements,
        }
    }

    /// The basis of two equal texts of length `len`.
    fn identity(len: usize) -> Self {
        Self {
            source_sequence: (0..len).collect(),
            sequence: (0..len).map(Some).collect(),
            subsequence: (0..len).collect(),
            missing_elements: Vec::new(),
        }
    }

    /// A basis with no matches at all.
    fn unmatched(compared_len: usize, accurate_len: usize) -> Self {
        Self {
            source_sequence: (0..accurate_len).collect(),
            sequence: vec![None; compared_len],
            subsequence: Vec::new(),
            missing_elements: (0..accurate_len).collect(),
        }
    }

    /// Every position of the accurate text, in order.
    pub fn source_sequence(&self) -> &[usize] {
        &self.source_sequence
    }

    /// For each compared-text position, the accurate-text index it maps to,
    /// or `None` for unmapped.
    pub fn sequence(&self) -> &[Option<usize>] {
        &self.sequence
    }

    /// The longest strictly-increasing run extracted from the mapped
    /// entries of the sequence.
    pub fn subsequence(&self) -> &[usize] {
        &self.subsequence
    }

    /// Positions of the accurate text left uncovered by the subsequence.
    pub fn missing_elements(&self) -> &[usize] {
        &self.missing_elements
    }
}

/// Compute the alignment basis of `compared` against `accurate`.
///
/// Both inputs are case-folded before comparison; case differences never
/// influence which positions match.
///
/// The enumeration behind the alignment is combinatorial: a character
/// occurring `k` times in the compared text and `m` times in the accurate
/// text contributes `C(m + k - 1, k)` candidate placements, multiplied
/// across characters. Callers with long, repetitive inputs should
/// pre-split them or use [`try_calculate_basis`] with a cap.
///
/// # Example
///
/// ```rust
/// use libtypo::alignment::calculate_basis;
///
/// let basis = calculate_basis("dya", "day");
/// assert_eq!(basis.sequence(), &[Some(0), Some(2), Some(1)]);
/// assert_eq!(basis.subsequence(), &[0, 1]);
/// assert_eq!(basis.missing_elements(), &[2]);
/// ```
pub fn calculate_basis(compared: &str, accurate: &str) -> Basis {
    match try_calculate_basis(compared, accurate, None) {
        Ok(basis) => basis,
        // Unreachable without a cap; fall back to the no-match shape.
        Err(_) => Basis::unmatched(compared.chars().count(), accurate.chars().count()),
    }
}

/// Compute the alignment basis with an optional cap on how many raw
/// sequences the enumeration may produce.
///
/// # Errors
///
/// Returns [`EnumerationError::LimitExceeded`] when the cap is tripped.
pub fn try_calculate_basis(
    compared: &str,
    accurate: &str,
    max_raw_sequences: Option<usize>,
) -> Result<Basis, EnumerationError> {
    let compared: Vec<char> = compared.chars().map(to_lower_scalar).collect();
    let accurate: Vec<char> = accurate.chars().map(to_lower_scalar).collect();
    basis_of(&compared, &accurate, max_raw_sequences)
}

fn basis_of(
    compared: &[char],
    accurate: &[char],
    limit: Option<usize>,
) -> Result<Basis, EnumerationError> {
    if compared == accurate {
        return Ok(Basis::identity(accurate.len()));
    }

    // Strip the common prefix and suffix and align only the inner slices;
    // the stripped indices are re-stitched afterwards.
    let prefix = compared
        .iter()
        .zip(accurate)
        .take_while(|(c, a)| c == a)
        .count();
    let max_suffix = compared.len().min(accurate.len()) - prefix;
    let suffix = compared
        .iter()
        .rev()
        .zip(accurate.iter().rev())
        .take(max_suffix)
        .take_while(|(c, a)| c == a)
        .count();

    if prefix > 0 || suffix > 0 {
        let inner = basis_of(
            &compared[prefix..compared.len() - suffix],
            &accurate[prefix..accurate.len() - suffix],
            limit,
        )?;
        return Ok(stitch(inner, prefix, suffix, accurate.len()));
    }

    let index = CharPositions::index(accurate);
    let raw_sequences = enumerate_raw_sequences(compared, &index, limit)?;
    let (sequence, subsequence) = select_best_pair(raw_sequences);
    Ok(Basis::from_alignment(accurate.len(), sequence, subsequence))
}

/// Re-attach a stripped common prefix and suffix to an inner basis.
fn stitch(inner: Basis, prefix: usize, suffix: usize, accurate_len: usize) -> Basis {
    let mut sequence: Vec<Option<usize>> = (0..prefix).map(Some).collect();
    sequence.extend(
        inner
            .sequence
            .iter()
            .map(|entry| entry.map(|index| index + prefix)),
    );
    sequence.extend((accurate_len - suffix..accurate_len).map(Some));

    let mut subsequence: Vec<usize> = (0..prefix).collect();
    subsequence.extend(inner.subsequence.iter().map(|index| index + prefix));
    subsequence.extend(accurate_len - suffix..accurate_len);

    let missing_elements = inner
        .missing_elements
        .iter()
        .map(|index| index + prefix)
        .collect();

    Basis {
        source_sequence: (0..accurate_len).collect(),
        sequence,
        subsequence,
        missing_elements,
    }
}

/// Pick the best `(sequence, subsequence)` pair: maximal subsequence
/// length first, then smallest element sum, then first in enumeration
/// order.
fn select_best_pair(raw_sequences: Vec<RawSequence>) -> (RawSequence, Vec<usize>) {
    let mut best: Option<(RawSequence, Vec<usize>, usize)> = None;
    for sequence in raw_sequences {
        let subsequence = longest_increasing_subsequence(&sequence);
        let sum: usize = subsequence.iter().sum();
        let improves = match &best {
            None => true,
            Some((_, best_subsequence, best_sum)) => {
                subsequence.len() > best_subsequence.len()
                    || (subsequence.len() == best_subsequence.len() && sum < *best_sum)
            }
        };
        if improves {
            best = Some((sequence, subsequence, sum));
        }
    }
    match best {
        Some((sequence, subsequence, _)) => (sequence, subsequence),
        None => (Vec::new(), Vec::new()),
    }
}
