//! Longest strictly-increasing subsequence with a deterministic tie-break.

/// Compute the longest strictly-increasing subsequence of the mapped
/// entries of `sequence`, preferring the lexicographically smallest
/// subsequence among equals.
///
/// Unmapped entries (`None`) are skipped. The algorithm keeps, for every
/// achievable length, the lexicographically smallest strictly-increasing
/// subsequence of that length seen so far; on each new element the slot to
/// extend or replace is found by binary search over the slots' last
/// elements (which are strictly increasing across slots).
///
/// The tie-break matters downstream: among subsequences of maximal length
/// this returns the one with the smallest last element and, transitively,
/// the lexicographically smallest overall, so repeated runs over the same
/// input always produce the same annotation.
///
/// # Example
///
/// ```rust
/// use libtypo::alignment::longest_increasing_subsequence;
///
/// let sequence = vec![Some(1), Some(4), Some(3), Some(2)];
/// assert_eq!(longest_increasing_subsequence(&sequence), vec![1, 2]);
///
/// let sequence = vec![None, Some(1), Some(4), Some(1), Some(2)];
/// assert_eq!(longest_increasing_subsequence(&sequence), vec![1, 2]);
/// ```
pub fn longest_increasing_subsequence(sequence: &[Option<usize>]) -> Vec<usize> {
    let mut slots: Vec<Vec<usize>> = Vec::new();

    for entry in sequence {
        let Some(element) = *entry else { continue };

        // First slot whose last element is >= the new element; the slots'
        // last elements are strictly increasing, so this is binary-searchable.
        let slot = slots.partition_point(|s| s.last().is_some_and(|&last| last < element));

        if slot == slots.len() {
            // Extends the longest subsequence seen so far.
            let mut extended = slots.last().cloned().unwrap_or_default();
            extended.push(element);
            slots.push(extended);
        } else if slot == 0 {
            slots[0] = vec![element];
        } else {
            let mut replacement = slots[slot - 1].clone();
            replacement.push(element);
            slots[slot] = replacement;
        }
    }

    slots.pop().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lis_of(values: &[usize]) -> Vec<usize> {
        let sequence: Vec<Option<usize>> = values.iter().map(|&v| Some(v)).collect();
        longest_increasing_subsequence(&sequence)
    }

    #[test]
    fn test_empty_and_unmapped_only() {
        assert_eq!(longest_increasing_subsequence(&[]), Vec::<usize>::new());
        assert_eq!(
            longest_increasing_subsequence(&[None, None]),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn test_already_increasing() {
        assert_eq!(lis_of(&[0, 1, 2, 3]), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_strictly_increasing_rejects_equal_elements() {
        assert_eq!(lis_of(&[2, 2, 2]), vec![2]);
        assert_eq!(lis_of(&[0, 2, 2]), vec![0, 2]);
    }

    #[test]
    fn test_prefers_smallest_last_element() {
        // Both [0, 2, 4] and [0, 2, 3] have length three; the smaller
        // tail must win.
        assert_eq!(lis_of(&[0, 2, 4, 3]), vec![0, 2, 3]);
    }

    #[test]
    fn test_prefers_lexicographically_smallest() {
        // [1, 4] and [1, 2] tie on length; [1, 2] is smaller.
        assert_eq!(lis_of(&[1, 4, 1, 2]), vec![1, 2]);
        // Replacement at the first slot restarts from the smaller head.
        assert_eq!(lis_of(&[3, 4, 3, 2]), vec![3, 4]);
    }

    #[test]
    fn test_decreasing_input() {
        assert_eq!(lis_of(&[5, 4, 3, 2, 1]), vec![1]);
    }

    #[test]
    fn test_skips_unmapped_entries() {
        let sequence = vec![Some(0), None, Some(4), None, Some(2)];
        assert_eq!(longest_increasing_subsequence(&sequence), vec![0, 2]);
    }
}
