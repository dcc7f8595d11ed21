//! Compliance gates: is this comparison worth annotating at all?
//!
//! The quick gate runs before the alignment on cheap character counts and
//! is deliberately optimistic; a pass is necessary but not sufficient. The
//! exact gate re-checks against the computed basis. A failure of either is
//! a classification outcome, not an error: the caller renders the compared
//! text as all-extra.

use crate::alignment::{count_common_chars, Basis};
use crate::config::AnalysisConfig;

/// Cheap pre-alignment gate over common-character counts.
///
/// Fails when the texts share no characters, when fewer characters are
/// shared than `required_correct_chars` demands, or when more characters
/// than `acceptable_wrong_chars` allows would necessarily be wrong.
pub fn passes_quick_compliance(compared: &str, accurate: &str, config: &AnalysisConfig) -> bool {
    let common = count_common_chars(compared, accurate);
    if common == 0 {
        return false;
    }

    let compared_len = compared.chars().count();
    let accurate_len = accurate.chars().count();

    if let Some(required) = config.required_correct_chars() {
        // Clamped like the exact gate, so a threshold beyond the reference
        // length cannot fail here yet pass after alignment.
        if common < required.count_clamped(accurate_len) {
            return false;
        }
    }

    if let Some(acceptable) = config.acceptable_wrong_chars() {
        let wrong_at_best = (compared_len - common).max(accurate_len - common);
        if wrong_at_best > acceptable.count(accurate_len) {
            return false;
        }
    }

    true
}

/// Post-alignment gate over the computed basis.
///
/// `wrong` counts compared characters outside the matched subsequence and
/// `missing` counts uncovered accurate characters; the gate takes the
/// larger of the two because the editor may later fuse one wrong and one
/// missing character into a single misspell.
pub fn passes_exact_compliance(basis: &Basis, accurate_len: usize, config: &AnalysisConfig) -> bool {
    if basis.subsequence().is_empty() {
        return false;
    }

    if let Some(required) = config.required_correct_chars() {
        if basis.subsequence().len() < required.count_clamped(accurate_len) {
            return false;
        }
    }

    if let Some(acceptable) = config.acceptable_wrong_chars() {
        let wrong = basis.sequence().len() - basis.subsequence().len();
        let missing = basis.missing_elements().len();
        if wrong.max(missing) > acceptable.count(accurate_len) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::calculate_basis;
    use crate::config::CharQuantity;

    #[test]
    fn test_quick_fails_without_common_chars() {
        let config = AnalysisConfig::default();
        assert!(!passes_quick_compliance("hi!", "bye", &config));
        assert!(passes_quick_compliance("hallo", "hello", &config));
    }

    #[test]
    fn test_quick_required_correct() {
        let config = AnalysisConfig::new().with_required_correct_chars(CharQuantity::ALL);
        assert!(passes_quick_compliance("hello", "hello", &config));
        assert!(!passes_quick_compliance("hell", "hello", &config));

        let half = AnalysisConfig::new().with_required_correct_chars(CharQuantity::HALF);
        assert!(passes_quick_compliance("hel", "hello", &half));
    }

    #[test]
    fn test_quick_acceptable_wrong() {
        let config = AnalysisConfig::new().with_acceptable_wrong_chars(CharQuantity::ONE);
        // One wrong character at best: passes.
        assert!(passes_quick_compliance("hallo", "hello", &config));
        // Two extra characters can never shrink below two wrong.
        assert!(!passes_quick_compliance("helloxx", "hello", &config));
    }

    #[test]
    fn test_exact_fails_on_empty_subsequence() {
        let config = AnalysisConfig::default();
        // Quick compliance passes ('o' is shared) but the only mapped
        // position cannot form a subsequence when nothing matches in order.
        let basis = calculate_basis("", "hello");
        assert!(!passes_exact_compliance(&basis, 5, &config));
    }

    #[test]
    fn test_exact_required_correct_is_clamped() {
        let config = AnalysisConfig::new().with_required_correct_chars(CharQuantity::Count(99));
        let basis = calculate_basis("hello", "hello");
        // 99 clamps to the reference length, which the identity match meets.
        assert!(passes_exact_compliance(&basis, 5, &config));
    }

    #[test]
    fn test_exact_acceptable_wrong_takes_worse_side() {
        let config = AnalysisConfig::new().with_acceptable_wrong_chars(CharQuantity::TWO);
        // "Hola" vs "Hello": two wrong compared chars, three missing.
        let basis = calculate_basis("Hola", "Hello");
        assert_eq!(basis.sequence().len() - basis.subsequence().len(), 2);
        assert_eq!(basis.missing_elements().len(), 3);
        assert!(!passes_exact_compliance(&basis, 5, &config));

        let three = AnalysisConfig::new().with_acceptable_wrong_chars(CharQuantity::THREE);
        assert!(passes_exact_compliance(&basis, 5, &three));
    }
}
