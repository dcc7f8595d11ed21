//! Rewriting a formed text into the user-facing annotation.
//!
//! Three passes run in order: [`adjust`] rotates runs of identical correct
//! characters so separated missing/extra pairs become adjacent in the
//! stream, [`fuse_misspells`] collapses such pairs into single misspells,
//! and [`detect_swaps`] relabels reversed neighbor pairs. Each pass leaves
//! anything it does not recognize untouched, so the whole rewrite is
//! idempotent: running it on its own output changes nothing.

mod adjustment;
mod fusion;
mod swaps;

pub use adjustment::adjust;
pub use fusion::fuse_misspells;
pub use swaps::detect_swaps;

use crate::config::AnalysisConfig;
use crate::text::TypedText;

/// Rewrite a formed text into its most readable equivalent, collapsing
/// missing/extra pairs into misspells and marking swapped neighbors.
///
/// Takes the same configuration as
/// [`form_text`](crate::formation::form_text); the rewrite passes compare
/// characters case-insensitively under every letter-case policy.
///
/// # Example
///
/// ```rust
/// use libtypo::config::AnalysisConfig;
/// use libtypo::editing::make_user_friendly;
/// use libtypo::formation::form_text;
/// use libtypo::text::{CharacterKind, SwapSide};
///
/// let config = AnalysisConfig::default();
/// let formed = form_text("dya", "day", &config);
/// let edited = make_user_friendly(formed, &config);
///
/// let kinds: Vec<CharacterKind> = edited.iter().map(|ch| ch.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         CharacterKind::Correct,
///         CharacterKind::Swapped(SwapSide::Left),
///         CharacterKind::Swapped(SwapSide::Right),
///     ]
/// );
/// ```
pub fn make_user_friendly(text: TypedText, _config: &AnalysisConfig) -> TypedText {
    let mut characters = text.into_characters();
    adjust(&mut characters);
    fuse_misspells(&mut characters);
    detect_swaps(&mut characters);
    TypedText::from_characters(characters)
}
