//! The typed-character data model.
//!
//! Every stage of the analysis pipeline produces a [`TypedText`]: an ordered
//! sequence of [`TypedCharacter`]s, each labeled with a [`CharacterKind`].
//! The model also carries letter-case information separately from position
//! matching, so case mistakes never affect alignment.

mod character;
mod typed_text;

pub use character::{CharacterKind, SwapSide, TypedCharacter};
pub use typed_text::TypedText;

pub(crate) use character::{eq_ignore_case, to_lower_scalar, to_upper_scalar};
