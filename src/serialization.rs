//! JSON serialization of annotated texts.
//!
//! Renderers and FFI layers usually want the annotation as data rather
//! than as Rust values; this module round-trips a [`TypedText`] through
//! JSON. Enabled with the `serialization` feature, which also derives
//! `Serialize`/`Deserialize` on the whole data model.
//!
//! # Example
//!
//! ```rust
//! use libtypo::config::AnalysisConfig;
//! use libtypo::serialization::{from_json, to_json};
//!
//! let text = libtypo::analyze("dya", "day", &AnalysisConfig::default());
//! let json = to_json(&text)?;
//! assert_eq!(from_json(&json)?, text);
//! # Ok::<(), libtypo::serialization::SerializationError>(())
//! ```

use crate::text::TypedText;

/// Error produced by JSON serialization or deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// The JSON encoder or decoder failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize an annotated text to a JSON string.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn to_json(text: &TypedText) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(text)?)
}

/// Deserialize an annotated text from a JSON string.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON for a typed text.
pub fn from_json(json: &str) -> Result<TypedText, SerializationError> {
    Ok(serde_json::from_str(json)?)
}
