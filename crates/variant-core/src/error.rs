//! # Error Types
//!
//! Construction of a culture variant has exactly one precondition: the
//! culture identifier must not be blank. Every other operation on a variant
//! is total. The remaining variants of [`VariantError`] cover the helpers
//! around it (timestamp parsing, loading a collection).

use thiserror::Error;

/// Top-level error type for culture variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// An argument failed validation.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected argument.
        argument: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A timestamp string could not be parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The same culture appeared twice in one collection.
    #[error("duplicate culture in variant collection: {0}")]
    DuplicateCulture(String),
}

impl VariantError {
    /// Whether this is an argument validation failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
