//! Common error types for Extent.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while classifying candidates or loading constraint descriptors.
///
/// None of these are per-value validation outcomes; a value that fails its
/// bounds is reported as a `ConstraintViolation` by the validator crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The value does not expose a length.
    #[error("Unsupported kind: {type_name} values have no length")]
    UnsupportedKind { type_name: String },

    /// A constraint descriptor could not be parsed.
    #[error("Invalid constraint config: {message}")]
    InvalidConfig { message: String },

    /// A constraint descriptor declares `min_length > max_length`.
    #[error("Inverted bounds: min_length {min_length} exceeds max_length {max_length}")]
    InvertedBounds { min_length: usize, max_length: usize },
}

impl CoreError {
    pub fn unsupported_kind(type_name: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            type_name: type_name.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn inverted_bounds(min_length: usize, max_length: usize) -> Self {
        Self::InvertedBounds {
            min_length,
            max_length,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig {
            message: e.to_string(),
        }
    }
}
