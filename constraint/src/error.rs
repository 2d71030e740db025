//! Validation error types.

use extent_core::CoreError;
use thiserror::Error;

use crate::violation::ConstraintViolation;

/// Result type for validating dynamic values.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors from [`validate_value`](crate::validate_value).
///
/// A `Violation` is a per-value outcome. A `Core` error means the value could
/// not be classified as a length-bearing candidate at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Violation(#[from] ConstraintViolation),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ValidationError {
    /// Get the violation if this is a per-value outcome.
    pub fn violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::Violation(v) => Some(v),
            Self::Core(_) => None,
        }
    }

    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }
}
