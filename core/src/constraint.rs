//! Length constraint descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CoreError, CoreResult};

/// Inclusive length bounds supplied with each validation call.
///
/// An absent bound is unbounded on that side. `min_length: Some(0)` behaves
/// exactly like an absent lower bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthConstraint {
    /// Inclusive lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Inclusive upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl LengthConstraint {
    pub fn new(min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// A constraint with neither bound.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Lower bound only.
    pub fn min(min_length: usize) -> Self {
        Self::new(Some(min_length), None)
    }

    /// Upper bound only.
    pub fn max(max_length: usize) -> Self {
        Self::new(None, Some(max_length))
    }

    /// Both bounds.
    pub fn between(min_length: usize, max_length: usize) -> Self {
        Self::new(Some(min_length), Some(max_length))
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Returns true if no bound is declared.
    pub fn is_unbounded(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none()
    }

    /// Returns the lower bound when it demands non-blank text (`min_length > 0`).
    pub fn required_min(&self) -> Option<usize> {
        self.min_length.filter(|&min| min > 0)
    }

    /// Check the `min_length <= max_length` invariant.
    ///
    /// The validator assumes this holds; descriptors built by hand can be
    /// checked here before use.
    pub fn ensure_ordered(self) -> CoreResult<Self> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Err(CoreError::inverted_bounds(min, max)),
            _ => Ok(self),
        }
    }

    /// Load a descriptor from JSON, e.g. `{"min_length": 1, "max_length": 64}`.
    pub fn from_json(source: &str) -> CoreResult<Self> {
        let constraint: LengthConstraint = serde_json::from_str(source)?;
        constraint.ensure_ordered()
    }
}

impl fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min_length, self.max_length) {
            (None, None) => write!(f, "[..]"),
            (Some(min), None) => write!(f, "[{}..]", min),
            (None, Some(max)) => write!(f, "[..={}]", max),
            (Some(min), Some(max)) => write!(f, "[{}..={}]", min, max),
        }
    }
}
