//! Constraint violation types.

use extent_core::CandidateKind;
use serde::Serialize;
use serde_json::json;
use std::fmt;

use crate::messages::{self, English, ErrorCode, MessageCatalog};

/// Which bound a value crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Below `min_length`, or whitespace-only text under a positive `min_length`.
    TooShort,
    /// Above `max_length`.
    TooLong,
}

/// A length constraint violation.
///
/// `actual_length` is always the raw length of the value: chars for text,
/// bytes for byte strings, items for sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConstraintViolation {
    /// The bound that was crossed.
    pub kind: ViolationKind,
    /// The configured bound.
    pub limit: usize,
    /// The length observed.
    pub actual_length: usize,
    /// The kind of value that was measured.
    pub candidate_kind: CandidateKind,
    /// Set when the text was rejected for being whitespace-only.
    pub whitespace_only: bool,
}

impl ConstraintViolation {
    /// Create a lower-bound violation.
    pub fn too_short(candidate_kind: CandidateKind, limit: usize, actual_length: usize) -> Self {
        Self {
            kind: ViolationKind::TooShort,
            limit,
            actual_length,
            candidate_kind,
            whitespace_only: false,
        }
    }

    /// Create an upper-bound violation.
    pub fn too_long(candidate_kind: CandidateKind, limit: usize, actual_length: usize) -> Self {
        Self {
            kind: ViolationKind::TooLong,
            limit,
            actual_length,
            candidate_kind,
            whitespace_only: false,
        }
    }

    /// Create the lower-bound violation for whitespace-only text.
    pub fn whitespace_only(limit: usize, actual_length: usize) -> Self {
        Self {
            whitespace_only: true,
            ..Self::too_short(CandidateKind::Text, limit, actual_length)
        }
    }

    pub fn is_too_short(&self) -> bool {
        matches!(self.kind, ViolationKind::TooShort)
    }

    pub fn is_too_long(&self) -> bool {
        matches!(self.kind, ViolationKind::TooLong)
    }

    /// Stable machine code for this violation.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::for_violation(self.kind, self.candidate_kind)
    }

    /// Structured context for the caller's error envelope.
    pub fn context(&self) -> serde_json::Value {
        let bound = match self.kind {
            ViolationKind::TooShort => "min_length",
            ViolationKind::TooLong => "max_length",
        };
        let mut context = json!({
            bound: self.limit,
            "actual_length": self.actual_length,
        });
        if self.candidate_kind == CandidateKind::Sequence {
            context["field_type"] = json!(messages::field_type(self.candidate_kind));
        }
        context
    }

    /// Render a message using the given catalog.
    pub fn render(&self, catalog: &dyn MessageCatalog) -> String {
        messages::render(&catalog.template(self.code()), self)
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&English))
    }
}

impl std::error::Error for ConstraintViolation {}
