//! Error codes and message templates for length violations.
//!
//! Codes are stable and meant for machines; templates are meant for people
//! and can be swapped per locale through [`MessageCatalog`].

use extent_core::CandidateKind;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use crate::violation::{ConstraintViolation, ViolationKind};

/// Stable identifier for a violation, per bound and candidate kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    StringTooShort,
    StringTooLong,
    BytesTooShort,
    BytesTooLong,
    /// Sequence below its lower bound.
    TooShort,
    /// Sequence above its upper bound.
    TooLong,
}

impl ErrorCode {
    pub fn for_violation(kind: ViolationKind, candidate_kind: CandidateKind) -> Self {
        match (candidate_kind, kind) {
            (CandidateKind::Text, ViolationKind::TooShort) => ErrorCode::StringTooShort,
            (CandidateKind::Text, ViolationKind::TooLong) => ErrorCode::StringTooLong,
            (CandidateKind::Bytes, ViolationKind::TooShort) => ErrorCode::BytesTooShort,
            (CandidateKind::Bytes, ViolationKind::TooLong) => ErrorCode::BytesTooLong,
            (CandidateKind::Sequence, ViolationKind::TooShort) => ErrorCode::TooShort,
            (CandidateKind::Sequence, ViolationKind::TooLong) => ErrorCode::TooLong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::StringTooShort => "string_too_short",
            ErrorCode::StringTooLong => "string_too_long",
            ErrorCode::BytesTooShort => "bytes_too_short",
            ErrorCode::BytesTooLong => "bytes_too_long",
            ErrorCode::TooShort => "too_short",
            ErrorCode::TooLong => "too_long",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of message templates.
///
/// Templates may use `{min_length}`, `{max_length}`, `{actual_length}`,
/// `{expected_plural}` and `{field_type}`.
pub trait MessageCatalog: Send + Sync {
    fn template(&self, code: ErrorCode) -> Cow<'static, str>;
}

/// The default English catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl MessageCatalog for English {
    fn template(&self, code: ErrorCode) -> Cow<'static, str> {
        Cow::Borrowed(match code {
            ErrorCode::StringTooShort => {
                "String should have at least {min_length} character{expected_plural}"
            }
            ErrorCode::StringTooLong => {
                "String should have at most {max_length} character{expected_plural}"
            }
            ErrorCode::BytesTooShort => "Data should have at least {min_length} byte{expected_plural}",
            ErrorCode::BytesTooLong => "Data should have at most {max_length} byte{expected_plural}",
            ErrorCode::TooShort => {
                "{field_type} should have at least {min_length} item{expected_plural} after validation, not {actual_length}"
            }
            ErrorCode::TooLong => {
                "{field_type} should have at most {max_length} item{expected_plural} after validation, not {actual_length}"
            }
        })
    }
}

/// Overrides keyed by code; missing codes fall back to English.
impl<S> MessageCatalog for HashMap<ErrorCode, String, S>
where
    S: BuildHasher + Send + Sync,
{
    fn template(&self, code: ErrorCode) -> Cow<'static, str> {
        match self.get(&code) {
            Some(template) => Cow::Owned(template.clone()),
            None => English.template(code),
        }
    }
}

/// Label used for `{field_type}`.
pub(crate) fn field_type(candidate_kind: CandidateKind) -> &'static str {
    match candidate_kind {
        CandidateKind::Text => "String",
        CandidateKind::Bytes => "Data",
        CandidateKind::Sequence => "List",
    }
}

pub(crate) fn render(template: &str, violation: &ConstraintViolation) -> String {
    let limit = violation.limit.to_string();
    let (min_length, max_length) = match violation.kind {
        ViolationKind::TooShort => (limit.as_str(), ""),
        ViolationKind::TooLong => ("", limit.as_str()),
    };
    let expected_plural = if violation.limit == 1 { "" } else { "s" };

    template
        .replace("{min_length}", min_length)
        .replace("{max_length}", max_length)
        .replace("{actual_length}", &violation.actual_length.to_string())
        .replace("{expected_plural}", expected_plural)
        .replace("{field_type}", field_type(violation.candidate_kind))
}
