//! Length validation.

use extent_core::{Candidate, LengthConstraint, Value};
use tracing::{debug, trace};

use crate::error::ValidationResult;
use crate::violation::ConstraintViolation;

/// Validate a candidate against a constraint, returning it unchanged on success.
pub fn validate(
    candidate: Candidate,
    constraint: &LengthConstraint,
) -> Result<Candidate, ConstraintViolation> {
    LengthValidator::new(*constraint).validate(candidate)
}

/// Check a borrowed candidate against a constraint.
pub fn check(candidate: &Candidate, constraint: &LengthConstraint) -> Result<(), ConstraintViolation> {
    LengthValidator::new(*constraint).check(candidate)
}

/// Classify a dynamic value, then validate it.
///
/// Values without a length (null, booleans, numbers) are rejected before any
/// bound is consulted.
pub fn validate_value(value: Value, constraint: &LengthConstraint) -> ValidationResult<Candidate> {
    let candidate = Candidate::try_from(value)?;
    Ok(validate(candidate, constraint)?)
}

/// Length validator bound to one constraint.
///
/// Holds no state beyond the constraint, so a single validator can be shared
/// across threads and reused for any number of values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthValidator {
    constraint: LengthConstraint,
}

impl LengthValidator {
    /// Create a new validator.
    pub fn new(constraint: LengthConstraint) -> Self {
        Self { constraint }
    }

    /// Get the constraint this validator enforces.
    pub fn constraint(&self) -> &LengthConstraint {
        &self.constraint
    }

    /// Validate a candidate, handing it back untouched when it passes.
    pub fn validate(&self, candidate: Candidate) -> Result<Candidate, ConstraintViolation> {
        self.check(&candidate)?;
        Ok(candidate)
    }

    /// Check a candidate without taking ownership.
    pub fn check(&self, candidate: &Candidate) -> Result<(), ConstraintViolation> {
        // No bound: never measure the value
        if self.constraint.is_unbounded() {
            trace!(candidate_kind = %candidate.kind(), "no length bounds declared");
            return Ok(());
        }

        let actual_length = candidate.len();

        if let Some(violation) = self.whitespace_only_violation(candidate, actual_length) {
            return Err(reject(violation));
        }

        if let Some(min) = self.constraint.min_length {
            if actual_length < min {
                return Err(reject(ConstraintViolation::too_short(
                    candidate.kind(),
                    min,
                    actual_length,
                )));
            }
        }

        if let Some(max) = self.constraint.max_length {
            if actual_length > max {
                return Err(reject(ConstraintViolation::too_long(
                    candidate.kind(),
                    max,
                    actual_length,
                )));
            }
        }

        Ok(())
    }

    /// Text that is blank once trimmed fails any positive lower bound,
    /// whatever its raw length.
    fn whitespace_only_violation(
        &self,
        candidate: &Candidate,
        actual_length: usize,
    ) -> Option<ConstraintViolation> {
        let min = self.constraint.required_min()?;
        let text = candidate.as_text()?;
        is_blank(text).then(|| ConstraintViolation::whitespace_only(min, actual_length))
    }
}

/// True for the empty string and for text made only of Unicode whitespace.
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn reject(violation: ConstraintViolation) -> ConstraintViolation {
    debug!(
        kind = ?violation.kind,
        limit = violation.limit,
        actual_length = violation.actual_length,
        candidate_kind = %violation.candidate_kind,
        whitespace_only = violation.whitespace_only,
        "length constraint violated"
    );
    violation
}
