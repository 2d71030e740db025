//! Extent Constraint
//!
//! Validate a value's length against declared bounds.
//!
//! Responsibilities:
//! - Measure text, bytes and sequences under their own counting rules
//! - Reject whitespace-only text whenever a positive lower bound is declared
//! - Report violations as inspectable values (kind, limit, actual length)
//! - Render localizable messages from stable error codes
//!
//! ```
//! use extent_constraint::{validate, ViolationKind};
//! use extent_core::{Candidate, LengthConstraint};
//!
//! let accepted = validate(Candidate::from(" a "), &LengthConstraint::min(1)).unwrap();
//! assert_eq!(accepted, Candidate::from(" a "));
//!
//! let violation = validate(Candidate::from("   "), &LengthConstraint::min(1)).unwrap_err();
//! assert_eq!(violation.kind, ViolationKind::TooShort);
//! assert_eq!(violation.actual_length, 3);
//! ```

mod error;
mod messages;
mod validator;
mod violation;

pub use error::{ValidationError, ValidationResult};
pub use messages::{English, ErrorCode, MessageCatalog};
pub use validator::{check, validate, validate_value, LengthValidator};
pub use violation::{ConstraintViolation, ViolationKind};
