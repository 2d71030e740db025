//! Extent Core Types
//!
//! This crate provides the foundational types used by the length validator:
//! - Value types (the dynamic `Value` enum carried inside sequences)
//! - Candidates (the closed set of length-bearing kinds: text, bytes, sequence)
//! - The `LengthConstraint` descriptor and its configuration loader
//! - Common error types

mod candidate;
mod constraint;
mod error;
mod value;

pub use candidate::*;
pub use constraint::*;
pub use error::*;
pub use value::*;
