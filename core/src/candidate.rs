//! Length-bearing candidate values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CoreError, Value};

/// The kind of a candidate, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// Unicode text. Length counts Unicode scalar values.
    Text,
    /// Raw bytes. Length counts bytes.
    Bytes,
    /// Ordered collection. Length counts items.
    Sequence,
}

impl CandidateKind {
    /// Returns the name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            CandidateKind::Text => "Text",
            CandidateKind::Bytes => "Bytes",
            CandidateKind::Sequence => "Sequence",
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value offered to the length validator.
///
/// The kind is fixed at construction so the validator never probes the
/// payload's type at check time.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// A Unicode character sequence.
    Text(String),
    /// A raw byte sequence.
    Bytes(Vec<u8>),
    /// An ordered collection of arbitrary elements.
    Sequence(Vec<Value>),
}

impl Candidate {
    /// Returns the kind of this candidate.
    pub fn kind(&self) -> CandidateKind {
        match self {
            Candidate::Text(_) => CandidateKind::Text,
            Candidate::Bytes(_) => CandidateKind::Bytes,
            Candidate::Sequence(_) => CandidateKind::Sequence,
        }
    }

    /// Raw length under the kind's counting rule.
    ///
    /// Text is measured in chars, never UTF-8 bytes, and is never trimmed.
    pub fn len(&self) -> usize {
        match self {
            Candidate::Text(s) => s.chars().count(),
            Candidate::Bytes(b) => b.len(),
            Candidate::Sequence(items) => items.len(),
        }
    }

    /// Returns true if the raw length is zero.
    pub fn is_empty(&self) -> bool {
        match self {
            Candidate::Text(s) => s.is_empty(),
            Candidate::Bytes(b) => b.is_empty(),
            Candidate::Sequence(items) => items.is_empty(),
        }
    }

    /// Get the text content if this is a Text candidate.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Candidate::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert back into a dynamic value.
    pub fn into_value(self) -> Value {
        match self {
            Candidate::Text(s) => Value::String(s),
            Candidate::Bytes(b) => Value::Bytes(b),
            Candidate::Sequence(items) => Value::List(items),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Text(s) => write!(f, "{:?}", s),
            Candidate::Bytes(b) => write!(f, "b{:?}", String::from_utf8_lossy(b)),
            Candidate::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl TryFrom<Value> for Candidate {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Candidate::Text(s)),
            Value::Bytes(b) => Ok(Candidate::Bytes(b)),
            Value::List(items) => Ok(Candidate::Sequence(items)),
            other => Err(CoreError::unsupported_kind(other.type_name())),
        }
    }
}

impl From<String> for Candidate {
    fn from(s: String) -> Self {
        Candidate::Text(s)
    }
}

impl From<&str> for Candidate {
    fn from(s: &str) -> Self {
        Candidate::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Candidate {
    fn from(bytes: Vec<u8>) -> Self {
        Candidate::Bytes(bytes)
    }
}

impl From<&[u8]> for Candidate {
    fn from(bytes: &[u8]) -> Self {
        Candidate::Bytes(bytes.to_vec())
    }
}

impl From<Vec<Value>> for Candidate {
    fn from(items: Vec<Value>) -> Self {
        Candidate::Sequence(items)
    }
}
