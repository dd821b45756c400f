//! Entity-invariant error type.
//!
//! `InvalidData` is raised at construction time, either from a direct
//! constructor call or while rebuilding records during decode. The model
//! layer never catches it; it propagates to whoever constructs.

use thiserror::Error;

use super::record::{RecordKind, IDENTITY_PREFIX_LEN};

/// Result type for model-layer operations.
pub type ModelResult<T> = Result<T, InvalidData>;

/// A record's field values violate the entity invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidData {
    /// A constructor field failed its validation predicate.
    #[error("invalid {kind}: field '{field}' {reason}")]
    Field {
        kind: RecordKind,
        field: &'static str,
        reason: String,
    },

    /// A designated identity field is too short to slice a prefix from.
    #[error("cannot derive {kind} identity: field '{field}' is shorter than {min} characters")]
    IdentityUnderflow {
        kind: RecordKind,
        field: &'static str,
        min: usize,
    },
}

impl InvalidData {
    /// Field-validation failure.
    pub fn field(kind: RecordKind, field: &'static str, reason: impl Into<String>) -> Self {
        InvalidData::Field {
            kind,
            field,
            reason: reason.into(),
        }
    }

    /// Identity-derivation failure for a too-short designated field.
    pub fn identity(kind: RecordKind, field: &'static str) -> Self {
        InvalidData::IdentityUnderflow {
            kind,
            field,
            min: IDENTITY_PREFIX_LEN,
        }
    }

    /// Returns the record kind the failure belongs to.
    pub fn kind(&self) -> RecordKind {
        match self {
            InvalidData::Field { kind, .. } => *kind,
            InvalidData::IdentityUnderflow { kind, .. } => *kind,
        }
    }

    /// Returns the offending field name.
    pub fn field_name(&self) -> &'static str {
        match self {
            InvalidData::Field { field, .. } => field,
            InvalidData::IdentityUnderflow { field, .. } => field,
        }
    }
}
