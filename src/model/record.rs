//! Record capability trait shared by all five entity kinds.
//!
//! The persistence layer is generic over this trait: each record kind
//! names its wire representation (the serde struct that carries exactly
//! the constructor fields) and the two conversions between them.
//! `from_wire` goes through the validating constructor, so a decoded
//! document can never produce a record that direct construction would
//! reject.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::InvalidData;

/// Number of leading characters each designated field contributes to a
/// derived identity string.
pub const IDENTITY_PREFIX_LEN: usize = 3;

/// Tag naming a record kind, used in log and error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Student,
    Course,
    Instructor,
    CourseModule,
    Assignment,
}

impl RecordKind {
    /// Returns the tag string used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Student => "student",
            RecordKind::Course => "course",
            RecordKind::Instructor => "instructor",
            RecordKind::CourseModule => "module",
            RecordKind::Assignment => "assignment",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated, immutable record that can round-trip through a codec.
pub trait Record: Sized {
    /// Kind tag for log and error context.
    const KIND: RecordKind;

    /// Wire representation: constructor fields only, no derived values.
    type Wire: Serialize + DeserializeOwned;

    /// Projects the record onto its wire representation.
    fn to_wire(&self) -> Self::Wire;

    /// Rebuilds a record from decoded field values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the field values violate the kind's
    /// invariants, exactly as direct construction would.
    fn from_wire(wire: Self::Wire) -> Result<Self, InvalidData>;
}

/// Uppercased identity prefix of a designated field.
///
/// Callers must have checked the field against `IDENTITY_PREFIX_LEN`;
/// constructed records satisfy this by validation.
pub(crate) fn identity_prefix(s: &str) -> String {
    s.chars().take(IDENTITY_PREFIX_LEN).collect::<String>().to_uppercase()
}
