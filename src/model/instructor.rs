//! Instructor record.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::observability::Logger;

use super::errors::{InvalidData, ModelResult};
use super::record::{identity_prefix, Record, RecordKind, IDENTITY_PREFIX_LEN};
use super::validate;

/// An instructor, ordered naturally by its derived identity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    first_name: String,
    last_name: String,
    expertise: u8,
}

/// Wire form of an instructor: constructor fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InstructorWire {
    pub first_name: String,
    pub last_name: String,
    pub expertise: u8,
}

impl Instructor {
    /// Validates the field values and constructs the instructor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` naming the first failing field.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        expertise: u8,
    ) -> ModelResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if !validate::is_valid_name(&first_name) {
            return Err(InvalidData::field(
                RecordKind::Instructor,
                "firstName",
                "must have at least 3 non-blank characters",
            ));
        }
        if !validate::is_valid_name(&last_name) {
            return Err(InvalidData::field(
                RecordKind::Instructor,
                "lastName",
                "must have at least 3 non-blank characters",
            ));
        }
        if !validate::is_valid_expertise(expertise) {
            return Err(InvalidData::field(
                RecordKind::Instructor,
                "expertise",
                format!(
                    "must be between {} and {}",
                    validate::EXPERTISE_RANGE.0,
                    validate::EXPERTISE_RANGE.1
                ),
            ));
        }

        let instructor = Self {
            first_name,
            last_name,
            expertise,
        };
        Logger::info(
            "RECORD_CREATED",
            &[
                ("kind", "instructor"),
                ("lastName", instructor.last_name.as_str()),
            ],
        );
        Ok(instructor)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn expertise(&self) -> u8 {
        self.expertise
    }

    /// Derived identity string: `FIRLAS-<expertise>`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if a name field is shorter than three
    /// characters; unreachable for constructed instructors.
    pub fn identity(&self) -> ModelResult<String> {
        for (field, value) in [("firstName", &self.first_name), ("lastName", &self.last_name)] {
            if value.chars().count() < IDENTITY_PREFIX_LEN {
                return Err(InvalidData::identity(RecordKind::Instructor, field));
            }
        }
        Ok(self.identity_key())
    }

    fn identity_key(&self) -> String {
        format!(
            "{}{}-{}",
            identity_prefix(&self.first_name),
            identity_prefix(&self.last_name),
            self.expertise
        )
    }

    /// Natural ordering: by derived identity string.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.identity_key().cmp(&other.identity_key())
    }
}

/// Descending expertise.
pub fn by_expertise_desc(a: &Instructor, b: &Instructor) -> Ordering {
    b.expertise.cmp(&a.expertise)
}

/// Last name, then first name.
pub fn by_last_name(a: &Instructor, b: &Instructor) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
}

/// First name, then last name.
pub fn by_first_name(a: &Instructor, b: &Instructor) -> Ordering {
    a.first_name
        .cmp(&b.first_name)
        .then_with(|| a.last_name.cmp(&b.last_name))
}

impl Record for Instructor {
    const KIND: RecordKind = RecordKind::Instructor;
    type Wire = InstructorWire;

    fn to_wire(&self) -> InstructorWire {
        InstructorWire {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            expertise: self.expertise,
        }
    }

    fn from_wire(wire: InstructorWire) -> Result<Self, InvalidData> {
        Instructor::new(wire.first_name, wire.last_name, wire.expertise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_instructor_retains_fields() {
        let i = Instructor::new("Igor", "Bylat", 34).unwrap();
        assert_eq!(i.first_name(), "Igor");
        assert_eq!(i.last_name(), "Bylat");
        assert_eq!(i.expertise(), 34);
    }

    #[test]
    fn test_expertise_out_of_range_rejected() {
        assert_eq!(
            Instructor::new("Igor", "Bylat", 0).unwrap_err().field_name(),
            "expertise"
        );
        assert_eq!(
            Instructor::new("Igor", "Bylat", 51).unwrap_err().field_name(),
            "expertise"
        );
    }

    #[test]
    fn test_short_last_name_rejected() {
        let err = Instructor::new("Inessa", "Ki", 39).unwrap_err();
        assert_eq!(err.field_name(), "lastName");
    }

    #[test]
    fn test_identity_format() {
        let i = Instructor::new("Igor", "Bylat", 34).unwrap();
        assert_eq!(i.identity().unwrap(), "IGOBYL-34");
    }

    #[test]
    fn test_identity_underflow_on_short_last_name() {
        // Bypasses the constructor to reach the underflow branch.
        let i = Instructor {
            first_name: "Inessa".to_string(),
            last_name: "Ki".to_string(),
            expertise: 39,
        };
        let err = i.identity().unwrap_err();
        assert!(matches!(err, InvalidData::IdentityUnderflow { .. }));
        assert_eq!(err.field_name(), "lastName");
    }

    #[test]
    fn test_reachable_through_model_root() {
        let i = crate::model::Instructor::new("Igor", "Bylat", 34).unwrap();
        assert_eq!(i.identity().unwrap(), "IGOBYL-34");
    }

    #[test]
    fn test_by_expertise_desc() {
        let mut v = vec![
            Instructor::new("Denys", "Malyk", 20).unwrap(),
            Instructor::new("Inessa", "Kir", 39).unwrap(),
            Instructor::new("Alina", "Skrypa", 12).unwrap(),
        ];
        v.sort_by(by_expertise_desc);
        assert_eq!(v[0].expertise(), 39);
        assert_eq!(v[2].expertise(), 12);
    }

    #[test]
    fn test_by_last_name_breaks_ties_on_first() {
        let mut v = vec![
            Instructor::new("Igor", "Bylat", 34).unwrap(),
            Instructor::new("Alina", "Bylat", 12).unwrap(),
        ];
        v.sort_by(by_last_name);
        assert_eq!(v[0].first_name(), "Alina");
    }

    #[test]
    fn test_wire_round_trip_preserves_fields() {
        let i = Instructor::new("Alina", "Skrypa", 12).unwrap();
        let rebuilt = Instructor::from_wire(i.to_wire()).unwrap();
        assert_eq!(rebuilt, i);
    }
}
