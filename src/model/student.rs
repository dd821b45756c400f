//! Student record.
//!
//! Immutable once constructed: the only way in is the validating
//! constructor, so every observable instance is valid.

use std::cmp::Ordering;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::observability::Logger;

use super::errors::{InvalidData, ModelResult};
use super::record::{identity_prefix, Record, RecordKind, IDENTITY_PREFIX_LEN};
use super::validate;

/// A student, ordered naturally by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    first_name: String,
    last_name: String,
    email: String,
    enrollment_date: NaiveDate,
}

/// Wire form of a student: constructor fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudentWire {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

impl Student {
    /// Validates the field values and constructs the student.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` naming the first field that fails its
    /// predicate. No partially-built student is observable.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        enrollment_date: NaiveDate,
    ) -> ModelResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();

        if !validate::is_valid_name(&first_name) {
            return Err(InvalidData::field(
                RecordKind::Student,
                "firstName",
                "must have at least 3 non-blank characters",
            ));
        }
        if !validate::is_valid_name(&last_name) {
            return Err(InvalidData::field(
                RecordKind::Student,
                "lastName",
                "must have at least 3 non-blank characters",
            ));
        }
        if !validate::is_valid_email(&email) {
            return Err(InvalidData::field(
                RecordKind::Student,
                "email",
                "must look like an address (local@domain.tld)",
            ));
        }
        let today = Utc::now().date_naive();
        if !validate::is_valid_enrollment_date(enrollment_date, today) {
            return Err(InvalidData::field(
                RecordKind::Student,
                "enrollmentDate",
                "must not be in the future or before 2000-01-01",
            ));
        }

        let student = Self {
            first_name,
            last_name,
            email,
            enrollment_date,
        };
        Logger::info(
            "RECORD_CREATED",
            &[("kind", "student"), ("email", student.email.as_str())],
        );
        Ok(student)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    /// Derived identity string: `FIRLAS-EMA-<enrollment date>`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if any designated field is shorter than
    /// three characters. Construction-time validation makes this
    /// unreachable for constructed students.
    pub fn identity(&self) -> ModelResult<String> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
        ] {
            if value.chars().count() < IDENTITY_PREFIX_LEN {
                return Err(InvalidData::identity(RecordKind::Student, field));
            }
        }
        Ok(self.identity_key())
    }

    /// Infallible backing for `identity`; valid by construction.
    fn identity_key(&self) -> String {
        format!(
            "{}{}-{}-{}",
            identity_prefix(&self.first_name),
            identity_prefix(&self.last_name),
            identity_prefix(&self.email),
            self.enrollment_date
        )
    }

    /// Natural ordering: by email, the key field.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.email.cmp(&other.email)
    }
}

/// Ascending enrollment date.
pub fn by_enrollment_date(a: &Student, b: &Student) -> Ordering {
    a.enrollment_date.cmp(&b.enrollment_date)
}

/// Last name, then first name, then email.
pub fn by_name(a: &Student, b: &Student) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| a.email.cmp(&b.email))
}

/// Last name descending; ties still break ascending by first name, then email.
pub fn by_name_desc(a: &Student, b: &Student) -> Ordering {
    b.last_name
        .cmp(&a.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| a.email.cmp(&b.email))
}

impl Record for Student {
    const KIND: RecordKind = RecordKind::Student;
    type Wire = StudentWire;

    fn to_wire(&self) -> StudentWire {
        StudentWire {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            enrollment_date: self.enrollment_date,
        }
    }

    fn from_wire(wire: StudentWire) -> Result<Self, InvalidData> {
        Student::new(wire.first_name, wire.last_name, wire.email, wire.enrollment_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn student(first: &str, last: &str, email: &str) -> Student {
        Student::new(first, last, email, date(2023, 9, 1)).unwrap()
    }

    #[test]
    fn test_valid_student_retains_fields() {
        let s = student("Lesia", "Melnyk", "lesia.melnyk@chnu.edu.ua");
        assert_eq!(s.first_name(), "Lesia");
        assert_eq!(s.last_name(), "Melnyk");
        assert_eq!(s.email(), "lesia.melnyk@chnu.edu.ua");
        assert_eq!(s.enrollment_date(), date(2023, 9, 1));
    }

    #[test]
    fn test_short_first_name_rejected() {
        let err = Student::new("Al", "Melnyk", "a@b.cd", date(2023, 9, 1)).unwrap_err();
        assert_eq!(err.field_name(), "firstName");
    }

    #[test]
    fn test_bad_email_rejected() {
        let err = Student::new("Lesia", "Melnyk", "not-an-email", date(2023, 9, 1)).unwrap_err();
        assert_eq!(err.field_name(), "email");
    }

    #[test]
    fn test_future_enrollment_rejected() {
        let err = Student::new("Lesia", "Melnyk", "a@b.cd", date(2999, 1, 1)).unwrap_err();
        assert_eq!(err.field_name(), "enrollmentDate");
    }

    #[test]
    fn test_identity_format() {
        let s = student("Lesia", "Melnyk", "lesia.melnyk@chnu.edu.ua");
        assert_eq!(s.identity().unwrap(), "LESMEL-LES-2023-09-01");
    }

    #[test]
    fn test_identity_underflow_on_short_field() {
        // Bypasses the constructor to reach the underflow branch.
        let s = Student {
            first_name: "Al".to_string(),
            last_name: "Melnyk".to_string(),
            email: "a@b.cd".to_string(),
            enrollment_date: date(2023, 9, 1),
        };
        let err = s.identity().unwrap_err();
        assert!(matches!(err, InvalidData::IdentityUnderflow { .. }));
        assert_eq!(err.field_name(), "firstName");
    }

    #[test]
    fn test_natural_order_by_email() {
        let a = student("Zoe", "Zzz", "aaa@mail.com");
        let b = student("Ann", "Aaa", "zzz@mail.com");
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_by_name_sorts_last_first_email() {
        let mut v = vec![
            student("Ivan", "Bondaryk", "ivan@chnu.edu.ua"),
            student("Lesia", "Melnyk", "lesia@chnu.edu.ua"),
            student("Anna", "Bondaryk", "anna@chnu.edu.ua"),
        ];
        v.sort_by(by_name);
        assert_eq!(v[0].first_name(), "Anna");
        assert_eq!(v[1].first_name(), "Ivan");
        assert_eq!(v[2].last_name(), "Melnyk");
    }

    #[test]
    fn test_by_name_desc_reverses_only_last_name() {
        let mut v = vec![
            student("Ivan", "Bondaryk", "ivan@chnu.edu.ua"),
            student("Anna", "Bondaryk", "anna@chnu.edu.ua"),
            student("Lesia", "Melnyk", "lesia@chnu.edu.ua"),
        ];
        v.sort_by(by_name_desc);
        // Melnyk first (descending last name), Bondaryk ties still
        // ascending by first name.
        assert_eq!(v[0].last_name(), "Melnyk");
        assert_eq!(v[1].first_name(), "Anna");
        assert_eq!(v[2].first_name(), "Ivan");
    }

    #[test]
    fn test_wire_round_trip_preserves_fields() {
        let s = student("Lesia", "Melnyk", "lesia.melnyk@chnu.edu.ua");
        let rebuilt = Student::from_wire(s.to_wire()).unwrap();
        assert_eq!(rebuilt, s);
    }

    #[test]
    fn test_wire_uses_camel_case_names() {
        let s = student("Lesia", "Melnyk", "lesia.melnyk@chnu.edu.ua");
        let json = serde_json::to_string(&s.to_wire()).unwrap();
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"enrollmentDate\""));
    }

    #[test]
    fn test_decode_cannot_bypass_validation() {
        // Structurally valid wire, invalid value: the constructor rejects it.
        let wire: StudentWire =
            serde_json::from_str(r#"{"firstName":"Al","lastName":"Melnyk","email":"a@b.cd","enrollmentDate":"2023-09-01"}"#)
                .unwrap();
        assert!(Student::from_wire(wire).is_err());
    }
}
