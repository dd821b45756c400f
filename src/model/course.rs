//! Course record.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::observability::Logger;

use super::errors::{InvalidData, ModelResult};
use super::record::{identity_prefix, Record, RecordKind, IDENTITY_PREFIX_LEN};
use super::validate;

/// A course, ordered naturally by its derived identity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    title: String,
    description: String,
    credits: u8,
    start_date: NaiveDate,
}

/// Wire form of a course: constructor fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CourseWire {
    pub title: String,
    pub description: String,
    pub credits: u8,
    pub start_date: NaiveDate,
}

impl Course {
    /// Validates the field values and constructs the course.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` naming the first failing field.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        credits: u8,
        start_date: NaiveDate,
    ) -> ModelResult<Self> {
        let title = title.into();
        let description = description.into();

        if !validate::is_valid_text(&title) {
            return Err(InvalidData::field(
                RecordKind::Course,
                "title",
                "must have at least 3 non-blank characters",
            ));
        }
        if !validate::is_valid_text(&description) {
            return Err(InvalidData::field(
                RecordKind::Course,
                "description",
                "must have at least 3 non-blank characters",
            ));
        }
        if !validate::is_valid_credits(credits) {
            return Err(InvalidData::field(
                RecordKind::Course,
                "credits",
                format!(
                    "must be between {} and {}",
                    validate::CREDITS_RANGE.0,
                    validate::CREDITS_RANGE.1
                ),
            ));
        }
        if !validate::is_valid_start_date(start_date) {
            return Err(InvalidData::field(
                RecordKind::Course,
                "startDate",
                "must not be before 2000-01-01",
            ));
        }

        let course = Self {
            title,
            description,
            credits,
            start_date,
        };
        Logger::info(
            "RECORD_CREATED",
            &[("kind", "course"), ("title", course.title.as_str())],
        );
        Ok(course)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Derived identity string: `TIT-DES-<credits><start date>`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if title or description is shorter than
    /// three characters; unreachable for constructed courses.
    pub fn identity(&self) -> ModelResult<String> {
        for (field, value) in [("title", &self.title), ("description", &self.description)] {
            if value.chars().count() < IDENTITY_PREFIX_LEN {
                return Err(InvalidData::identity(RecordKind::Course, field));
            }
        }
        Ok(self.identity_key())
    }

    pub(crate) fn identity_key(&self) -> String {
        format!(
            "{}-{}-{}{}",
            identity_prefix(&self.title),
            identity_prefix(&self.description),
            self.credits,
            self.start_date
        )
    }

    /// Natural ordering: by derived identity string.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.identity_key().cmp(&other.identity_key())
    }
}

/// Ascending credit count.
pub fn by_credits(a: &Course, b: &Course) -> Ordering {
    a.credits.cmp(&b.credits)
}

/// Ascending start date.
pub fn by_start_date(a: &Course, b: &Course) -> Ordering {
    a.start_date.cmp(&b.start_date)
}

/// Title, then description.
pub fn by_title(a: &Course, b: &Course) -> Ordering {
    a.title
        .cmp(&b.title)
        .then_with(|| a.description.cmp(&b.description))
}

impl Record for Course {
    const KIND: RecordKind = RecordKind::Course;
    type Wire = CourseWire;

    fn to_wire(&self) -> CourseWire {
        CourseWire {
            title: self.title.clone(),
            description: self.description.clone(),
            credits: self.credits,
            start_date: self.start_date,
        }
    }

    fn from_wire(wire: CourseWire) -> Result<Self, InvalidData> {
        Course::new(wire.title, wire.description, wire.credits, wire.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn course(title: &str, credits: u8) -> Course {
        Course::new(title, "Algorithms", credits, date(2025, 2, 1)).unwrap()
    }

    #[test]
    fn test_valid_course_retains_fields() {
        let c = Course::new("Java Programming", "Java Basics", 5, date(2025, 1, 15)).unwrap();
        assert_eq!(c.title(), "Java Programming");
        assert_eq!(c.description(), "Java Basics");
        assert_eq!(c.credits(), 5);
        assert_eq!(c.start_date(), date(2025, 1, 15));
    }

    #[test]
    fn test_credits_out_of_range_rejected() {
        let err = Course::new("Databases", "SQL Basics", 0, date(2025, 3, 1)).unwrap_err();
        assert_eq!(err.field_name(), "credits");
        let err = Course::new("Databases", "SQL Basics", 11, date(2025, 3, 1)).unwrap_err();
        assert_eq!(err.field_name(), "credits");
    }

    #[test]
    fn test_short_title_rejected() {
        let err = Course::new("Db", "SQL Basics", 5, date(2025, 3, 1)).unwrap_err();
        assert_eq!(err.field_name(), "title");
    }

    #[test]
    fn test_pre_epoch_start_date_rejected() {
        let err = Course::new("Databases", "SQL Basics", 5, date(1999, 3, 1)).unwrap_err();
        assert_eq!(err.field_name(), "startDate");
    }

    #[test]
    fn test_identity_format() {
        let c = Course::new("Data Structures", "Algorithms", 3, date(2025, 2, 1)).unwrap();
        assert_eq!(c.identity().unwrap(), "DAT-ALG-32025-02-01");
    }

    #[test]
    fn test_identity_underflow_on_short_title() {
        // Bypasses the constructor to reach the underflow branch.
        let c = Course {
            title: "Db".to_string(),
            description: "SQL Basics".to_string(),
            credits: 5,
            start_date: date(2025, 3, 1),
        };
        let err = c.identity().unwrap_err();
        assert!(matches!(err, InvalidData::IdentityUnderflow { .. }));
        assert_eq!(err.field_name(), "title");
    }

    #[test]
    fn test_natural_order_follows_identity() {
        let a = course("Algebra", 3);
        let b = course("Zoology", 3);
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_by_credits_and_by_title() {
        let mut v = vec![course("Web Development", 4), course("Data Structures", 3)];
        v.sort_by(by_credits);
        assert_eq!(v[0].credits(), 3);
        v.sort_by(by_title);
        assert_eq!(v[0].title(), "Data Structures");
    }

    #[test]
    fn test_wire_round_trip_preserves_fields() {
        let c = Course::new("Databases", "SQL Basics", 5, date(2025, 3, 1)).unwrap();
        let rebuilt = Course::from_wire(c.to_wire()).unwrap();
        assert_eq!(rebuilt, c);
    }
}
