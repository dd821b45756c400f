//! Assignment record: a course module with a due date, a point budget,
//! and a grade.

use std::cmp::Ordering;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::observability::Logger;

use super::course_module::{CourseModule, CourseModuleWire};
use super::errors::{InvalidData, ModelResult};
use super::mark::Mark;
use super::record::{Record, RecordKind};
use super::validate;

/// An assignment, ordered naturally by due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    module: CourseModule,
    due_date: NaiveDate,
    max_points: u8,
    mark: Mark,
}

/// Wire form of an assignment. The module nests as its own object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssignmentWire {
    pub module: CourseModuleWire,
    pub due_date: NaiveDate,
    pub max_points: u8,
    pub mark: Mark,
}

impl Assignment {
    /// Validates the field values and constructs the assignment.
    ///
    /// The module is taken already constructed, so its own invariants
    /// hold by that point.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` naming the first failing field.
    pub fn new(
        module: CourseModule,
        due_date: NaiveDate,
        max_points: u8,
        mark: Mark,
    ) -> ModelResult<Self> {
        if !validate::is_valid_max_points(max_points) {
            return Err(InvalidData::field(
                RecordKind::Assignment,
                "maxPoints",
                format!(
                    "must be between {} and {}",
                    validate::MAX_POINTS_RANGE.0,
                    validate::MAX_POINTS_RANGE.1
                ),
            ));
        }
        let today = Utc::now().date_naive();
        if !validate::is_valid_due_date(due_date, today) {
            return Err(InvalidData::field(
                RecordKind::Assignment,
                "dueDate",
                "must not be in the past",
            ));
        }

        let assignment = Self {
            module,
            due_date,
            max_points,
            mark,
        };
        Logger::info(
            "RECORD_CREATED",
            &[
                ("kind", "assignment"),
                ("module", assignment.module.title()),
            ],
        );
        Ok(assignment)
    }

    pub fn module(&self) -> &CourseModule {
        &self.module
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn max_points(&self) -> u8 {
        self.max_points
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Human-readable grade sentence. Never serialized.
    pub fn mark_text(&self) -> &'static str {
        self.mark.text()
    }

    /// Derived identity string: `<module identity>-<due date>`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the module's identity cannot be derived;
    /// unreachable for constructed assignments.
    pub fn identity(&self) -> ModelResult<String> {
        Ok(format!("{}-{}", self.module.identity()?, self.due_date))
    }

    /// Natural ordering: by due date, the key field.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.due_date.cmp(&other.due_date)
    }
}

/// Ascending due date.
pub fn by_due_date(a: &Assignment, b: &Assignment) -> Ordering {
    a.due_date.cmp(&b.due_date)
}

/// Descending point budget.
pub fn by_max_points_desc(a: &Assignment, b: &Assignment) -> Ordering {
    b.max_points.cmp(&a.max_points)
}

/// Grade order, best first.
pub fn by_mark(a: &Assignment, b: &Assignment) -> Ordering {
    a.mark.cmp(&b.mark)
}

/// Module identity, then due date.
pub fn by_module_and_date(a: &Assignment, b: &Assignment) -> Ordering {
    a.module
        .identity_key()
        .cmp(&b.module.identity_key())
        .then_with(|| a.due_date.cmp(&b.due_date))
}

impl Record for Assignment {
    const KIND: RecordKind = RecordKind::Assignment;
    type Wire = AssignmentWire;

    fn to_wire(&self) -> AssignmentWire {
        AssignmentWire {
            module: self.module.to_wire(),
            due_date: self.due_date,
            max_points: self.max_points,
            mark: self.mark,
        }
    }

    fn from_wire(wire: AssignmentWire) -> Result<Self, InvalidData> {
        let module = CourseModule::from_wire(wire.module)?;
        Assignment::new(module, wire.due_date, wire.max_points, wire.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn module() -> CourseModule {
        CourseModule::new("Collections", "Lists and maps").unwrap()
    }

    fn assignment(due: NaiveDate, points: u8, mark: Mark) -> Assignment {
        Assignment::new(module(), due, points, mark).unwrap()
    }

    #[test]
    fn test_valid_assignment_retains_fields() {
        let a = assignment(date(2099, 5, 1), 80, Mark::Good);
        assert_eq!(a.module().title(), "Collections");
        assert_eq!(a.due_date(), date(2099, 5, 1));
        assert_eq!(a.max_points(), 80);
        assert_eq!(a.mark(), Mark::Good);
        assert_eq!(a.mark_text(), "Your mark is good.");
    }

    #[test]
    fn test_past_due_date_rejected() {
        let err = Assignment::new(module(), date(2020, 1, 1), 80, Mark::NotTaken).unwrap_err();
        assert_eq!(err.field_name(), "dueDate");
    }

    #[test]
    fn test_points_out_of_range_rejected() {
        let err = Assignment::new(module(), date(2099, 5, 1), 0, Mark::NotTaken).unwrap_err();
        assert_eq!(err.field_name(), "maxPoints");
        let err = Assignment::new(module(), date(2099, 5, 1), 101, Mark::NotTaken).unwrap_err();
        assert_eq!(err.field_name(), "maxPoints");
    }

    #[test]
    fn test_identity_appends_due_date() {
        let a = assignment(date(2099, 5, 1), 80, Mark::Good);
        assert_eq!(a.identity().unwrap(), "COL-LIS-2099-05-01");
    }

    #[test]
    fn test_natural_order_by_due_date() {
        let early = assignment(date(2099, 1, 1), 50, Mark::NotTaken);
        let late = assignment(date(2099, 12, 1), 50, Mark::NotTaken);
        assert_eq!(early.natural_cmp(&late), Ordering::Less);
    }

    #[test]
    fn test_by_max_points_desc() {
        let mut v = vec![
            assignment(date(2099, 1, 1), 40, Mark::NotTaken),
            assignment(date(2099, 1, 1), 90, Mark::NotTaken),
        ];
        v.sort_by(by_max_points_desc);
        assert_eq!(v[0].max_points(), 90);
    }

    #[test]
    fn test_by_module_and_date() {
        let apples = CourseModule::new("Apples", "Orchard basics").unwrap();
        let zebras = CourseModule::new("Zebras", "Stripe theory").unwrap();
        let mut v = vec![
            Assignment::new(zebras, date(2099, 1, 1), 50, Mark::NotTaken).unwrap(),
            Assignment::new(apples.clone(), date(2099, 6, 1), 50, Mark::NotTaken).unwrap(),
            Assignment::new(apples, date(2099, 1, 1), 50, Mark::NotTaken).unwrap(),
        ];
        v.sort_by(by_module_and_date);
        assert_eq!(v[0].module().title(), "Apples");
        assert_eq!(v[0].due_date(), date(2099, 1, 1));
        assert_eq!(v[2].module().title(), "Zebras");
    }

    #[test]
    fn test_wire_round_trip_preserves_fields() {
        let a = assignment(date(2099, 5, 1), 80, Mark::Excellent);
        let rebuilt = Assignment::from_wire(a.to_wire()).unwrap();
        assert_eq!(rebuilt, a);
    }

    #[test]
    fn test_decode_revalidates_nested_module() {
        let wire: AssignmentWire = serde_json::from_str(
            r#"{"module":{"title":"ab","content":"Lists"},"dueDate":"2099-05-01","maxPoints":80,"mark":"GOOD"}"#,
        )
        .unwrap();
        let err = Assignment::from_wire(wire).unwrap_err();
        assert_eq!(err.field_name(), "title");
    }
}
