//! Record family: five immutable, validated entity kinds.
//!
//! Every record is constructed through a validating constructor that
//! returns `Result`, so an observable instance is always valid. Each
//! kind exposes a derived identity string, a natural ordering, and a
//! family of named comparator functions, and implements [`Record`] so
//! the persistence layer can round-trip it.

pub mod assignment;
pub mod course;
pub mod course_module;
pub mod errors;
pub mod instructor;
pub mod mark;
pub mod record;
pub mod student;
pub mod validate;

pub use assignment::Assignment;
pub use course::Course;
pub use course_module::CourseModule;
pub use errors::{InvalidData, ModelResult};
pub use instructor::Instructor;
pub use mark::Mark;
pub use record::{Record, RecordKind};
pub use student::Student;
