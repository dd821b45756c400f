//! Course module record (a titled unit of course content).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::observability::Logger;

use super::errors::{InvalidData, ModelResult};
use super::record::{identity_prefix, Record, RecordKind, IDENTITY_PREFIX_LEN};
use super::validate;

/// A unit of course content, ordered naturally by its identity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseModule {
    title: String,
    content: String,
}

/// Wire form of a course module: constructor fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CourseModuleWire {
    pub title: String,
    pub content: String,
}

impl CourseModule {
    /// Validates the field values and constructs the module.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` naming the first failing field.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> ModelResult<Self> {
        let title = title.into();
        let content = content.into();

        if !validate::is_valid_text(&title) {
            return Err(InvalidData::field(
                RecordKind::CourseModule,
                "title",
                "must have at least 3 non-blank characters",
            ));
        }
        if !validate::is_valid_text(&content) {
            return Err(InvalidData::field(
                RecordKind::CourseModule,
                "content",
                "must have at least 3 non-blank characters",
            ));
        }

        let module = Self { title, content };
        Logger::info(
            "RECORD_CREATED",
            &[("kind", "module"), ("title", module.title.as_str())],
        );
        Ok(module)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Derived identity string: `TIT-CON`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if a field is shorter than three
    /// characters; unreachable for constructed modules.
    pub fn identity(&self) -> ModelResult<String> {
        for (field, value) in [("title", &self.title), ("content", &self.content)] {
            if value.chars().count() < IDENTITY_PREFIX_LEN {
                return Err(InvalidData::identity(RecordKind::CourseModule, field));
            }
        }
        Ok(self.identity_key())
    }

    pub(crate) fn identity_key(&self) -> String {
        format!(
            "{}-{}",
            identity_prefix(&self.title),
            identity_prefix(&self.content)
        )
    }

    /// Natural ordering: by derived identity string.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.identity_key().cmp(&other.identity_key())
    }
}

/// Ascending title.
pub fn by_title(a: &CourseModule, b: &CourseModule) -> Ordering {
    a.title.cmp(&b.title)
}

/// Ascending content.
pub fn by_content(a: &CourseModule, b: &CourseModule) -> Ordering {
    a.content.cmp(&b.content)
}

/// Content length, then title.
pub fn by_content_length(a: &CourseModule, b: &CourseModule) -> Ordering {
    a.content
        .chars()
        .count()
        .cmp(&b.content.chars().count())
        .then_with(|| a.title.cmp(&b.title))
}

impl Record for CourseModule {
    const KIND: RecordKind = RecordKind::CourseModule;
    type Wire = CourseModuleWire;

    fn to_wire(&self) -> CourseModuleWire {
        CourseModuleWire {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    fn from_wire(wire: CourseModuleWire) -> Result<Self, InvalidData> {
        CourseModule::new(wire.title, wire.content)
    }
}
