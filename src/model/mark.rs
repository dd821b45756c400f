//! Assignment grades.

use serde::{Deserialize, Serialize};

/// Grade attached to an assignment, best first.
///
/// The wire names are SCREAMING_SNAKE_CASE so persisted documents match
/// the established data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mark {
    Excellent,
    Good,
    Satisfactory,
    Passed,
    Low,
    NotPassed,
    NotTaken,
}

impl Mark {
    /// Human-readable sentence for the grade. Never serialized.
    pub fn text(&self) -> &'static str {
        match self {
            Mark::Excellent => "Your mark is excellent",
            Mark::Good => "Your mark is good.",
            Mark::Satisfactory => "Your mark is satisfactory.",
            Mark::Passed => "You passed the exam",
            Mark::Low => "Your mark is low.",
            Mark::NotPassed => "You did not pass the exam.",
            Mark::NotTaken => "Exam has not happened.",
        }
    }
}
