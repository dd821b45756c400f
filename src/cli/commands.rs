//! CLI command implementations.
//!
//! The demo command walks the whole persistence surface: sample
//! datasets, per-format saves, `save_all_formats`, loads from both
//! formats with field-by-field comparison, and the failure paths.
//! A failed demonstration step logs and continues; only configuration
//! failures abort the run.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::model::{student, Course, Instructor, ModelResult, Student};
use crate::observability::Logger;
use crate::persistence::PersistenceManager;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Demo { config, data_dir } => demo(&config, data_dir),
    }
}

/// Runs the persistence demonstration.
pub fn demo(config_path: &Path, data_dir: Option<PathBuf>) -> CliResult<()> {
    let mut config = AppConfig::load(config_path)?;
    if let Some(dir) = data_dir {
        config.base_data_path = dir;
    }
    Logger::info(
        "CONFIG_LOADED",
        &[
            ("base_data_path", &config.base_data_path.display().to_string()),
            ("test_data_count", &config.test_data_count.to_string()),
        ],
    );

    let manager = PersistenceManager::new(&config);
    Logger::trace(
        "MANAGER_READY",
        &[("base_dir", &manager.base_dir().display().to_string())],
    );
    demonstrate_students(&config, &manager);
    demonstrate_courses(&manager);
    demonstrate_instructors(&manager);
    demonstrate_failure_paths(&manager);
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("constant date")
}

fn sample_students(count: usize) -> ModelResult<Vec<Student>> {
    let all = vec![
        Student::new("Lesia", "Melnyk", "lesia.melnyk@chnu.edu.ua", date(2023, 9, 1))?,
        Student::new("Liliya", "Fivko", "liliya.fivko@student.ua", date(2023, 9, 5))?,
        Student::new("Ivan", "Bondaryk", "ivan.bodnaryk@chnu.edu.ua", date(2023, 9, 3))?,
        Student::new("Daniel", "Lula", "daniel.lula@chnu.edu.ua", date(2023, 9, 2))?,
        Student::new("Dmytro", "Vasylyk", "dmytro.vasylyk@chnu.edu.ua", date(2023, 9, 10))?,
    ];
    Ok(all.into_iter().take(count).collect())
}

fn sample_courses() -> ModelResult<Vec<Course>> {
    Ok(vec![
        Course::new("Java Programming", "Java Basics", 5, date(2025, 1, 15))?,
        Course::new("Data Structures", "Algorithms", 3, date(2025, 2, 1))?,
        Course::new("Web Development", "HTML and CSS", 4, date(2025, 1, 20))?,
        Course::new("Databases", "SQL Basics", 5, date(2025, 3, 1))?,
    ])
}

fn sample_instructors() -> ModelResult<Vec<Instructor>> {
    Ok(vec![
        Instructor::new("Igor", "Bylat", 34)?,
        Instructor::new("Denys", "Malyk", 20)?,
        Instructor::new("Inessa", "Kir", 39)?,
        Instructor::new("Alina", "Skrypa", 12)?,
    ])
}

fn demonstrate_students(config: &AppConfig, manager: &PersistenceManager) {
    let mut students = match sample_students(config.test_data_count) {
        Ok(students) => students,
        Err(e) => {
            Logger::error("DEMO_STEP_FAILED", &[("step", "students"), ("error", &e.to_string())]);
            return;
        }
    };

    // Individual saves, one per format.
    for tag in ["JSON", "YAML"] {
        if let Err(e) = manager.save(Some(&students[..]), "students", tag) {
            Logger::error(
                "DEMO_STEP_FAILED",
                &[("step", "save students"), ("format", tag), ("error", &e.to_string())],
            );
        }
    }

    for tag in ["JSON", "YAML"] {
        match manager.load::<Student>("students", tag) {
            Ok(loaded) => {
                let matches = (loaded == students).to_string();
                Logger::info(
                    "DATASET_COMPARED",
                    &[("name", "students"), ("format", tag), ("matches", matches.as_str())],
                );
            }
            Err(e) => Logger::error(
                "DEMO_STEP_FAILED",
                &[("step", "load students"), ("format", tag), ("error", &e.to_string())],
            ),
        }
    }

    // Alternate orderings over the same dataset.
    students.sort_by(student::by_name);
    if let Some(first) = students.first() {
        Logger::info(
            "DATASET_SORTED",
            &[("name", "students"), ("order", "by_name"), ("first", first.last_name())],
        );
    }
}

fn demonstrate_courses(manager: &PersistenceManager) {
    let courses = match sample_courses() {
        Ok(courses) => courses,
        Err(e) => {
            Logger::error("DEMO_STEP_FAILED", &[("step", "courses"), ("error", &e.to_string())]);
            return;
        }
    };

    if let Err(e) = manager.save_all_formats(Some(&courses[..]), "courses") {
        Logger::error(
            "DEMO_STEP_FAILED",
            &[("step", "save courses"), ("error", &e.to_string())],
        );
    }

    for tag in ["JSON", "YAML"] {
        match manager.load::<Course>("courses", tag) {
            Ok(loaded) => {
                let matches = loaded.len() == courses.len()
                    && loaded.iter().zip(&courses).all(|(l, o)| {
                        l.title() == o.title() && l.credits() == o.credits()
                    });
                Logger::info(
                    "DATASET_COMPARED",
                    &[
                        ("name", "courses"),
                        ("format", tag),
                        ("matches", matches.to_string().as_str()),
                    ],
                );
            }
            Err(e) => Logger::error(
                "DEMO_STEP_FAILED",
                &[("step", "load courses"), ("format", tag), ("error", &e.to_string())],
            ),
        }
    }
}

fn demonstrate_instructors(manager: &PersistenceManager) {
    let instructors = match sample_instructors() {
        Ok(instructors) => instructors,
        Err(e) => {
            Logger::error(
                "DEMO_STEP_FAILED",
                &[("step", "instructors"), ("error", &e.to_string())],
            );
            return;
        }
    };

    if let Err(e) = manager.save_all_formats(Some(&instructors[..]), "instructors") {
        Logger::error(
            "DEMO_STEP_FAILED",
            &[("step", "save instructors"), ("error", &e.to_string())],
        );
    }

    for tag in ["JSON", "YAML"] {
        match manager.load::<Instructor>("instructors", tag) {
            Ok(loaded) => {
                let matches = (loaded == instructors).to_string();
                Logger::info(
                    "DATASET_COMPARED",
                    &[
                        ("name", "instructors"),
                        ("format", tag),
                        ("matches", matches.as_str()),
                    ],
                );
            }
            Err(e) => Logger::error(
                "DEMO_STEP_FAILED",
                &[("step", "load instructors"), ("format", tag), ("error", &e.to_string())],
            ),
        }
    }
}

/// Walks the failure paths so their observability can be seen end to
/// end: each step is expected to fail (or come back empty) and the run
/// continues regardless.
fn demonstrate_failure_paths(manager: &PersistenceManager) {
    if let Err(e) = manager.save::<Student>(None, "scratch", "JSON") {
        Logger::warn(
            "EXPECTED_FAILURE",
            &[("step", "save missing dataset"), ("error", &e.to_string())],
        );
    }

    let empty: Vec<Student> = Vec::new();
    if let Err(e) = manager.save(Some(&empty[..]), "scratch", "XML") {
        Logger::warn(
            "EXPECTED_FAILURE",
            &[("step", "save unsupported format"), ("error", &e.to_string())],
        );
    }

    match manager.load::<Student>("nonexistent", "JSON") {
        Ok(loaded) => Logger::info(
            "DATASET_ABSENT_OK",
            &[("name", "nonexistent"), ("count", loaded.len().to_string().as_str())],
        ),
        Err(e) => Logger::error(
            "DEMO_STEP_FAILED",
            &[("step", "load nonexistent"), ("error", &e.to_string())],
        ),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_sample_datasets_are_valid() {
        assert_eq!(sample_students(5).unwrap().len(), 5);
        assert_eq!(sample_students(2).unwrap().len(), 2);
        assert_eq!(sample_courses().unwrap().len(), 4);
        assert_eq!(sample_instructors().unwrap().len(), 4);
    }

    #[test]
    fn test_demo_runs_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.json");
        let data_dir = temp_dir.path().join("data");

        demo(&config_path, Some(data_dir.clone())).unwrap();

        // Every demonstrated dataset landed in both formats.
        for name in ["students", "courses", "instructors"] {
            assert!(data_dir.join(format!("{}.json", name)).exists());
            assert!(data_dir.join(format!("{}.yaml", name)).exists());
        }
    }
}
