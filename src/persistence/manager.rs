//! Persistence manager: the save/load orchestrator.
//!
//! Resolves (logical name, format) to a file path under the base data
//! directory, selects the codec, and performs the blocking I/O. Holds
//! no state beyond the base directory; every call is self-contained.
//!
//! Known limitations, by design:
//! - No write atomicity: a failed save may leave a truncated file in
//!   place of the previous one.
//! - No cross-format transactionality in `save_all_formats`.
//! - No protection against concurrent writers of the same logical
//!   dataset; the last writer wins at the filesystem level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::model::Record;
use crate::observability::Logger;

use super::codec;
use super::errors::{PersistenceResult, SerializationError};
use super::format::Format;

/// Save/load orchestrator over a base data directory.
pub struct PersistenceManager {
    base_dir: PathBuf,
}

impl PersistenceManager {
    /// Creates a manager over the configured base data path.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_dir: config.base_data_path.clone(),
        }
    }

    /// Creates a manager over an explicit base directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the base data directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves the file path for a (logical name, format) pair:
    /// `<base>/<name>.<ext>`.
    pub fn path_for(&self, name: &str, format: Format) -> PathBuf {
        self.base_dir
            .join(format!("{}.{}", name, format.extension()))
    }

    /// Saves a dataset, overwriting any existing file at the resolved
    /// path. Success is the absence of an error.
    ///
    /// # Errors
    ///
    /// - `MissingDataset` if `dataset` is `None`.
    /// - `UnsupportedFormat` if `format_tag` is not `"JSON"`/`"YAML"`.
    /// - `Encode` / `Io` for codec and filesystem failures.
    pub fn save<R: Record>(
        &self,
        dataset: Option<&[R]>,
        name: &str,
        format_tag: &str,
    ) -> PersistenceResult<()> {
        let records = dataset.ok_or_else(|| SerializationError::MissingDataset {
            name: name.to_string(),
        })?;
        let format = parse_format(format_tag)?;

        let text = codec::encode(format, name, records)?;

        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).map_err(|e| SerializationError::Io {
                op: "create data directory for",
                name: name.to_string(),
                format,
                source: e,
            })?;
        }

        let path = self.path_for(name, format);
        Logger::trace(
            "DATASET_PATH_RESOLVED",
            &[("name", name), ("path", path.display().to_string().as_str())],
        );
        fs::write(&path, text).map_err(|e| SerializationError::Io {
            op: "write",
            name: name.to_string(),
            format,
            source: e,
        })?;

        let count = records.len().to_string();
        Logger::info(
            "DATASET_SAVED",
            &[
                ("kind", R::KIND.as_str()),
                ("name", name),
                ("format", format.tag()),
                ("count", count.as_str()),
            ],
        );
        Ok(())
    }

    /// Loads a dataset. A missing file is an empty dataset, not an
    /// error; records come back in document order.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` if `format_tag` is not `"JSON"`/`"YAML"`.
    /// - `Io` for read failures other than a missing file.
    /// - `Decode` for malformed documents.
    /// - `InvalidRecord` if persisted field values fail reconstruction.
    pub fn load<R: Record>(&self, name: &str, format_tag: &str) -> PersistenceResult<Vec<R>> {
        let format = parse_format(format_tag)?;
        let path = self.path_for(name, format);
        Logger::trace(
            "DATASET_PATH_RESOLVED",
            &[("name", name), ("path", path.display().to_string().as_str())],
        );

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Logger::info(
                    "DATASET_ABSENT",
                    &[("kind", R::KIND.as_str()), ("name", name), ("format", format.tag())],
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(SerializationError::Io {
                    op: "read",
                    name: name.to_string(),
                    format,
                    source: e,
                })
            }
        };

        let records = codec::decode(format, name, &text)?;
        let count = records.len().to_string();
        Logger::info(
            "DATASET_LOADED",
            &[
                ("kind", R::KIND.as_str()),
                ("name", name),
                ("format", format.tag()),
                ("count", count.as_str()),
            ],
        );
        Ok(records)
    }

    /// Saves the dataset once per supported format, in canonical order.
    ///
    /// Attempts are independent: a failure in one format does not stop
    /// the other. Partial success is valid and observable; successful
    /// files stay on disk.
    ///
    /// # Errors
    ///
    /// Returns `FormatFailures` naming every format that failed (both,
    /// if both fail), each with its underlying error.
    pub fn save_all_formats<R: Record>(
        &self,
        dataset: Option<&[R]>,
        name: &str,
    ) -> PersistenceResult<()> {
        let mut failures = Vec::new();
        for format in Format::ALL {
            if let Err(e) = self.save(dataset, name, format.tag()) {
                Logger::error(
                    "DATASET_SAVE_FAILED",
                    &[
                        ("name", name),
                        ("format", format.tag()),
                        ("error", e.to_string().as_str()),
                    ],
                );
                failures.push((format, Box::new(e)));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(SerializationError::FormatFailures(failures))
        }
    }
}

fn parse_format(tag: &str) -> PersistenceResult<Format> {
    Format::parse_tag(tag).ok_or_else(|| SerializationError::UnsupportedFormat {
        format: tag.to_string(),
    })
}
