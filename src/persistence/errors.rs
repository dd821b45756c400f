//! Persistence error type.
//!
//! Everything that can go wrong on the save/load path surfaces as one
//! `SerializationError`, with enough context (operation, logical name,
//! format, underlying cause) to diagnose without re-running. The one
//! exception that is preserved rather than re-wrapped is `InvalidData`
//! raised while reconstructing records during decode: it passes through
//! transparently so callers can tell bad persisted data from format or
//! I/O failures.

use std::io;

use thiserror::Error;

use crate::model::InvalidData;

use super::format::Format;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, SerializationError>;

/// The single failure kind at the save/load boundary.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// `save` was called without a dataset.
    #[error("cannot save '{name}': dataset is missing")]
    MissingDataset { name: String },

    /// The format tag is not one of the supported case-sensitive tags.
    #[error("unsupported format '{format}' (expected \"JSON\" or \"YAML\")")]
    UnsupportedFormat { format: String },

    /// Reading or writing the dataset file failed.
    #[error("failed to {op} '{name}' as {format}: {source}")]
    Io {
        op: &'static str,
        name: String,
        format: Format,
        #[source]
        source: io::Error,
    },

    /// Encoding the dataset to text failed.
    #[error("failed to encode '{name}' as {format}: {source}")]
    Encode {
        name: String,
        format: Format,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The document is not valid JSON/YAML of the expected shape.
    #[error("failed to decode '{name}' as {format}: {source}")]
    Decode {
        name: String,
        format: Format,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A decoded record failed reconstruction through the validating
    /// constructor. Preserved, never flattened into a generic message.
    #[error(transparent)]
    InvalidRecord(#[from] InvalidData),

    /// One or more formats failed during `save_all_formats`.
    #[error("save_all_formats failed for {}", describe_failures(.0))]
    FormatFailures(Vec<(Format, Box<SerializationError>)>),
}

fn describe_failures(failures: &[(Format, Box<SerializationError>)]) -> String {
    failures
        .iter()
        .map(|(format, err)| format!("{}: {}", format, err))
        .collect::<Vec<_>>()
        .join("; ")
}

impl SerializationError {
    /// Formats that failed, for `FormatFailures`; empty otherwise.
    pub fn failed_formats(&self) -> Vec<Format> {
        match self {
            SerializationError::FormatFailures(failures) => {
                failures.iter().map(|(format, _)| *format).collect()
            }
            _ => Vec::new(),
        }
    }
}
