//! Format codecs: dataset text encoding and decoding.
//!
//! Two interchangeable strategies over the [`Record`] trait. Encoding
//! renders an ordered array/sequence of objects, one per record,
//! constructor fields only. Decoding parses the document into wire
//! structs and rebuilds every record through the validating
//! constructor, so persisted data cannot bypass validation.
//!
//! Wire structs reject unknown fields, so a document with extra
//! attributes fails decoding rather than being silently accepted.

use crate::model::Record;

use super::errors::{PersistenceResult, SerializationError};
use super::format::Format;

/// Encodes a dataset to format-correct text.
///
/// # Errors
///
/// Returns `SerializationError::Encode` carrying the serde cause.
pub(crate) fn encode<R: Record>(
    format: Format,
    name: &str,
    records: &[R],
) -> PersistenceResult<String> {
    let wire: Vec<R::Wire> = records.iter().map(|record| record.to_wire()).collect();
    match format {
        Format::Json => serde_json::to_string_pretty(&wire).map_err(|e| {
            SerializationError::Encode {
                name: name.to_string(),
                format,
                source: Box::new(e),
            }
        }),
        Format::Yaml => serde_yaml::to_string(&wire).map_err(|e| SerializationError::Encode {
            name: name.to_string(),
            format,
            source: Box::new(e),
        }),
    }
}

/// Decodes a dataset from text, re-validating every record.
///
/// # Errors
///
/// - `SerializationError::Decode` if the document is not valid
///   JSON/YAML of the expected shape (including unknown fields).
/// - `SerializationError::InvalidRecord` if a structurally valid record
///   fails reconstruction, exactly as direct construction would.
pub(crate) fn decode<R: Record>(
    format: Format,
    name: &str,
    text: &str,
) -> PersistenceResult<Vec<R>> {
    let wire: Vec<R::Wire> = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| SerializationError::Decode {
            name: name.to_string(),
            format,
            source: Box::new(e),
        })?,
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| SerializationError::Decode {
            name: name.to_string(),
            format,
            source: Box::new(e),
        })?,
    };
    wire.into_iter()
        .map(|w| R::from_wire(w).map_err(SerializationError::from))
        .collect()
}
