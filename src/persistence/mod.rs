//! Dataset persistence: one save/load contract over any record kind.
//!
//! A dataset is an ordered sequence of records of one kind under a
//! logical name. Saving encodes it with the selected codec and writes
//! one file per (name, format); loading is the mirror, with an absent
//! file treated as an empty dataset. Every failure on this path
//! surfaces as [`SerializationError`].

mod codec;
mod errors;
mod format;
mod manager;

pub use errors::{PersistenceResult, SerializationError};
pub use format::Format;
pub use manager::PersistenceManager;
