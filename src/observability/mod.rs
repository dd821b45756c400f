//! Observability: structured logging.
//!
//! Logging is a side channel; no operation's outcome depends on it.

mod logger;

pub use logger::{Logger, Severity};
