//! CLI-specific error type.
//!
//! Only configuration failures abort the run; demonstration steps log
//! their errors and continue.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// CLI failures.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
