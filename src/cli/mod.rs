//! CLI module.
//!
//! One command: `demo`, which exercises the whole persistence surface
//! against the configured data directory.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{demo, run};
pub use errors::{CliError, CliResult};
