//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coursevault - validated course-catalog records with JSON and YAML persistence
#[derive(Parser, Debug)]
#[command(name = "coursevault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the persistence demonstration
    Demo {
        /// Path to configuration file
        #[arg(long, default_value = "./coursevault.json")]
        config: PathBuf,

        /// Override the base data directory from the config
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
