//! Configuration for the skyscrapers-check CLI.
//!
//! Handles command-line argument parsing.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the board checker
#[derive(Debug, Parser)]
#[command(name = "skyscrapers-check")]
#[command(about = "Validate a skyscrapers puzzle board file")]
#[command(version)]
pub struct Args {
    /// Path to the board file to validate
    pub board: PathBuf,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Board file given on the command line
    pub board_path: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            board_path: args.board,
            log_level: args.log_level,
        })
    }
}
