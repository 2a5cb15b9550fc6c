//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Wakecheck - pass/fail diagnostics over power test reports
///
/// Reads the JSON report produced by a suspend-blocker test run and prints a
/// FAILED line for every wakelock or suspend/resume metric outside its
/// threshold.
#[derive(Parser, Debug)]
#[command(name = "wakecheck", version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON report file
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Enable verbose output (use -vv to dump every record field)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output; FAILED lines still print
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Exit with a non-zero status when any check fails
    #[arg(long)]
    pub check: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable FAILED lines plus a summary
    Human,
    /// The violations as a JSON array
    Json,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}
