//! Logging setup for the CLI
//!
//! Maps the `-v` count onto a tracing level filter and installs a stderr
//! subscriber, keeping stdout reserved for check results. `RUST_LOG` takes
//! precedence over the verbosity flag when set.

use crate::error::{Error, Result};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Default level directive for a verbosity level
fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global logging system
///
/// Quiet mode drops everything below error level regardless of verbosity.
pub fn init(verbosity: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else {
        default_level(verbosity)
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(verbosity > 2)
        .compact()
        .try_init()
        .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))
}
