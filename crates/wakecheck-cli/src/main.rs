//! Wakecheck CLI - pass/fail diagnostics over power test reports
//!
//! This is the main entry point for the wakecheck binary: it loads the JSON
//! report named on the command line, runs the wakelock and klog threshold
//! checks, and prints the violations.

mod cli;
mod error;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use error::Result;
use output::OutputWriter;
use std::process;
use tracing::info;
use wakecheck_core::{check_report, Report, Violation};

/// Exit code when `--check` is set and any violation was reported. Clap
/// claims 2 for usage errors, so this stays clear of it.
const EXIT_CHECKS_FAILED: i32 = 5;

fn main() {
    let cli = Cli::parse_args();

    control::set_override(cli.use_color());

    if let Err(e) = logging::init(cli.verbosity_level(), cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic; returns the process exit code on success
fn run(cli: Cli) -> Result<i32> {
    info!(report = %cli.report.display(), "loading report");
    let report = Report::from_path(&cli.report)?;

    let violations = check_report(&report);
    info!(count = violations.len(), "checks complete");

    let mut output = OutputWriter::new(cli.output, cli.use_color());
    output.violations(&violations)?;

    Ok(exit_code_for(cli.check, &violations))
}

/// Pick the process exit code for a completed run
///
/// Without --check the exit code stays 0 even when FAILED lines were
/// printed; callers that scan stdout rely on that.
fn exit_code_for(check: bool, violations: &[Violation]) -> i32 {
    if check && !violations.is_empty() {
        EXIT_CHECKS_FAILED
    } else {
        0
    }
}
