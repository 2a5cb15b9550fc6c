//! Output formatting and writing utilities
//!
//! FAILED lines go to stdout in check order, one per violation and nothing
//! else, the way downstream harness scripts expect to scan them. JSON mode
//! replaces the text lines with the serialized violation array.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};
use wakecheck_core::Violation;

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool) -> Self {
        Self {
            format,
            use_color,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(format: OutputFormat, use_color: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color,
            writer,
        }
    }

    /// Write the check results in the configured format
    pub fn violations(&mut self, violations: &[Violation]) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Json => {
                let mut body = serde_json::to_string_pretty(violations)?;
                body.push('\n');
                body
            }
            OutputFormat::Human => format_human(violations, self.use_color),
        };
        write!(self.writer, "{}", rendered)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render the human-readable report: one FAILED line per violation, and
/// nothing at all for a clean run
fn format_human(violations: &[Violation], use_color: bool) -> String {
    let mut output = String::new();

    for violation in violations {
        let line = violation.to_string();
        if use_color {
            output.push_str(&line.red().to_string());
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }

    output
}
