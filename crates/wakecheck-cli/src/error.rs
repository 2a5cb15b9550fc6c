//! Error types and handling for the CLI

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error loading or parsing the report file
    #[error(transparent)]
    Report(#[from] wakecheck_core::Error),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Report(wakecheck_core::Error::Io { .. }) => 1,
            Self::Report(wakecheck_core::Error::Parse { .. }) => 3,
            Self::Io(_) => 1,
            Self::Json(_) => 4,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_io_from_parse() {
        let io_err = Error::Report(wakecheck_core::Error::Io {
            path: "report.json".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(io_err.exit_code(), 1);

        let parse_err = Error::Report(wakecheck_core::Error::Parse {
            path: "report.json".into(),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        });
        assert_eq!(parse_err.exit_code(), 3);
    }

    #[test]
    fn plain_formatting_has_no_ansi_codes() {
        let err = Error::other("boom");
        assert_eq!(format_error(&err, false), "Error: boom");
    }
}
