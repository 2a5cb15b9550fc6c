//! Error types for report loading

use std::io;
use std::path::PathBuf;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a report file
///
/// Threshold violations are not represented here; they are ordinary values
/// returned by the checkers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The report file could not be read
    #[error("failed to read report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report file is not valid JSON, or a record is missing an
    /// expected field or carries one of the wrong type
    #[error("invalid report {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
