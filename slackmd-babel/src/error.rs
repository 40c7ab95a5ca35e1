//! Error types for archive loading and publishing

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a Slack export or writing the Markdown output.
///
/// Scanning, resolving and rendering never fail; only the I/O collaborators
/// around them surface errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A file or directory could not be read or written
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A metadata or history file is not valid JSON for its expected shape
    #[error("malformed JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Chunking was requested with a size of zero
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
}

impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from strict parsing of a Slack `ts` token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("malformed Slack timestamp '{0}'")]
    Malformed(String),
    #[error("Slack timestamp '{0}' is out of range")]
    OutOfRange(String),
}

/// Errors from parsing a display zone setting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("invalid UTC offset '{0}', expected 'local', 'utc' or ±HH:MM")]
    InvalidOffset(String),
}
