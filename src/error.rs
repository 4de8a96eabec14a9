//! Error types for palette loading and progress calculation.
use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while reading a palette file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read palette file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON object.
    #[error("failed to parse palette file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// `true` when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Errors raised while computing year progress.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The year boundaries around the timestamp cannot be represented.
    #[error("year {0} is outside the supported date range")]
    YearOutOfRange(i32),

    /// A `--date` value that matches none of the accepted formats.
    #[error(
        "invalid timestamp '{0}', expected RFC 3339, 'YYYY-MM-DDTHH:MM:SS' or 'YYYY-MM-DD'"
    )]
    InvalidTimestamp(String),
}
