//! Application errors.

use std::io;
use std::path::PathBuf;

use weather_common::SnapshotError;

/// Everything that can stop the dashboard before the window opens.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The snapshot file is not valid snapshot JSON.
    #[error("failed to parse snapshot {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot parsed but holds out-of-range readings.
    #[error("invalid snapshot {path}: {source}")]
    InvalidSnapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },

    /// A command-line value is outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
