//! Error types for zettel-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ZettelError.
pub type Result<T> = std::result::Result<T, ZettelError>;

/// Errors that can occur while scanning a card directory.
#[derive(Debug, Error)]
pub enum ZettelError {
    #[error("cards directory {} is unavailable: {source}", .path.display())]
    CardsDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read card {file}: {source}")]
    UnreadableCard {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
