//! Error types for the command line tool.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors loading or writing the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file not found at {}; run `zettel init` to create one", .0.display())]
    NotFound(PathBuf),

    #[error("settings file already exists at {}; edit it directly", .0.display())]
    AlreadyExists(PathBuf),

    #[error("cannot determine a configuration directory")]
    NoConfigDir,

    #[error("failed to access settings {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors handling individual card files.
#[derive(Debug, Error)]
pub enum CardFileError {
    #[error("invalid card file name: {0:?}")]
    InvalidName(String),

    #[error("card {0} does not exist")]
    NotFound(String),

    #[error("editor command is empty")]
    EmptyEditor,

    #[error("cannot parse editor command {command}: {source}")]
    InvalidEditor {
        command: String,
        #[source]
        source: shell_words::ParseError,
    },

    #[error("failed to start editor {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor {command} exited with {status}")]
    EditorFailed { command: String, status: ExitStatus },
}
