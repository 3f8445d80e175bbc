use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for docbuild operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A build artifact could not be removed for a reason other than absence.
    #[error("Failed to delete '{}': {}", .path.display(), .source)]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An external program could not be started.
    #[error("Failed to launch '{command}': {source}")]
    ToolLaunch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Configuration value is invalid.
    #[error("{0}")]
    Configuration(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on I/O categories.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Delete { source, .. } | AppError::ToolLaunch { source, .. } => source.kind(),
            AppError::Configuration(_) | AppError::ConfigParse(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) => io::ErrorKind::NotFound,
        }
    }
}
