//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use DD/MM/YYYY or YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid argument value.
    #[error("Invalid {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Explicit config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file exists but cannot be used.
    #[error("Configuration error in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// No platform config directory and no `--config`.
    #[error("No config directory on this platform; pass --config")]
    NoConfigDir,

    /// Refusing to overwrite an existing file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// The bond could not be valued at all.
    #[error("{identifier} could not be valued: {reason}")]
    NotValued { identifier: String, reason: String },
}

impl CliError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
