//! Error types for tcwatch
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tcwatch operations
pub type TcResult<T> = Result<T, TcError>;

/// Main error type for tcwatch operations
#[derive(Error, Debug)]
pub enum TcError {
    /// `extra_args` could not be turned into an argument list
    #[error("invalid extra_args: {message}")]
    InvalidExtraArgs { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// An option value was outside its recognized set
    #[error("invalid value '{value}' for {key} (expected one of: {expected})")]
    InvalidOption {
        key: String,
        value: String,
        expected: String,
    },

    /// The checker binary could not be started
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The file watcher backend failed
    #[error("file watcher error: {0}")]
    Watch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TcError {
    /// Whether this error is a configuration problem, detected before any
    /// process is spawned.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TcError::InvalidExtraArgs { .. }
                | TcError::InvalidConfig { .. }
                | TcError::InvalidOption { .. }
        )
    }
}

impl From<notify::Error> for TcError {
    fn from(err: notify::Error) -> Self {
        TcError::Watch(err.to_string())
    }
}
