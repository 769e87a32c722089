//! Shared error types for the crate

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scoreboard operations
#[derive(Debug, Error)]
pub enum Error {
    /// Board removal outside `[0, capacity)`
    #[error("Index {index} is out of bounds for a board of capacity {capacity}")]
    InvalidIndex { index: usize, capacity: usize },

    /// A board cannot hold zero entries
    #[error("Board capacity must be positive, got {0}")]
    InvalidCapacity(usize),

    /// Entry text that is not `NAME:SCORE`
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system related errors
    #[error("File system error at {}: {message}", .path.display())]
    FileSystem { message: String, path: PathBuf },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// TOML decoding errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
