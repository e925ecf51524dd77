//! Session store errors.

use std::fmt;
use std::path::PathBuf;

/// Failure reading or writing the persisted session.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// The home directory could not be determined.
    NoHomeDirectory,

    /// Filesystem operation failed.
    Io { path: PathBuf, message: String },

    /// The session file is not valid JSON.
    Serialization { message: String },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            StoreError::NoHomeDirectory => {
                "Could not determine your home directory to store the session.".to_string()
            }
            StoreError::Io { .. } => {
                "Could not update the saved session. Please check file permissions.".to_string()
            }
            StoreError::Serialization { .. } => "The saved session is corrupt.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NoHomeDirectory => "E_STORE_HOME",
            StoreError::Io { .. } => "E_STORE_IO",
            StoreError::Serialization { .. } => "E_STORE_SERDE",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NoHomeDirectory => write!(f, "Home directory not found"),
            StoreError::Io { path, message } => {
                write!(f, "IO error on '{}': {}", path.display(), message)
            }
            StoreError::Serialization { message } => {
                write!(f, "Session serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization {
            message: err.to_string(),
        }
    }
}
