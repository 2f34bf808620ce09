//! Error types for book generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
///
/// Recoverable conditions (a missing source argument, a stub that already
/// exists) never surface here; they are logged and skipped where detected.
#[derive(Debug, Error)]
pub enum GenError {
    /// Filesystem failure while reading the source tree or writing the book.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An ignore pattern that is not a valid glob.
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl GenError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
