//! Error types for cv-document

use std::path::PathBuf;

/// Result type for cv-document operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cv-document operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Document boundaries not found (missing \\begin{{document}} or \\end{{document}})")]
    BoundariesNotFound,

    #[error("Section not found: {name}")]
    SectionNotFound { name: String },

    #[error("Invalid insert position: {position}")]
    InvalidPosition { position: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
