//! Error types for manual_catalog

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for catalog loading, validation and persistence
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O error, tagged with the path that was being touched
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// CSV reader or writer failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The catalog path points at a directory
    #[error("Catalog path is a directory: {}", .0.display())]
    IsDirectory(PathBuf),
    /// Header row has no `title` column
    #[error("Catalog header has no 'title' column")]
    MissingTitleColumn,
    /// A record with an empty title
    #[error("Title is empty")]
    EmptyTitle,
    /// Cover spelling outside the accepted set
    #[error("Unrecognized cover value: '{0}'")]
    InvalidCover(String),
    /// Box label outside BOX 1..BOX 3
    #[error("Unrecognized box label: '{0}'")]
    InvalidBox(String),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
