//! Error types for storyboard import and export.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for storyboard operations.
pub type StoryboardResult<T> = Result<T, StoryboardError>;

/// Errors that can occur when loading or saving a storyboard.
#[derive(Debug, Error)]
pub enum StoryboardError {
    /// The file is not valid JSON or a field has the wrong shape.
    #[error("invalid storyboard file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file parsed but carries no scene list.
    #[error("storyboard file has no scenes")]
    MissingScenes,

    /// Export was requested for a storyboard without scenes.
    #[error("nothing to export: storyboard has no scenes")]
    NothingToExport,

    /// The saved session could not be read or written.
    #[error("session I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
