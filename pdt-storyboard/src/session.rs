//! The autosaved editing session.
//!
//! The editor's state is kept in one JSON file in the data directory so a
//! storyboard survives closing the app. The file uses the export format but
//! may hold an empty scene list.

use crate::document::StoryboardDocument;
use crate::error::{StoryboardError, StoryboardResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name used by [`SessionStore`] inside a data directory.
pub const SESSION_FILE_NAME: &str = "storyboard.json";

fn io_error(path: &Path, source: io::Error) -> StoryboardError {
    StoryboardError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Saves, restores and clears the editing session on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Uses the session file at `path`. Nothing is touched until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the session file inside `data_dir`.
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(SESSION_FILE_NAME))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `document` through a temporary sibling and a rename.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be written.
    pub fn save(&self, document: &StoryboardDocument) -> StoryboardResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        let json = serde_json::to_string_pretty(document)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| io_error(&self.path, e))?;
        debug!(path = %self.path.display(), scenes = document.scenes.len(), "Saved session");
        Ok(())
    }

    /// Reads the saved session, if there is one.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file exists but cannot be read, or `Parse` if it
    /// is not a storyboard.
    pub fn load(&self) -> StoryboardResult<Option<StoryboardDocument>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        let document = StoryboardDocument::from_session_json(&content)?;
        debug!(path = %self.path.display(), scenes = document.scenes.len(), "Loaded session");
        Ok(Some(document))
    }

    /// Deletes the saved session. Clearing a missing session is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file exists but cannot be removed.
    pub fn clear(&self) -> StoryboardResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Cleared session");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&self.path, e)),
        }
    }
}
