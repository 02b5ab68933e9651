//! Undoable storyboard editing.
//!
//! Every change to the scene list is committed to a [`History`], so undo and
//! redo step through whole scene lists. Settings edits are not tracked.
//!
//! An editor opened on a [`SessionStore`] can save itself there and clears
//! it when a new storyboard is started.

use crate::document::{StoryboardDocument, StoryboardSettings};
use crate::error::StoryboardResult;
use crate::scene::{next_scene_number, renumber, Scene};
use crate::session::SessionStore;
use pdt_history::History;
use tracing::debug;

/// Direction for [`StoryboardEditor::move_scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Editor state for one storyboard.
#[derive(Debug, Clone)]
pub struct StoryboardEditor {
    settings: StoryboardSettings,
    history: History<Vec<Scene>>,
    session: Option<SessionStore>,
}

impl Default for StoryboardEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryboardEditor {
    /// Creates an empty storyboard with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: StoryboardSettings::default(),
            history: History::new(Vec::new()),
            session: None,
        }
    }

    /// Restores a saved or imported document. Its scenes become the origin
    /// of a fresh history.
    #[must_use]
    pub fn from_document(document: StoryboardDocument) -> Self {
        Self {
            settings: document.settings,
            history: History::new(document.scenes),
            session: None,
        }
    }

    /// Restores the session saved in `session`, or starts blank if there is
    /// none. The editor keeps the store for later saves.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::load`].
    pub fn open(session: SessionStore) -> StoryboardResult<Self> {
        let mut editor = match session.load()? {
            Some(document) => Self::from_document(document),
            None => Self::new(),
        };
        editor.session = Some(session);
        Ok(editor)
    }

    /// Returns the session store this editor was opened on.
    #[must_use]
    pub fn session(&self) -> Option<&SessionStore> {
        self.session.as_ref()
    }

    /// Writes the current state to the session store, if any.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::save`].
    pub fn save_session(&self) -> StoryboardResult<()> {
        match &self.session {
            Some(session) => session.save(&self.to_document()),
            None => Ok(()),
        }
    }

    /// Returns the current scene list.
    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        self.history.current()
    }

    /// Returns the settings.
    #[must_use]
    pub fn settings(&self) -> &StoryboardSettings {
        &self.settings
    }

    /// Returns the settings for editing.
    pub fn settings_mut(&mut self) -> &mut StoryboardSettings {
        &mut self.settings
    }

    /// Returns the underlying history.
    #[must_use]
    pub fn history(&self) -> &History<Vec<Scene>> {
        &self.history
    }

    /// Commits a new scene list. Returns false if it equals the current one.
    pub fn set_scenes(&mut self, scenes: Vec<Scene>) -> bool {
        let committed = self.history.commit(scenes);
        if committed {
            debug!(
                scenes = self.scenes().len(),
                position = self.history.cursor(),
                "Committed scene edit"
            );
        }
        committed
    }

    /// Appends an empty scene and returns its number.
    pub fn add_scene(&mut self) -> u32 {
        let number = next_scene_number(self.scenes());
        let mut scenes = self.scenes().to_vec();
        scenes.push(Scene::new(number));
        self.set_scenes(scenes);
        number
    }

    /// Removes the scene at `index` and renumbers the rest.
    ///
    /// Out-of-range indices are ignored. Returns true if a scene was removed.
    pub fn delete_scene(&mut self, index: usize) -> bool {
        if index >= self.scenes().len() {
            return false;
        }
        let mut scenes = self.scenes().to_vec();
        scenes.remove(index);
        renumber(&mut scenes);
        self.set_scenes(scenes)
    }

    /// Swaps the scene at `index` with its neighbour and renumbers.
    ///
    /// Moving the first scene up or the last scene down does nothing.
    pub fn move_scene(&mut self, index: usize, direction: MoveDirection) -> bool {
        let len = self.scenes().len();
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1),
        };
        let Some(target) = target.filter(|&t| t < len && index < len) else {
            return false;
        };

        let mut scenes = self.scenes().to_vec();
        scenes.swap(index, target);
        renumber(&mut scenes);
        self.set_scenes(scenes)
    }

    /// Edits a copy of the scene at `index` and commits the result.
    ///
    /// Returns false if the index is out of range or the edit changed nothing.
    pub fn update_scene(&mut self, index: usize, edit: impl FnOnce(&mut Scene)) -> bool {
        let mut scenes = self.scenes().to_vec();
        let Some(scene) = scenes.get_mut(index) else {
            return false;
        };
        edit(scene);
        self.set_scenes(scenes)
    }

    /// Returns true if there is an earlier scene list.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if an undone scene list can be restored.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Steps back and returns the scene list now current.
    pub fn undo(&mut self) -> &[Scene] {
        self.history.undo()
    }

    /// Steps forward and returns the scene list now current.
    pub fn redo(&mut self) -> &[Scene] {
        self.history.redo()
    }

    /// Discards everything and starts a blank storyboard. A saved session
    /// is deleted.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::clear`]. The editor is reset even on error.
    pub fn new_storyboard(&mut self) -> StoryboardResult<()> {
        self.settings = StoryboardSettings::default();
        self.history.reset(Vec::new());
        debug!("Started new storyboard");
        match &self.session {
            Some(session) => session.clear(),
            None => Ok(()),
        }
    }

    /// Replaces settings and scenes from an exported file.
    ///
    /// On error the editor is left untouched.
    ///
    /// # Errors
    ///
    /// See [`StoryboardDocument::from_json`].
    pub fn import_json(&mut self, json: &str) -> StoryboardResult<()> {
        let document = StoryboardDocument::from_json(json)?;
        debug!(scenes = document.scenes.len(), "Imported storyboard");
        self.settings = document.settings;
        self.history.load_external(document.scenes);
        Ok(())
    }

    /// Snapshots the current state as a document.
    #[must_use]
    pub fn to_document(&self) -> StoryboardDocument {
        StoryboardDocument::new(self.settings.clone(), self.scenes().to_vec())
    }

    /// Serializes the current state for export.
    ///
    /// # Errors
    ///
    /// Returns `NothingToExport` when there are no scenes.
    pub fn export_json(&self) -> StoryboardResult<String> {
        self.to_document().to_json()
    }
}
