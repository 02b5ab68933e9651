//! Storyboard scene lists for PDT Studio.
//!
//! - [`Scene`] and [`Frame`]: the editable document, compared by value
//! - [`StoryboardDocument`]: the JSON export format (version 2.0)
//! - [`StoryboardEditor`]: scene operations backed by undo/redo history
//! - [`SessionStore`]: the autosaved editing session

mod document;
mod editor;
mod error;
mod scene;
mod session;

pub use document::{
    export_file_name, InputMethod, ScriptType, StoryboardDocument, StoryboardLanguage,
    StoryboardSettings, DEFAULT_ASPECT_RATIO, DOCUMENT_VERSION,
};
pub use editor::{MoveDirection, StoryboardEditor};
pub use error::{StoryboardError, StoryboardResult};
pub use scene::{next_scene_number, renumber, Frame, GenerationStatus, Scene, DEFAULT_IMAGE_SOURCE};
pub use session::{SessionStore, SESSION_FILE_NAME};
