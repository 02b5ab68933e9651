use pdt_storyboard::{
    SessionStore, StoryboardEditor, StoryboardError, StoryboardLanguage, SESSION_FILE_NAME,
};
use pretty_assertions::assert_eq;

fn store_in(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::in_dir(dir.path())
}

// ── SessionStore ─────────────────────────────────────────────────

#[test]
fn load_without_session_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store_in(&dir).load().unwrap().is_none());
}

#[test]
fn session_file_lives_in_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(store_in(&dir).path(), dir.path().join(SESSION_FILE_NAME));
}

#[test]
fn empty_session_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SESSION_FILE_NAME), "  \n").unwrap();
    assert!(store_in(&dir).load().unwrap().is_none());
}

#[test]
fn corrupt_session_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SESSION_FILE_NAME), "{not json").unwrap();
    assert!(matches!(store_in(&dir).load(), Err(StoryboardError::Parse(_))));
}

#[test]
fn save_creates_missing_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::in_dir(&dir.path().join("nested").join("data"));
    store.save(&StoryboardEditor::new().to_document()).unwrap();
    assert!(store.path().exists());
    assert!(!store.path().with_extension("json.tmp").exists());
}

#[test]
fn clear_missing_session_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store_in(&dir).clear().is_ok());
}

// ── Editor sessions ──────────────────────────────────────────────

#[test]
fn open_without_session_starts_blank() {
    let dir = tempfile::tempdir().unwrap();
    let editor = StoryboardEditor::open(store_in(&dir)).unwrap();
    assert!(editor.scenes().is_empty());
    assert_eq!(editor.session(), Some(&store_in(&dir)));
}

#[test]
fn saved_session_reopens_with_fresh_history() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut editor = StoryboardEditor::open(store_in(&dir)).unwrap();
        editor.add_scene();
        editor.add_scene();
        editor.settings_mut().storyboard_language = StoryboardLanguage::En;
        editor.save_session().unwrap();
    }

    let reopened = StoryboardEditor::open(store_in(&dir)).unwrap();
    let numbers: Vec<u32> = reopened.scenes().iter().map(|s| s.scene).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(reopened.settings().storyboard_language, StoryboardLanguage::En);
    assert!(!reopened.can_undo());
    assert_eq!(reopened.history().len(), 1);
}

#[test]
fn empty_storyboard_session_is_saved() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = StoryboardEditor::open(store_in(&dir)).unwrap();
    editor.settings_mut().idea = "a quiet harbour".into();
    editor.save_session().unwrap();

    let reopened = StoryboardEditor::open(store_in(&dir)).unwrap();
    assert_eq!(reopened.settings().idea, "a quiet harbour");
    assert!(reopened.scenes().is_empty());
}

#[test]
fn new_storyboard_clears_saved_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = StoryboardEditor::open(store_in(&dir)).unwrap();
    editor.add_scene();
    editor.save_session().unwrap();
    assert!(store_in(&dir).path().exists());

    editor.new_storyboard().unwrap();
    assert!(!store_in(&dir).path().exists());
    assert!(StoryboardEditor::open(store_in(&dir)).unwrap().scenes().is_empty());
}

#[test]
fn editor_without_session_saves_nothing() {
    let mut editor = StoryboardEditor::new();
    editor.add_scene();
    assert!(editor.session().is_none());
    assert!(editor.save_session().is_ok());
    assert!(editor.new_storyboard().is_ok());
}
