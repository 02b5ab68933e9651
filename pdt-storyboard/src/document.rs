//! The exported storyboard file.
//!
//! A file is one JSON object: the editor settings flattened alongside
//! `version` and `scenes`. Import is lenient the way the editor always has
//! been: any missing, `null` or empty setting falls back to its default.
//! Only the scene list itself is required.

use crate::error::{StoryboardError, StoryboardResult};
use crate::scene::Scene;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Format version written on export.
pub const DOCUMENT_VERSION: &str = "2.0";

/// Aspect ratio used when none is set.
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";

/// How the script was provided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    #[default]
    Prompt,
    Text,
    Audio,
}

/// Language the storyboard is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryboardLanguage {
    #[default]
    Vi,
    En,
    Zh,
}

/// Kind of script to develop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    #[default]
    Auto,
    Dialogue,
    Action,
}

/// Treats JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treats JSON `null` and `""` like a missing field.
fn blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(T::default()),
        Some(Value::String(s)) if s.is_empty() => Ok(T::default()),
        Some(value) => T::deserialize(value).map_err(D::Error::custom),
    }
}

/// Everything in a storyboard except the scene list.
///
/// These settings are not part of undo history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryboardSettings {
    #[serde(deserialize_with = "blank_as_default")]
    pub active_input: InputMethod,
    #[serde(deserialize_with = "null_as_default")]
    pub idea: String,
    #[serde(deserialize_with = "null_as_default")]
    pub script_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_images: Vec<String>,
    /// Summary produced by the script model, kept opaque.
    pub script_summary: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub style: String,
    /// Requested scene count; 0 lets the model decide.
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_scenes: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub aspect_ratio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "blank_as_default")]
    pub storyboard_language: StoryboardLanguage,
    #[serde(deserialize_with = "blank_as_default")]
    pub script_type: ScriptType,
    #[serde(deserialize_with = "null_as_default")]
    pub keep_clothing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub keep_background: bool,
}

impl Default for StoryboardSettings {
    fn default() -> Self {
        Self {
            active_input: InputMethod::default(),
            idea: String::new(),
            script_text: String::new(),
            reference_images: Vec::new(),
            script_summary: None,
            style: String::new(),
            number_of_scenes: 0,
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            notes: String::new(),
            storyboard_language: StoryboardLanguage::default(),
            script_type: ScriptType::default(),
            keep_clothing: false,
            keep_background: false,
        }
    }
}

/// A complete storyboard as written to and read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardDocument {
    pub version: String,
    #[serde(flatten)]
    pub settings: StoryboardSettings,
    pub scenes: Vec<Scene>,
}

/// Import shape: the scene list may be absent.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(flatten)]
    settings: StoryboardSettings,
    #[serde(default)]
    scenes: Option<Vec<Scene>>,
}

impl StoryboardDocument {
    /// Builds a document at the current format version.
    #[must_use]
    pub fn new(settings: StoryboardSettings, scenes: Vec<Scene>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            settings,
            scenes,
        }
    }

    /// Parses an exported file.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for invalid JSON and `MissingScenes` when the file has
    /// no `scenes` array.
    pub fn from_json(json: &str) -> StoryboardResult<Self> {
        let (settings, scenes) = parse(json)?;
        let scenes = scenes.ok_or(StoryboardError::MissingScenes)?;
        Ok(Self::new(settings, scenes))
    }

    /// Parses a saved editing session.
    ///
    /// Unlike [`StoryboardDocument::from_json`], a session without scenes is
    /// an empty storyboard rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for invalid JSON.
    pub fn from_session_json(json: &str) -> StoryboardResult<Self> {
        let (settings, scenes) = parse(json)?;
        Ok(Self::new(settings, scenes.unwrap_or_default()))
    }

    /// Serializes the document for export.
    ///
    /// # Errors
    ///
    /// Returns `NothingToExport` when there are no scenes.
    pub fn to_json(&self) -> StoryboardResult<String> {
        if self.scenes.is_empty() {
            return Err(StoryboardError::NothingToExport);
        }
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn parse(json: &str) -> StoryboardResult<(StoryboardSettings, Option<Vec<Scene>>)> {
    let raw: RawDocument = serde_json::from_str(json)?;
    let mut settings = raw.settings;
    if settings.aspect_ratio.is_empty() {
        settings.aspect_ratio = DEFAULT_ASPECT_RATIO.to_string();
    }
    Ok((settings, raw.scenes))
}

/// Returns the conventional export file name for a timestamp in ms.
#[must_use]
pub fn export_file_name(timestamp_ms: i64) -> String {
    format!("PDT-AI-storyboard-{timestamp_ms}.json")
}
