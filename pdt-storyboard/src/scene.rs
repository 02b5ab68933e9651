//! Scene and frame types.
//!
//! A storyboard is an ordered list of scenes. Each scene has a start and an
//! end frame, an animation description between them, and optionally a
//! generated video. Field names serialize in camelCase to match exported
//! files.

use serde::{Deserialize, Serialize};

/// Image source used for frames that have not picked one.
pub const DEFAULT_IMAGE_SOURCE: &str = "reference";

/// Progress of a generation request for a frame or video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Pending,
    /// Result available.
    Done,
    /// Request failed.
    Error,
}

/// One keyframe of a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Frame {
    pub description: String,
    pub status: GenerationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub image_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            description: String::new(),
            status: GenerationStatus::Idle,
            image_url: None,
            image_source: DEFAULT_IMAGE_SOURCE.to_string(),
            error: None,
        }
    }
}

/// A single scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// 1-based scene number.
    pub scene: u32,
    #[serde(default)]
    pub start_frame: Frame,
    #[serde(default)]
    pub animation_description: String,
    #[serde(default)]
    pub end_frame: Frame,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_status: Option<GenerationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_error: Option<String>,
    /// Handle of a long-running video job, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_operation: Option<serde_json::Value>,
}

impl Scene {
    /// Creates an empty scene with idle frames.
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            scene: number,
            start_frame: Frame::default(),
            animation_description: String::new(),
            end_frame: Frame::default(),
            video_prompt: None,
            video_status: None,
            video_url: None,
            video_error: None,
            video_operation: None,
        }
    }

    /// Returns the frame image URLs that have been generated, start first.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        [&self.start_frame, &self.end_frame]
            .into_iter()
            .filter_map(|f| f.image_url.as_deref())
    }
}

/// Renumbers scenes `1..=n` in their current order.
pub fn renumber(scenes: &mut [Scene]) {
    for (i, scene) in scenes.iter_mut().enumerate() {
        scene.scene = i as u32 + 1;
    }
}

/// Returns the number a newly appended scene should get.
#[must_use]
pub fn next_scene_number(scenes: &[Scene]) -> u32 {
    scenes.iter().map(|s| s.scene).max().map_or(1, |n| n + 1)
}
