//! Command implementations. Each returns the text to print.

use anyhow::{bail, Context, Result};
use pdt_license::{issue_key_for_days, Clock, KeyValueStore, LicenseGate, LicenseStatus, Locale};
use pdt_storyboard::{SessionStore, StoryboardDocument, StoryboardEditor};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Longest validity `issue_key` will mint.
pub const MAX_KEY_DAYS: i64 = 36_500;

/// Prints this device's id, creating it on first use.
pub fn device_id<S: KeyValueStore, C: Clock>(gate: &LicenseGate<S, C>) -> Result<String> {
    gate.device_id().context("Failed to load device id")
}

/// Validates and saves `key`.
///
/// A rejected key is an error carrying the localized message.
pub fn activate<S: KeyValueStore, C: Clock>(
    gate: &LicenseGate<S, C>,
    key: &str,
    locale: Locale,
) -> Result<String> {
    match gate.activate(key) {
        Ok(license) => Ok(format!(
            "Activated. Expires {}",
            license.expires_at().format("%Y-%m-%d %H:%M:%S UTC")
        )),
        Err(e) if e.is_rejection() => bail!(e.localized(locale)),
        Err(e) => Err(e).context("Activation failed"),
    }
}

/// Re-checks the saved key.
pub fn status<S: KeyValueStore, C: Clock>(
    gate: &LicenseGate<S, C>,
    locale: Locale,
) -> Result<String> {
    let device = gate.device_id().context("Failed to load device id")?;
    let line = match gate.status().context("Failed to check license")? {
        LicenseStatus::NotActivated => "Not activated".to_string(),
        LicenseStatus::Active(license) => format!(
            "Active until {} ({} days left)",
            license.expires_at().format("%Y-%m-%d %H:%M:%S UTC"),
            license.days_remaining(gate.now())
        ),
        LicenseStatus::Rejected(e) => format!("Inactive: {}", e.localized(locale)),
    };
    Ok(format!("Device: {device}\n{line}"))
}

/// Mints a key for `device` (or this device) valid for `days` days.
pub fn issue_key<S: KeyValueStore, C: Clock>(
    gate: &LicenseGate<S, C>,
    device: Option<&str>,
    days: i64,
) -> Result<String> {
    if !(1..=MAX_KEY_DAYS).contains(&days) {
        bail!("--days must be between 1 and {MAX_KEY_DAYS}");
    }
    let device = match device {
        Some(d) => d.to_string(),
        None => gate.device_id().context("Failed to load device id")?,
    };
    issue_key_for_days(&device, days, gate.now()).context("Failed to encode key")
}

/// Summarizes an exported storyboard file.
pub fn inspect_storyboard(path: &Path) -> Result<String> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let doc = StoryboardDocument::from_json(&json)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    summarize(&doc)
}

/// Replaces the saved editing session with an exported storyboard.
pub fn load_session(session: SessionStore, path: &Path) -> Result<String> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut editor = StoryboardEditor::open(session).context("Failed to open session")?;
    editor
        .import_json(&json)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    editor.save_session().context("Failed to save session")?;
    Ok(format!("Loaded {} scene(s) into the session", editor.scenes().len()))
}

/// Summarizes the saved editing session.
pub fn show_session(session: SessionStore) -> Result<String> {
    let editor = StoryboardEditor::open(session).context("Failed to open session")?;
    summarize(&editor.to_document())
}

/// Deletes the saved editing session, even one that no longer parses.
pub fn new_session(session: &SessionStore) -> Result<String> {
    session.clear().context("Failed to clear session")?;
    Ok("Started a new storyboard".to_string())
}

fn summarize(doc: &StoryboardDocument) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Storyboard v{} | {} | {} scene(s)",
        doc.version,
        doc.settings.aspect_ratio,
        doc.scenes.len()
    )?;
    for scene in &doc.scenes {
        let images = scene.image_urls().count();
        writeln!(
            out,
            "  #{:<3} {:?}/{:?} images={} {}",
            scene.scene,
            scene.start_frame.status,
            scene.end_frame.status,
            images,
            scene.animation_description
        )?;
    }
    Ok(out.trim_end().to_string())
}
