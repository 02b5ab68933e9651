//! Explicit configuration for the license gate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Names and tags the gate uses. Passed to [`crate::LicenseGate::new`]
/// rather than read from global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    /// Prefix of generated device ids (`<TAG>-XXXXXXXXXXXXXXXX`).
    pub device_tag: String,
    /// Storage key under which the device id is persisted.
    pub device_id_key: String,
    /// Storage key under which the raw license key is persisted.
    pub license_key_key: String,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            device_tag: "CPU".to_string(),
            device_id_key: "pdt_hwid".to_string(),
            license_key_key: "pdt_license_key".to_string(),
        }
    }
}

/// Returns the platform data directory for the application, if the
/// platform has one.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("pdt-studio"))
}
