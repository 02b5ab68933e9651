//! Error types for the licensing module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language used for user-facing rejection messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    En,
    /// Vietnamese.
    #[default]
    Vi,
}

/// Licensing-specific errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// No key was entered.
    #[error("license key is empty")]
    EmptyKey,

    /// The key could not be decoded into a license record.
    #[error("malformed license key: {0}")]
    MalformedKey(String),

    /// The key was issued for another device.
    #[error("license key was issued for a different device")]
    DeviceMismatch,

    /// The key's expiry is in the past.
    #[error("license expired on {0}")]
    Expired(DateTime<Utc>),

    /// Persistent storage could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LicenseError {
    /// Returns true for the four outcomes a user can cause by entering a key.
    ///
    /// Everything else is an infrastructure fault.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::EmptyKey | Self::MalformedKey(_) | Self::DeviceMismatch | Self::Expired(_)
        )
    }

    /// Returns the message shown to the user in the given locale.
    #[must_use]
    pub fn localized(&self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::Vi, Self::EmptyKey) => "Vui lòng nhập khóa.".to_string(),
            (Locale::Vi, Self::MalformedKey(_)) => "Khóa không hợp lệ hoặc bị lỗi.".to_string(),
            (Locale::Vi, Self::DeviceMismatch) => {
                "Khóa này không dành cho máy tính này.".to_string()
            }
            (Locale::Vi, Self::Expired(_)) => "Khóa đã hết hạn sử dụng.".to_string(),
            (Locale::En, Self::EmptyKey) => "Please enter a key.".to_string(),
            (Locale::En, Self::MalformedKey(_)) => "The key is invalid or corrupted.".to_string(),
            (Locale::En, Self::DeviceMismatch) => {
                "This key is not for this computer.".to_string()
            }
            (Locale::En, Self::Expired(_)) => "The key has expired.".to_string(),
            (_, other) => other.to_string(),
        }
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
