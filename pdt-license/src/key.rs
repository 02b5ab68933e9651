//! License key encoding and validation.
//!
//! Keys use the format: `base64(json)` where the JSON object is
//! `{"hwid": "<device id>", "expiry": <ms since epoch>}`.
//!
//! The key is obfuscated, not signed. Anyone who knows a device id can mint
//! a key for it; validation only checks the binding and the expiry.

use crate::error::{LicenseError, LicenseResult};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Standard alphabet; padding is written on encode and optional on decode.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The decoded license record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// Device id the key is bound to.
    pub hwid: String,
    /// Expiry (milliseconds since epoch).
    pub expiry: i64,
}

impl LicenseRecord {
    /// Creates a record for `hwid` expiring at `expires_at`.
    #[must_use]
    pub fn new(hwid: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            hwid: hwid.into(),
            expiry: expires_at.timestamp_millis(),
        }
    }

    /// Decodes a raw key string.
    ///
    /// ASCII whitespace anywhere in the key is ignored, so a key wrapped
    /// across lines still decodes. Every decode or parse failure collapses
    /// into [`LicenseError::MalformedKey`].
    ///
    /// # Errors
    ///
    /// Returns `EmptyKey` for blank input and `MalformedKey` otherwise.
    pub fn decode(key: &str) -> LicenseResult<Self> {
        let compact: String = key.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if compact.is_empty() {
            return Err(LicenseError::EmptyKey);
        }

        let json = KEY_ENGINE
            .decode(&compact)
            .map_err(|e| LicenseError::MalformedKey(format!("invalid base64: {e}")))?;

        let record: Self = serde_json::from_slice(&json)
            .map_err(|e| LicenseError::MalformedKey(format!("invalid payload JSON: {e}")))?;

        if record.expires_at().is_none() {
            return Err(LicenseError::MalformedKey(format!(
                "expiry {} is out of range",
                record.expiry
            )));
        }

        Ok(record)
    }

    /// Encodes the record into a key string.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn encode(&self) -> LicenseResult<String> {
        let json = serde_json::to_vec(self)?;
        Ok(KEY_ENGINE.encode(json))
    }

    /// Returns the expiry as a date-time, or `None` if it is out of range.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expiry)
    }

    /// Checks this record against the current device and time.
    ///
    /// The key is expired only when its expiry is strictly before `now`.
    ///
    /// # Errors
    ///
    /// Returns `DeviceMismatch` or `Expired`.
    pub fn check(&self, device_id: &str, now: DateTime<Utc>) -> LicenseResult<DateTime<Utc>> {
        if self.hwid != device_id {
            return Err(LicenseError::DeviceMismatch);
        }

        let expires_at = self.expires_at().ok_or_else(|| {
            LicenseError::MalformedKey(format!("expiry {} is out of range", self.expiry))
        })?;

        if self.expiry < now.timestamp_millis() {
            return Err(LicenseError::Expired(expires_at));
        }

        Ok(expires_at)
    }
}

/// A key that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidLicense {
    raw: String,
    record: LicenseRecord,
    expires_at: DateTime<Utc>,
}

impl ValidLicense {
    /// Decodes `key` and checks it for `device_id` at `now`.
    ///
    /// # Errors
    ///
    /// Returns one of the four key rejections.
    pub fn validate(key: &str, device_id: &str, now: DateTime<Utc>) -> LicenseResult<Self> {
        let record = LicenseRecord::decode(key)?;
        let expires_at = record.check(device_id, now)?;
        Ok(Self {
            raw: key.to_string(),
            record,
            expires_at,
        })
    }

    /// Returns the key exactly as entered.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the decoded record.
    #[must_use]
    pub fn record(&self) -> &LicenseRecord {
        &self.record
    }

    /// Returns the expiry.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns whole days left before expiry (0 on the last day).
    #[must_use]
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_days().max(0)
    }
}

/// Mints a key for `device_id` expiring at `expires_at`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn issue_key(device_id: &str, expires_at: DateTime<Utc>) -> LicenseResult<String> {
    LicenseRecord::new(device_id, expires_at).encode()
}

/// Mints a key for `device_id` valid for `days` days from `now`.
///
/// # Errors
///
/// Returns `MalformedKey` if the resulting expiry is not representable.
pub fn issue_key_for_days(device_id: &str, days: i64, now: DateTime<Utc>) -> LicenseResult<String> {
    let expires_at = Duration::try_days(days)
        .and_then(|d| now.checked_add_signed(d))
        .ok_or_else(|| LicenseError::MalformedKey(format!("{days} days is out of range")))?;
    issue_key(device_id, expires_at)
}
