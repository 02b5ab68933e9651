//! Shared test helpers for license tests.

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use pdt_license::{FixedClock, LicenseConfig, LicenseGate, MemoryStore};

/// 2025-10-09T08:53:20Z, the instant every test gate reports.
pub const NOW_MS: i64 = 1_760_000_000_000;

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(NOW_MS).unwrap()
}

/// A gate over an empty in-memory store with the clock pinned at `NOW_MS`.
pub fn test_gate() -> LicenseGate<MemoryStore, FixedClock> {
    LicenseGate::with_clock(
        MemoryStore::new(),
        FixedClock::from_millis(NOW_MS),
        LicenseConfig::default(),
    )
}

/// Encodes an arbitrary payload string the way keys are encoded.
pub fn encode_payload(payload: &str) -> String {
    STANDARD.encode(payload.as_bytes())
}

/// Builds a key for `hwid` with a raw millisecond expiry.
pub fn make_key(hwid: &str, expiry_ms: i64) -> String {
    encode_payload(&format!(r#"{{"hwid":"{hwid}","expiry":{expiry_ms}}}"#))
}
