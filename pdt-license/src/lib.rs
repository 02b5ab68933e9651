//! Licensing and activation for PDT Studio.
//!
//! This module handles:
//! - A random, persisted device id that stands in for a hardware fingerprint
//! - Decoding and checking activation keys against that id and an expiry
//! - Saving the raw key so it can be re-checked at every start
//!
//! # License Key Format
//!
//! Keys are formatted as: `base64({"hwid": "<device id>", "expiry": <ms>})`
//!
//! The encoding is reversible and unsigned. It deters casual sharing of a
//! key between machines; it does not stop anyone from minting keys.

mod clock;
mod config;
mod device;
mod error;
mod gate;
mod key;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{default_data_dir, LicenseConfig};
pub use device::{format_device_id, generate_device_id, DeviceIdentity, DEVICE_ID_HEX_LEN};
pub use error::{LicenseError, LicenseResult, Locale};
pub use gate::{LicenseGate, LicenseStatus};
pub use key::{issue_key, issue_key_for_days, LicenseRecord, ValidLicense};
pub use store::{FileStore, KeyValueStore, MemoryStore, STORE_FILE_NAME};
