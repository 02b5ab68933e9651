//! Device identifier used for license binding.
//!
//! The id is random rather than derived from hardware: it is generated once,
//! persisted, and then treated as this machine's fingerprint for as long as
//! the store survives.

use crate::error::LicenseResult;
use crate::store::KeyValueStore;
use rand::RngCore;
use rand::rngs::OsRng;
use std::sync::Mutex;
use tracing::info;

/// Number of hex characters kept after the tag.
pub const DEVICE_ID_HEX_LEN: usize = 16;

/// Number of random 32-bit words drawn per id.
const RANDOM_WORDS: usize = 4;

/// Formats a device id from four random words.
///
/// Each word becomes eight zero-padded uppercase hex digits; the
/// concatenation is cut to [`DEVICE_ID_HEX_LEN`] characters.
#[must_use]
pub fn format_device_id(tag: &str, words: [u32; RANDOM_WORDS]) -> String {
    let hex: String = words.iter().map(|w| format!("{w:08X}")).collect();
    format!("{tag}-{}", &hex[..DEVICE_ID_HEX_LEN])
}

/// Generates a fresh device id from the OS random source.
#[must_use]
pub fn generate_device_id(tag: &str) -> String {
    let mut words = [0u32; RANDOM_WORDS];
    for word in &mut words {
        *word = OsRng.next_u32();
    }
    format_device_id(tag, words)
}

/// Loads or lazily creates the persisted device id.
///
/// The read-then-create sequence is serialized so two callers can never
/// both observe "missing" and write different ids.
#[derive(Debug)]
pub struct DeviceIdentity {
    tag: String,
    storage_key: String,
    create_lock: Mutex<()>,
}

impl DeviceIdentity {
    /// Creates an identity that stores its id under `storage_key`.
    #[must_use]
    pub fn new(tag: impl Into<String>, storage_key: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            storage_key: storage_key.into(),
            create_lock: Mutex::new(()),
        }
    }

    /// Returns the persisted id, generating and storing one if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn get_or_create(&self, store: &dyn KeyValueStore) -> LicenseResult<String> {
        // A poisoned lock only means another caller panicked mid-check;
        // the store itself is still the source of truth.
        let _guard = self
            .create_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // An empty stored value counts as missing.
        if let Some(id) = store.get(&self.storage_key)?.filter(|id| !id.is_empty()) {
            return Ok(id);
        }

        let id = generate_device_id(&self.tag);
        store.set(&self.storage_key, &id)?;
        info!(device_id = %id, "Generated new device id");
        Ok(id)
    }
}
