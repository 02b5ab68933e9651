//! The license gate: device id, key validation, and the saved key.

use crate::clock::{Clock, SystemClock};
use crate::config::LicenseConfig;
use crate::device::DeviceIdentity;
use crate::error::{LicenseError, LicenseResult};
use crate::key::ValidLicense;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Outcome of re-checking the saved key, e.g. at app start.
#[derive(Debug)]
pub enum LicenseStatus {
    /// No key has been saved yet.
    NotActivated,
    /// The saved key is valid.
    Active(ValidLicense),
    /// A key is saved but no longer passes validation.
    Rejected(LicenseError),
}

impl LicenseStatus {
    /// Returns true if premium features should be unlocked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Gates premium features behind a device-bound, time-limited key.
#[derive(Debug)]
pub struct LicenseGate<S, C = SystemClock> {
    store: S,
    clock: C,
    config: LicenseConfig,
    identity: DeviceIdentity,
}

impl<S: KeyValueStore> LicenseGate<S, SystemClock> {
    /// Creates a gate over `store` using wall-clock time.
    #[must_use]
    pub fn new(store: S, config: LicenseConfig) -> Self {
        Self::with_clock(store, SystemClock, config)
    }
}

impl<S: KeyValueStore, C: Clock> LicenseGate<S, C> {
    /// Creates a gate with an explicit time source.
    #[must_use]
    pub fn with_clock(store: S, clock: C, config: LicenseConfig) -> Self {
        let identity = DeviceIdentity::new(&config.device_tag, &config.device_id_key);
        Self {
            store,
            clock,
            config,
            identity,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &LicenseConfig {
        &self.config
    }

    /// Returns the current time as seen by this gate.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns this device's id, creating and persisting it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn device_id(&self) -> LicenseResult<String> {
        self.identity.get_or_create(&self.store)
    }

    /// Validates `key` against this device and the current time.
    ///
    /// Nothing is persisted, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns `EmptyKey`, `MalformedKey`, `DeviceMismatch` or `Expired` for
    /// a rejected key, or `Storage` if the device id cannot be loaded.
    pub fn validate_key(&self, key: &str) -> LicenseResult<ValidLicense> {
        if key.trim().is_empty() {
            return Err(LicenseError::EmptyKey);
        }
        let device_id = self.device_id()?;
        ValidLicense::validate(key, &device_id, self.now())
    }

    /// Persists the raw key, replacing any previously saved key.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn save_key(&self, key: &str) -> LicenseResult<()> {
        self.store.set(&self.config.license_key_key, key)
    }

    /// Returns the previously saved raw key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn load_saved_key(&self) -> LicenseResult<Option<String>> {
        self.store.get(&self.config.license_key_key)
    }

    /// Validates `key` and saves it only if it is valid.
    ///
    /// # Errors
    ///
    /// Same as [`LicenseGate::validate_key`], plus store failures on save.
    pub fn activate(&self, key: &str) -> LicenseResult<ValidLicense> {
        match self.validate_key(key) {
            Ok(license) => {
                self.save_key(license.raw())?;
                info!(expires_at = %license.expires_at(), "License activated");
                Ok(license)
            }
            Err(e) => {
                debug!(error = %e, "Activation rejected");
                Err(e)
            }
        }
    }

    /// Re-validates the saved key.
    ///
    /// # Errors
    ///
    /// Only infrastructure faults are errors; a rejected saved key is
    /// reported as [`LicenseStatus::Rejected`].
    pub fn status(&self) -> LicenseResult<LicenseStatus> {
        let Some(saved) = self.load_saved_key()? else {
            return Ok(LicenseStatus::NotActivated);
        };

        match self.validate_key(&saved) {
            Ok(license) => Ok(LicenseStatus::Active(license)),
            Err(e) if e.is_rejection() => {
                warn!(error = %e, "Saved license key no longer valid");
                Ok(LicenseStatus::Rejected(e))
            }
            Err(e) => Err(e),
        }
    }
}
