mod common;

use common::{make_key, now, test_gate, DAY_MS, NOW_MS};
use pdt_license::{
    FileStore, FixedClock, KeyValueStore, LicenseConfig, LicenseError, LicenseGate,
    LicenseStatus, MemoryStore,
};

fn file_gate(dir: &std::path::Path) -> LicenseGate<FileStore, FixedClock> {
    LicenseGate::with_clock(
        FileStore::in_dir(dir).unwrap(),
        FixedClock::from_millis(NOW_MS),
        LicenseConfig::default(),
    )
}

// ── Device id ────────────────────────────────────────────────────

#[test]
fn device_id_is_stable() {
    let gate = test_gate();
    let first = gate.device_id().unwrap();
    let second = gate.device_id().unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("CPU-"));
}

#[test]
fn device_id_uses_configured_names() {
    let config = LicenseConfig {
        device_tag: "PDT".into(),
        device_id_key: "hwid".into(),
        license_key_key: "key".into(),
    };
    let gate = LicenseGate::with_clock(MemoryStore::new(), FixedClock::from_millis(NOW_MS), config);
    let id = gate.device_id().unwrap();
    assert!(id.starts_with("PDT-"));
    assert_eq!(gate.store().get("hwid").unwrap(), Some(id));
}

#[test]
fn device_id_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let first = file_gate(dir.path()).device_id().unwrap();
    let second = file_gate(dir.path()).device_id().unwrap();
    assert_eq!(first, second);
}

#[test]
fn activation_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let gate = file_gate(dir.path());
        let key = make_key(&gate.device_id().unwrap(), NOW_MS + DAY_MS);
        gate.activate(&key).unwrap();
    }
    let status = file_gate(dir.path()).status().unwrap();
    assert!(status.is_active());
}

#[test]
fn gate_reports_its_clock() {
    assert_eq!(test_gate().now(), now());
}

// ── validate_key ─────────────────────────────────────────────────

#[test]
fn validate_empty_key() {
    let gate = test_gate();
    assert!(matches!(gate.validate_key(""), Err(LicenseError::EmptyKey)));
}

#[test]
fn validate_malformed_key() {
    let gate = test_gate();
    assert!(matches!(
        gate.validate_key("not-base64!!"),
        Err(LicenseError::MalformedKey(_))
    ));
}

#[test]
fn validate_other_device() {
    let gate = test_gate();
    let device = gate.device_id().unwrap();
    let other = if device == "CPU-0000000000000000" {
        "CPU-0000000000000001"
    } else {
        "CPU-0000000000000000"
    };
    let key = make_key(other, NOW_MS + DAY_MS);
    assert!(matches!(gate.validate_key(&key), Err(LicenseError::DeviceMismatch)));
}

#[test]
fn validate_expired() {
    let gate = test_gate();
    let key = make_key(&gate.device_id().unwrap(), NOW_MS - DAY_MS);
    assert!(matches!(gate.validate_key(&key), Err(LicenseError::Expired(_))));
}

#[test]
fn validate_current_device_future_expiry() {
    let gate = test_gate();
    let expiry = NOW_MS + 30 * DAY_MS;
    let key = make_key(&gate.device_id().unwrap(), expiry);
    let license = gate.validate_key(&key).unwrap();
    assert_eq!(license.expires_at().timestamp_millis(), expiry);
}

#[test]
fn validate_does_not_persist() {
    let gate = test_gate();
    let key = make_key(&gate.device_id().unwrap(), NOW_MS + DAY_MS);
    gate.validate_key(&key).unwrap();
    assert_eq!(gate.load_saved_key().unwrap(), None);
}

#[test]
fn validate_empty_key_does_not_create_device_id() {
    let gate = test_gate();
    let _ = gate.validate_key("  ");
    assert_eq!(gate.store().get("pdt_hwid").unwrap(), None);
}

// ── save / load ──────────────────────────────────────────────────

#[test]
fn load_without_save_is_none() {
    assert_eq!(test_gate().load_saved_key().unwrap(), None);
}

#[test]
fn save_overwrites() {
    let gate = test_gate();
    gate.save_key("first").unwrap();
    gate.save_key("second").unwrap();
    assert_eq!(gate.load_saved_key().unwrap().as_deref(), Some("second"));
}

#[test]
fn saved_key_is_stored_verbatim() {
    let gate = test_gate();
    let key = format!(" {} ", make_key(&gate.device_id().unwrap(), NOW_MS + DAY_MS));
    gate.save_key(&key).unwrap();
    assert_eq!(gate.store().get("pdt_license_key").unwrap(), Some(key));
}

// ── activate / status ────────────────────────────────────────────

#[test]
fn activate_saves_valid_key() {
    let gate = test_gate();
    let key = make_key(&gate.device_id().unwrap(), NOW_MS + DAY_MS);
    gate.activate(&key).unwrap();
    assert_eq!(gate.load_saved_key().unwrap(), Some(key));
}

#[test]
fn activate_rejected_key_keeps_previous() {
    let gate = test_gate();
    let good = make_key(&gate.device_id().unwrap(), NOW_MS + DAY_MS);
    gate.activate(&good).unwrap();

    assert!(gate.activate("garbage").is_err());
    assert_eq!(gate.load_saved_key().unwrap(), Some(good));
}

#[test]
fn status_not_activated() {
    assert!(matches!(test_gate().status().unwrap(), LicenseStatus::NotActivated));
}

#[test]
fn status_active_after_activation() {
    let gate = test_gate();
    let key = make_key(&gate.device_id().unwrap(), NOW_MS + DAY_MS);
    gate.activate(&key).unwrap();
    let status = gate.status().unwrap();
    assert!(status.is_active());
}

#[test]
fn status_rejected_once_expired() {
    let store = MemoryStore::new();
    let gate = LicenseGate::with_clock(&store, FixedClock::from_millis(NOW_MS), LicenseConfig::default());
    let key = make_key(&gate.device_id().unwrap(), NOW_MS + DAY_MS);
    gate.activate(&key).unwrap();

    let later = LicenseGate::with_clock(
        &store,
        FixedClock::from_millis(NOW_MS + 2 * DAY_MS),
        LicenseConfig::default(),
    );
    match later.status().unwrap() {
        LicenseStatus::Rejected(LicenseError::Expired(_)) => {}
        other => panic!("expected expired rejection, got {other:?}"),
    }
    assert!(!later.status().unwrap().is_active());
}
