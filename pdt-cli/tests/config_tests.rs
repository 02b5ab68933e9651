use pdt_cli::StudioConfig;
use pdt_license::{LicenseConfig, Locale};
use std::path::{Path, PathBuf};

#[test]
fn no_path_gives_defaults() {
    let config = StudioConfig::load(None).unwrap();
    assert_eq!(config, StudioConfig::default());
    assert_eq!(config.license, LicenseConfig::default());
    assert_eq!(config.locale, Locale::Vi);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale":"en","license":{"device_tag":"PDT"}}"#).unwrap();

    let config = StudioConfig::load(Some(&path)).unwrap();
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.license.device_tag, "PDT");
    assert_eq!(config.license.device_id_key, "pdt_hwid");
    assert!(config.data_dir.is_none());
}

#[test]
fn missing_file_is_error() {
    assert!(StudioConfig::load(Some(Path::new("/nonexistent/pdt/config.json"))).is_err());
}

#[test]
fn invalid_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{").unwrap();
    assert!(StudioConfig::load(Some(&path)).is_err());
}

#[test]
fn data_dir_precedence() {
    let config = StudioConfig {
        data_dir: Some(PathBuf::from("/from/config")),
        ..StudioConfig::default()
    };
    assert_eq!(
        config.resolve_data_dir(Some(Path::new("/from/flag"))).unwrap(),
        PathBuf::from("/from/flag")
    );
    assert_eq!(config.resolve_data_dir(None).unwrap(), PathBuf::from("/from/config"));
}
