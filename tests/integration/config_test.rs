use std::path::PathBuf;

use sysdeck::core::config::Config;
use tempfile::TempDir;

#[test]
fn test_config_default_is_empty() {
    let config = Config::default();
    assert!(config.assets_dir.is_none());
    assert!(config.terminal.is_none());
}

#[test]
fn test_missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.json")).unwrap();
    assert!(config.terminal().is_none());
}

#[test]
fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sysdeck").join("config.json");

    let mut config = Config::default();
    config.set_assets_dir("/opt/sysdeck/assets".to_string());
    config.set_terminal("foot".to_string());
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.assets_dir.as_deref(), Some("/opt/sysdeck/assets"));
    assert_eq!(loaded.terminal(), Some("foot"));
}

#[test]
fn test_corrupted_file_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    std::fs::write(&path, "]{ definitely not json").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.assets_dir.is_none());
    assert!(config.terminal.is_none());
}

#[test]
fn test_assets_dir_override_is_used_verbatim() {
    let mut config = Config::default();
    config.set_assets_dir("/srv/deck/assets".to_string());
    assert_eq!(
        config.assets_dir().unwrap(),
        PathBuf::from("/srv/deck/assets")
    );
}

#[test]
fn test_assets_dir_default_ends_with_assets() {
    let config = Config::default();
    let dir = config.assets_dir().unwrap();
    assert!(dir.ends_with("sysdeck/assets"), "got {:?}", dir);
}
