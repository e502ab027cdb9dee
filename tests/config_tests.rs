mod common;

use std::path::PathBuf;

use hemolink::config::{Config, ConfigError, ConfigManager};

#[test]
fn missing_file_loads_defaults() {
    let manager = common::config_manager();
    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn saved_config_round_trips_through_disk() {
    let manager = common::config_manager();
    let mut config = Config::default();
    config.set("donor_name", "Sam Lee").unwrap();
    config.set("directory_path", "/srv/hemolink/centers.json").unwrap();
    config.set("low_stock_threshold", "25").unwrap();
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.donor_name.as_deref(), Some("Sam Lee"));
    assert_eq!(
        loaded.directory_path,
        Some(PathBuf::from("/srv/hemolink/centers.json"))
    );
    assert_eq!(loaded.low_stock_threshold, 25);

    let leftovers: Vec<_> = std::fs::read_dir(manager.config_path().parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn blank_value_unsets_optional_setting() {
    let mut config = Config::default();
    config.set("assistant_command", "llm chat").unwrap();
    config.set("assistant_command", "  ").unwrap();
    assert_eq!(config.assistant_command, None);
}

#[test]
fn unknown_key_is_rejected() {
    let mut config = Config::default();
    let err = config.set("theme", "dark").unwrap_err();
    assert!(err.contains("theme"));
}

#[test]
fn corrupt_file_reports_serde_error() {
    let base = common::temp_base();
    std::fs::write(base.join("config.json"), "{ not json").unwrap();
    let manager = ConfigManager::with_base_dir(base).unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn entries_list_every_setting() {
    let keys: Vec<_> = Config::default()
        .entries()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(
        keys,
        vec![
            "donor_name",
            "directory_path",
            "assistant_command",
            "low_stock_threshold",
            "ui_color_enabled"
        ]
    );
}
