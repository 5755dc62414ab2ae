use super::ShellConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_custom_config_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, "name = \"ops\"\ndefault_commands = false\n").unwrap();

    let config = ShellConfig::load_with_custom_config(Some(path.to_str().unwrap()))
        .expect("Should load custom config");
    assert_eq!(config.name, "ops");
    assert!(!config.default_commands);
}

#[test]
fn test_partial_custom_config_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("partial.toml");
    fs::write(&path, "name = \"ops\"\n").unwrap();

    let config = ShellConfig::load_with_custom_config(Some(path.to_str().unwrap())).unwrap();
    assert_eq!(config.name, "ops");
    assert!(config.default_commands);
}

#[test]
fn test_missing_custom_config_falls_back() {
    let config = ShellConfig::load_with_custom_config(Some("non_existent.toml"));
    assert!(config.is_ok(), "Should handle missing custom config gracefully");
}

#[test]
fn test_invalid_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "name = \"my shell\"\n").unwrap();

    let err = ShellConfig::load_with_custom_config(Some(path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("whitespace"));
}

#[test]
fn test_validate() {
    assert!(ShellConfig::default().validate().is_ok());

    let empty = ShellConfig {
        name: String::new(),
        ..ShellConfig::default()
    };
    assert!(empty.validate().is_err());
}
