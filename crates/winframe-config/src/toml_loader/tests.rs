//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::WinframeConfig;
use std::path::Path;
use winframe_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_winframe_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
title = "Help Viewer"
width = 1024
max_width = 2048
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Help Viewer");
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.window.max_width, Some(2048));
    // Defaults preserved
    assert_eq!(config.window.height, 600);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window]\nwidth = \"wide\"\n").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
title = "Custom"
min_width = 900
max_width = 600
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, WinframeConfig::default());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("winframe").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, WinframeConfig::default());
}

#[test]
fn default_config_toml_matches_defaults() {
    let config: WinframeConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config, WinframeConfig::default());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("winframe"));
        assert!(path_str.ends_with("config.toml"));
    }
}
