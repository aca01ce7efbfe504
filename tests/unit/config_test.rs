//! Unit tests for config module

use disco::{ColorScheme, Config};
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.display.color_scheme, ColorScheme::Dark);
    assert!(config.output.fence);
    assert!(!config.output.copy);
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.display.color_scheme = ColorScheme::Light;
    config.output.copy = true;
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn color_scheme_serializes_lowercase() {
    let toml_str = toml::to_string(&Config::default()).unwrap();
    assert!(toml_str.contains("color_scheme = \"dark\""), "{}", toml_str);
}

#[test]
fn partial_file_uses_defaults() {
    let config: Config = toml::from_str("[output]\ncopy = true\n").unwrap();
    assert!(config.output.copy);
    assert!(config.output.fence);
    assert_eq!(config.display.color_scheme, ColorScheme::Dark);
}

#[test]
fn empty_file_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn unknown_scheme_is_rejected() {
    assert!(toml::from_str::<Config>("[display]\ncolor_scheme = \"sepia\"\n").is_err());
}

#[test]
fn load_from_missing_file_returns_default() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_to_creates_directories_and_load_from_reads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("disco").join("config.toml");

    let mut config = Config::default();
    config.toggle_color_scheme();
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn load_from_invalid_toml_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[display\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn toggle_color_scheme_flips_and_returns_new_value() {
    let mut config = Config::default();
    assert_eq!(config.toggle_color_scheme(), ColorScheme::Light);
    assert_eq!(config.display.color_scheme, ColorScheme::Light);
    assert_eq!(config.toggle_color_scheme(), ColorScheme::Dark);
}
