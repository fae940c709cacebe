//! Tests for configuration loading

use cardvalid::batch::BatchOptions;
use cardvalid::config::Config;
use cardvalid::error::Error;
use cardvalid::output::OutputMode;

use crate::common::Workspace;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.json);
    assert!(!config.skip_blank_lines);
    assert_eq!(config.output_mode(), OutputMode::Human);
    assert_eq!(config.batch_options(), BatchOptions::default());
}

#[test]
fn test_config_from_file() {
    let ws = Workspace::new();
    let path = ws.write("config.toml", "json = true\nskip_blank_lines = true\n");

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.output_mode(), OutputMode::Json);
    assert!(config.batch_options().skip_blank_lines);
}

#[test]
fn test_empty_config_file_is_default() {
    let ws = Workspace::new();
    let path = ws.write("config.toml", "");
    assert_eq!(Config::from_file(&path).unwrap(), Config::default());
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let ws = Workspace::new();
    let err = Config::load(Some(&ws.path().join("missing.toml"))).unwrap_err();
    assert!(matches!(err, Error::ConfigUnreadable { .. }));
}

#[test]
fn test_malformed_config_is_an_error() {
    let ws = Workspace::new();
    let path = ws.write("config.toml", "json = [\n");
    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_config_round_trip() {
    let config = Config {
        json: true,
        skip_blank_lines: false,
    };
    let content = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&content).unwrap();
    assert_eq!(parsed, config);
}
