use counter_app::config::{Config, ConfigError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.counter.start, 0);
    assert_eq!(config.counter.min, 0);
    assert_eq!(config.counter.max, 22);
    assert_eq!(config.counter.jackpot, 21);
    assert_eq!(config.counter.milestone, 18);

    assert_eq!(config.ui.locale, "en");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(config.ui.title.is_empty());

    assert!(config.celebration.enabled);
    assert_eq!(config.celebration.particles, 48);
    assert_eq!(config.celebration.duration_ticks, 30);

    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = write_config(
        r#"
[counter]
start = 5
min = -10
max = 10
jackpot = 7
milestone = 3

[ui]
locale = "zh"
tick_rate_ms = 50
title = "Clicks"

[celebration]
enabled = false
particles = 10
duration_ticks = 5

[logging]
level = "debug"
file = "/tmp/counter.log"
"#,
    );

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.counter.start, 5);
    assert_eq!(config.counter.min, -10);
    assert_eq!(config.counter.jackpot, 7);
    assert_eq!(config.ui.locale, "zh");
    assert_eq!(config.ui.title, "Clicks");
    assert!(!config.celebration.enabled);
    assert_eq!(config.celebration.particles, 10);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.log_path(), PathBuf::from("/tmp/counter.log"));
}

#[test]
fn test_partial_file_uses_defaults() {
    let (_dir, path) = write_config("[counter]\nmax = 30\n");
    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.counter.max, 30);
    assert_eq!(config.counter.jackpot, 21);
    assert_eq!(config.ui, Config::default().ui);
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_inverted_bounds_fail_validation() {
    let (_dir, path) = write_config("[counter]\nmin = 10\nmax = 5\nstart = 5\njackpot = 5\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("must not exceed"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_start_outside_bounds_fails_validation() {
    let mut config = Config::default();
    config.counter.start = 40;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("start value 40"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_unreachable_jackpot_fails_validation() {
    let mut config = Config::default();
    config.counter.jackpot = 99;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_particles_fail_validation() {
    let mut config = Config::default();
    config.celebration.particles = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[counter\nmax = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[counter]\nmax = \"lots\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    match Config::load_from(&path) {
        Err(ConfigError::ReadError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

#[test]
fn test_roundtrip_through_toml() {
    let mut config = Config::default();
    config.counter.max = 40;
    config.ui.locale = "ar".to_string();
    let serialized = toml::to_string(&config).expect("serialize");
    let (_dir, path) = write_config(&serialized);
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
