// Unit tests for config module

use super::*;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_dir(temp_dir.path().join("nested"));

    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.quote_policy, QuotePolicy::Escape);
    assert_eq!(config.format, OutputFormat::Json);
    assert!(!config.strict);
}

#[test]
fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_dir(temp_dir.path().join("nested"));

    let config = Config {
        quote_policy: QuotePolicy::Verbatim,
        format: OutputFormat::Simple,
        strict: true,
    };
    manager.save(&config).unwrap();

    assert!(manager.path().exists());
    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn test_partial_file_uses_defaults_for_missing_keys() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_dir(temp_dir.path());
    fs::write(manager.path(), r#"{"strict": true}"#).unwrap();

    let config = manager.load().unwrap();
    assert!(config.strict);
    assert_eq!(config.quote_policy, QuotePolicy::Escape);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_invalid_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_dir(temp_dir.path());
    fs::write(manager.path(), "not json").unwrap();

    let err = manager.load().unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
}

#[test]
fn test_reset_removes_file() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_dir(temp_dir.path());
    manager
        .save(&Config {
            strict: true,
            ..Default::default()
        })
        .unwrap();

    let config = manager.reset().unwrap();
    assert_eq!(config, Config::default());
    assert!(!manager.path().exists());

    // Resetting twice is fine
    assert!(manager.reset().is_ok());
}

#[test]
fn test_set_values() {
    let mut config = Config::default();

    config.set("quote_policy", "verbatim").unwrap();
    config.set("format", "SIMPLE").unwrap();
    config.set("strict", "true").unwrap();

    assert_eq!(config.quote_policy, QuotePolicy::Verbatim);
    assert_eq!(config.format, OutputFormat::Simple);
    assert!(config.strict);
    assert_eq!(config.transform_options().quote_policy, QuotePolicy::Verbatim);
}

#[test]
fn test_set_rejects_bad_input() {
    let mut config = Config::default();

    assert!(config.set("quote_policy", "double").is_err());
    assert!(config.set("format", "xml").is_err());
    assert!(config.set("strict", "yes").is_err());
    assert!(config.set("colour", "red").is_err());
    assert_eq!(config, Config::default());
}
