//! Harness configuration loading and defaults.

use std::time::Duration;

use stylecheck_core::config::harness_config::{DEFAULT_SAMPLE_EXTENSION, DEFAULT_TIMEOUT_MS};
use stylecheck_core::{HarnessConfig, HarnessError, StylecheckErrorCode};

#[test]
fn test_defaults_apply_to_empty_config() {
    let config = HarnessConfig::from_toml_str("").expect("empty TOML is valid");
    assert!(config.fixtures_root.is_none());
    assert!(config.rules.is_empty());
    assert_eq!(config.effective_sample_extension(), DEFAULT_SAMPLE_EXTENSION);
    assert_eq!(
        config.effective_timeout(),
        Some(Duration::from_millis(DEFAULT_TIMEOUT_MS))
    );
    assert_eq!(config.effective_threads(), 0);
}

#[test]
fn test_full_config_parses() {
    let toml = r#"
fixtures_root = "fixtures/checks"
rules = ["LineLengthCheck", "EmptyLinesCheck"]
sample_extension = "kt"
timeout_ms = 500
threads = 4

[properties]
"line.max" = "100"
"#;
    let config = HarnessConfig::from_toml_str(toml).expect("should parse");
    assert_eq!(config.rules, vec!["LineLengthCheck", "EmptyLinesCheck"]);
    assert_eq!(config.effective_sample_extension(), "kt");
    assert_eq!(config.effective_timeout(), Some(Duration::from_millis(500)));
    assert_eq!(config.effective_threads(), 4);
    assert_eq!(config.properties.get("line.max").map(String::as_str), Some("100"));
}

#[test]
fn test_zero_timeout_disables_it() {
    let config = HarnessConfig::from_toml_str("timeout_ms = 0").expect("should parse");
    assert_eq!(config.effective_timeout(), None);
}

#[test]
fn test_relative_fixtures_root_resolves_against_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stylecheck.toml");
    std::fs::write(&path, "fixtures_root = \"fx\"\n").unwrap();

    let config = HarnessConfig::from_file(&path).expect("should load");
    assert_eq!(config.fixtures_root, Some(dir.path().join("fx")));
}

#[test]
fn test_unreadable_file_is_settings_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HarnessConfig::from_file(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, HarnessError::Settings { .. }));
    assert_eq!(err.error_code(), "SETTINGS");
}

#[test]
fn test_wrong_type_is_settings_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "timeout_ms = \"soon\"\n").unwrap();
    let err = HarnessConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, HarnessError::Settings { .. }), "got {err:?}");
}
