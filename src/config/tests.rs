//! Configuration tests
//!
//! The round-trip tests guard `to_toml`: when a field is added to `Config`
//! without being serialized, or serialized with broken TOML, they fail.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn resolve_str(toml_str: &str) -> Config {
    let file = Config::parse_file_config(toml_str).unwrap();
    Config::resolve(file, no_env)
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();
    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.date_format = "%Y-%m-%d".to_string();
    config.show_logs = false;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "tracker".to_string();

    let reloaded = resolve_str(&config.to_toml());
    assert_eq!(reloaded.theme, "nord");
    assert_eq!(reloaded.date_format, "%Y-%m-%d");
    assert!(!reloaded.show_logs);
    assert_eq!(reloaded.logging.level, "debug");
    assert!(reloaded.logging.file_enabled);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(reloaded.logging.file_prefix, "tracker");
}

// ─────────────────────────────────────────────────────────────────────────────
// Layering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = resolve_str("");
    assert_eq!(config.theme, "auto");
    assert_eq!(config.date_format, "%-m/%-d/%Y");
    assert!(config.show_logs);
    assert!(!config.headless);
    assert_eq!(config.logging.file_prefix, "calorie-tracker");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config("theme = \"nord\"\ndate_format = \"%d.%m.%Y\"").unwrap();
    let env: HashMap<&str, &str> = [
        ("CALORIE_TRACKER_THEME", "gruvbox"),
        ("CALORIE_TRACKER_HEADLESS", "true"),
    ]
    .into_iter()
    .collect();

    let config = Config::resolve(file, |k| env.get(k).map(|v| v.to_string()));
    assert_eq!(config.theme, "gruvbox");
    assert_eq!(config.date_format, "%d.%m.%Y");
    assert!(config.headless);
}

#[test]
fn test_headless_flag_values() {
    for (value, expected) in [("1", true), ("TRUE", true), ("0", false), ("no", false)] {
        let config = Config::resolve(FileConfig::default(), |k| {
            (k == "CALORIE_TRACKER_HEADLESS").then(|| value.to_string())
        });
        assert_eq!(config.headless, expected, "value {:?}", value);
    }
}

#[test]
fn test_invalid_date_format_falls_back() {
    let config = resolve_str("date_format = \"%Q bad\"");
    assert_eq!(config.date_format, "%Q bad");
    assert_eq!(config.checked_date_format(), DEFAULT_DATE_FORMAT);

    let config = resolve_str("date_format = \"%Y-%m-%d\"");
    assert_eq!(config.checked_date_format(), "%Y-%m-%d");
}

#[test]
fn test_time_directive_date_format_falls_back() {
    for pattern in ["%H:%M", "%-m/%-d %p", "%Y-%m-%d %z", "%S"] {
        assert!(!is_valid_date_format(pattern), "pattern {:?}", pattern);
        let mut config = Config::default();
        config.date_format = pattern.to_string();
        assert_eq!(config.checked_date_format(), DEFAULT_DATE_FORMAT);
    }
}

#[test]
fn test_unknown_rotation_is_daily() {
    let config = resolve_str("[logging]\nfile_rotation = \"weekly\"");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(Config::parse_file_config("show_logs = maybe").is_err());
    assert!(Config::parse_file_config("theme = 3").is_err());
}

#[test]
fn test_date_format_validation() {
    assert!(is_valid_date_format("%-m/%-d/%Y"));
    assert!(is_valid_date_format("%Y-%m-%d"));
    assert!(!is_valid_date_format(""));
    assert!(!is_valid_date_format("%Q"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Template
// ─────────────────────────────────────────────────────────────────────────────

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "calorie-tracker-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_template_written_once() {
    let dir = scratch_dir("template");
    let path = dir.join("nested").join("config.toml");

    Config::ensure_config_at(&path);
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, Config::default().to_toml());

    std::fs::write(&path, "theme = \"nord\"\n").unwrap();
    Config::ensure_config_at(&path);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "theme = \"nord\"\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_template_write_failure_is_logged() {
    use crate::logging::{LogBuffer, TuiLogLayer};
    use tracing_subscriber::layer::SubscriberExt;

    let dir = scratch_dir("blocked");
    // A regular file where the parent directory should be
    let blocker = dir.join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("config.toml");

    let buffer = LogBuffer::new();
    let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));
    tracing::subscriber::with_default(subscriber, || Config::ensure_config_at(&path));

    assert!(!path.exists());
    assert!(buffer
        .get_all()
        .iter()
        .any(|e| e.message.starts_with("Could not write config template")));

    let _ = std::fs::remove_dir_all(&dir);
}
