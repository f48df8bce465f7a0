//! Configuration for the calorie tracker
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/calorie-tracker/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::coordinator::DEFAULT_DATE_FORMAT;

mod observability;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// strftime pattern for history day labels
    pub date_format: String,

    /// Show the System Logs panel in the terminal UI
    pub show_logs: bool,

    /// Line-oriented stdin/stdout host instead of the terminal UI
    pub headless: bool,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_logs: true,
            headless: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub date_format: Option<String>,
    pub show_logs: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// True when chrono can render a calendar day with `pattern`.
///
/// Time and offset directives (`%H`, `%p`, `%z`) parse fine but fail on a
/// bare date, so the check renders a real day instead of only parsing.
pub fn is_valid_date_format(pattern: &str) -> bool {
    let mut rendered = String::new();
    !pattern.is_empty() && write!(rendered, "{}", NaiveDate::MIN.format(pattern)).is_ok()
}

fn env_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/calorie-tracker/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| {
            p.join(".config")
                .join("calorie-tracker")
                .join("config.toml")
        })
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        if let Some(path) = Self::config_path() {
            Self::ensure_config_at(&path);
        }
    }

    /// Write the default template at `path` unless something is already there
    pub(crate) fn ensure_config_at(path: &Path) {
        if path.exists() {
            return;
        }

        // Config is optional; a failed write just means defaults next time
        match Self::default().save_to(path) {
            Ok(()) => tracing::info!("Wrote config template to {}", path.display()),
            Err(e) => tracing::debug!("Could not write config template: {:#}", e),
        }
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but fails to parse is an error: a broken
    /// config should stop startup, not silently fall back to defaults.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents).with_context(|| {
                format!(
                    "Failed to parse configuration file {}\n\n  \
                     Check for missing quotes around strings or invalid booleans (use true/false).\n  \
                     To reset, run `calorie-tracker config --reset`.",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read configuration file {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Layer environment lookups over a parsed file config
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let theme = env("CALORIE_TRACKER_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let date_format = env("CALORIE_TRACKER_DATE_FORMAT")
            .or(file.date_format)
            .unwrap_or(defaults.date_format);

        let show_logs = file.show_logs.unwrap_or(defaults.show_logs);

        // Headless: env only (runtime flag, also set by --headless)
        let headless = env("CALORIE_TRACKER_HEADLESS")
            .map(|v| env_flag(&v))
            .unwrap_or(defaults.headless);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            date_format,
            show_logs,
            headless,
            logging,
        }
    }

    /// The configured date format, or the default when chrono cannot render it
    ///
    /// Called once logging is up so the fallback is visible.
    pub fn checked_date_format(&self) -> &str {
        if is_valid_date_format(&self.date_format) {
            &self.date_format
        } else {
            tracing::warn!(
                "Invalid date_format {:?}, using {:?}",
                self.date_format,
                DEFAULT_DATE_FORMAT
            );
            DEFAULT_DATE_FORMAT
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# calorie-tracker configuration

# Theme: auto, dracula, nord, gruvbox
theme = "{theme}"

# History day label, chrono strftime syntax
date_format = "{date_format}"

# Show the System Logs panel in the terminal UI
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the logs panel or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            date_format = self.date_format,
            show_logs = self.show_logs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to the default config path
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().context("Could not determine config path")?;
        self.save_to(&path)?;
        Ok(path)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
