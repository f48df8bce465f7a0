// Startup module - displays banner and configuration summary
//
// Headless mode prints the banner to stderr before reading commands, so stdout
// carries only region output. Terminal mode sends the same summary to the
// System Logs panel instead.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// A labelled line of the settings summary
struct Setting {
    name: &'static str,
    value: String,
}

fn settings(config: &Config) -> Vec<Setting> {
    let mut settings = vec![
        Setting {
            name: "theme",
            value: config.theme.clone(),
        },
        Setting {
            name: "date format",
            value: config.date_format.clone(),
        },
        Setting {
            name: "log level",
            value: config.logging.level.clone(),
        },
    ];

    if config.logging.file_enabled {
        settings.push(Setting {
            name: "log files",
            value: format!(
                "{} ({})",
                config.logging.file_dir.display(),
                config.logging.file_rotation.as_str()
            ),
        });
    }

    settings
}

/// Print the startup banner to stderr (headless mode)
pub fn print_startup(config: &Config) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{GREEN}Calorie Tracker{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            eprintln!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            eprintln!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }

    for setting in settings(config) {
        eprintln!("    {DIM}{:<12}{RESET} {}", setting.name, setting.value);
    }

    eprintln!();
    eprintln!("  {MAGENTA}▸{RESET} Reading commands from stdin {DIM}(type `help`){RESET}");
    eprintln!();
}

/// Print startup messages to the TUI log panel
pub fn log_startup(config: &Config) {
    tracing::info!("Calorie Tracker v{}", VERSION);
    for setting in settings(config) {
        tracing::info!("  {}: {}", setting.name, setting.value);
    }
    tracing::info!("Ready. Set a calorie goal to start adding food.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logging_listed_only_when_enabled() {
        let mut config = Config::default();
        assert!(!settings(&config).iter().any(|s| s.name == "log files"));

        config.logging.file_enabled = true;
        let listed = settings(&config);
        let files = listed.iter().find(|s| s.name == "log files").unwrap();
        assert_eq!(files.value, "./logs (daily)");
    }
}
