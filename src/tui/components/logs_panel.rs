//! Logs panel component
//!
//! Displays the most recent system log entries captured by the TUI log layer,
//! color-coded by severity. Always follows the newest entry.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Format a log entry as a single display line
pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.alert),
        LogLevel::Warn => Style::default().fg(theme.highlight),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let viewport = area.height.saturating_sub(2) as usize;
    let start = entries.len().saturating_sub(viewport);

    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.muted))
            .title(" System Logs "),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_log_entry() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 5).unwrap(),
            level: LogLevel::Warn,
            message: "Add food rejected".to_string(),
        };
        assert_eq!(format_log_entry(&entry), "08:30:05 WARN  Add food rejected");
    }
}
