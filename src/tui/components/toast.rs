//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a short duration.
//! Renders in the bottom-right corner on top of all other content.
//! Confirms successful actions; rejections use the blocking alert instead.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    /// Message to display
    pub message: String,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    /// Create a new toast with default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Bottom-right placement, clamped inside `area`.
    ///
    /// 1 line of text + borders, 2 cells of padding each side. On tiny
    /// terminals the margins go first, then the box shrinks.
    fn area(&self, area: Rect) -> Rect {
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3.min(area.height);
        let x = area.right().saturating_sub(width + 2).max(area.x);
        let y = area.bottom().saturating_sub(height + 2).max(area.y);
        Rect::new(x, y, width, height)
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let toast_area = self.area(area);
        if toast_area.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_not_expired() {
        assert!(!Toast::new("Goal set to 2000").is_expired());
    }

    #[test]
    fn test_area_stays_inside_short_terminal() {
        let toast = Toast::new("Goal set to 2000");
        for outer in [
            Rect::new(0, 0, 80, 24),
            Rect::new(0, 0, 80, 2),
            Rect::new(0, 0, 80, 1),
            Rect::new(0, 0, 3, 10),
            Rect::new(5, 5, 20, 4),
        ] {
            let inner = toast.area(outer);
            assert!(
                inner.is_empty() || outer.intersection(inner) == inner,
                "{:?} escapes {:?}",
                inner,
                outer
            );
        }
    }

    #[test]
    fn test_zero_duration_expires() {
        let mut toast = Toast::new("gone");
        toast.duration = Duration::ZERO;
        assert!(toast.is_expired());
    }
}
