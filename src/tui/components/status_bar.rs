// Status bar component
//
// Renders session info at the bottom: uptime, entry count, remaining calories
// and key hints.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Calories with thousands separators
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Remaining-calories summary, e.g. "1,785 left" or "115 over"
pub fn remaining_text(remaining: Option<i64>) -> String {
    match remaining {
        None => "no goal".to_string(),
        Some(r) if r >= 0 => format!("{} left", group_digits(r.unsigned_abs())),
        Some(r) => format!("{} over", group_digits(r.unsigned_abs())),
    }
}

/// Render the status bar with session statistics
///
/// Adapts to terminal width:
/// - Wide: key hints included
/// - Narrow: stats only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let state = app.tracker.state();
    let bp = Breakpoint::from_width(area.width);

    let stats = format!(
        " {} │ 🍽 {} │ 🎯 {}",
        app.uptime(),
        state.food_entries().len(),
        remaining_text(state.remaining()),
    );

    let status_text = if bp.fits_key_hints() {
        format!("{} │ Tab: next field │ Enter: submit │ Esc: quit", stats)
    } else {
        stats
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
