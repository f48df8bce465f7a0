// Title bar component
//
// Renders the app title with the current goal phase.

use crate::coordinator::Phase;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let phase = match app.phase() {
        Phase::GoalUnset => "○ set a goal to start",
        Phase::GoalSet => "● tracking",
    };

    let title = Paragraph::new(format!(" 🍎 Calorie Tracker ──── {}", phase))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" Esc quits ").right_aligned()),
        );

    f.render_widget(title, area);
}
