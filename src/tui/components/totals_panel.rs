//! Totals panel
//!
//! Shows the totals label exactly as the presenter wrote it, with a progress
//! gauge underneath once a positive goal exists.

use crate::tui::app::App;
use crate::view::Region;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Fraction of the goal consumed, clamped to the gauge range.
/// None when there is no positive goal to measure against.
pub fn goal_ratio(consumed: u64, goal: Option<i64>) -> Option<f64> {
    let goal = goal.filter(|g| *g > 0)?;
    Some((consumed as f64 / goal as f64).min(1.0))
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(" Today ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let label = Paragraph::new(app.screen().text(Region::TotalCalories)).style(
        Style::default()
            .fg(theme.totals)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(label, rows[0]);

    let state = app.tracker.state();
    if let Some(ratio) = goal_ratio(state.total_consumed(), state.goal()) {
        let over = state.remaining().is_some_and(|r| r < 0);
        let fill = if over { theme.gauge_over } else { theme.gauge_fill };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(fill).bg(theme.background))
            .ratio(ratio)
            .label(format!("{:.0}%", ratio * 100.0));
        f.render_widget(gauge, rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_ratio() {
        assert_eq!(goal_ratio(500, Some(2000)), Some(0.25));
        assert_eq!(goal_ratio(2500, Some(2000)), Some(1.0));
        assert_eq!(goal_ratio(10, None), None);
        assert_eq!(goal_ratio(10, Some(0)), None);
        assert_eq!(goal_ratio(10, Some(-5)), None);
    }
}
