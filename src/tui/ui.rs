// UI rendering - called on every frame
//
// Layout, top to bottom:
//   title bar | totals panel | form (goal row, food row) | history + food lists
//   | system logs (optional) | status bar
// Overlays (alert, toast) are drawn last so they sit on top.

use super::app::App;
use super::components::{
    alert, form_panel, list_panel, logs_panel, status_bar, title_bar, totals_panel,
};
use super::layout::Breakpoint;
use crate::view::Region;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the system logs panel when shown
const LOGS_HEIGHT: u16 = 7;

pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let area = f.area();
    let bp = Breakpoint::from_width(area.width);
    let show_logs = app.show_logs && bp.fits_logs();

    let mut constraints = vec![
        Constraint::Length(3), // title
        Constraint::Length(4), // totals
        Constraint::Length(6), // form
        Constraint::Min(4),    // lists
    ];
    if show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2)); // status

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    title_bar::render(f, chunks[0], app);
    totals_panel::render(f, chunks[1], app);
    form_panel::render(f, chunks[2], app);
    render_lists(f, chunks[3], app, bp);
    if show_logs {
        let entries = app.log_buffer.get_all();
        logs_panel::render(f, chunks[4], &entries, &app.theme);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
    if let Some(message) = app.screen().current_alert() {
        alert::render(f, area, message, &app.theme);
    }
}

/// History and food list: side by side when there is room, stacked otherwise
fn render_lists(f: &mut Frame, area: Rect, app: &App, bp: Breakpoint) {
    let halves = Layout::default()
        .direction(bp.lists_direction())
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let screen = app.screen();
    list_panel::render(
        f,
        halves[0],
        "History",
        screen.items(Region::History),
        app.theme.history,
        &app.theme,
    );
    list_panel::render(
        f,
        halves[1],
        "Food List",
        screen.items(Region::FoodList),
        app.theme.food,
        &app.theme,
    );
}
