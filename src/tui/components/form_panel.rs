//! Input form: goal row and food row
//!
//! Text inputs are bordered single-line boxes; buttons are bordered labels.
//! The focused widget gets the highlight border, a disabled button is dimmed.

use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::screen::{Focus, Screen};
use crate::view::{Control, Field, Surface};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let goal_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(14)])
        .split(rows[0]);

    let food_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(14),
        ])
        .split(rows[1]);

    let screen = app.screen();
    let theme = &app.theme;

    render_input(f, goal_row[0], screen, Field::CalorieGoal, theme);
    render_button(f, goal_row[1], screen, Control::SubmitGoal, theme);
    render_input(f, food_row[0], screen, Field::FoodName, theme);
    render_input(f, food_row[1], screen, Field::FoodCalories, theme);
    render_button(f, food_row[2], screen, Control::AddFood, theme);
}

fn render_input(f: &mut Frame, area: Rect, screen: &Screen, field: Field, theme: &Theme) {
    let focused = screen.is_focused(Focus::Input(field));
    let mut value = screen.value(field);
    if focused {
        value.push('▏');
    }

    let input = Paragraph::new(value)
        .style(Style::default().fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.focus_border(focused)))
                .title(format!(" {} ", field.label())),
        );

    f.render_widget(input, area);
}

fn render_button(f: &mut Frame, area: Rect, screen: &Screen, control: Control, theme: &Theme) {
    let focused = screen.is_focused(Focus::Button(control));
    let enabled = screen.is_enabled(control);

    let style = if !enabled {
        Style::default().fg(theme.muted)
    } else if focused {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(theme.foreground)
    };

    let button = Paragraph::new(control.label())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(if enabled {
                    theme.focus_border(focused)
                } else {
                    theme.muted
                })),
        );

    f.render_widget(button, area);
}
