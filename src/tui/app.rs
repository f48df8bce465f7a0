// TUI application state
//
// Owns the coordinator (which owns the tracker state and the screen) plus
// everything that is purely about the terminal: theme, log panel, toast.

use super::components::Toast;
use super::screen::{KeyAction, Screen};
use crate::coordinator::{Coordinator, Outcome, Phase};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::{KeyEvent, KeyEventKind};
use std::time::Instant;

/// Main application state for the TUI
pub struct App {
    /// Tracker wiring: state store, presenter and screen
    pub tracker: Coordinator<Screen>,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: Theme,

    /// Whether the system logs panel is shown
    pub show_logs: bool,

    /// Confirmation toast for the last successful action
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,
}

impl App {
    pub fn new(
        tracker: Coordinator<Screen>,
        log_buffer: LogBuffer,
        theme: Theme,
        show_logs: bool,
    ) -> Self {
        tracing::debug!(theme = %theme.name, show_logs, "Terminal UI ready");
        Self {
            tracker,
            log_buffer,
            theme,
            show_logs,
            toast: None,
            should_quit: false,
            start_time: Instant::now(),
        }
    }

    pub fn screen(&self) -> &Screen {
        self.tracker.surface()
    }

    pub fn phase(&self) -> Phase {
        self.tracker.phase()
    }

    /// Route a key event through the screen, then act on the result
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals report releases and repeats; only presses count
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.tracker.surface_mut().handle_key(key) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Activate(control) => {
                if !self.tracker.activate(control) {
                    self.toast = Some(Toast::new(format!("{} is disabled", control.label())));
                    return;
                }
                if let Some(outcome) = self.tracker.take_outcome() {
                    self.toast = Some(Toast::new(outcome_message(&outcome)));
                }
            }
            KeyAction::Handled | KeyAction::Ignored => {}
        }
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Format uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::FoodAdded { name, calories } => format!("Added {} ({} cal)", name, calories),
        Outcome::GoalSet(goal) => format!("Goal set to {}", goal),
        Outcome::GoalIgnored => "Goal must be a whole number".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::TrackerState;
    use crate::view::{Field, Region, Surface};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        let tracker = Coordinator::new(TrackerState::new(), Screen::new());
        App::new(tracker, LogBuffer::new(), Theme::auto(), false)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keyboard_session() {
        let mut app = app();
        type_str(&mut app, "2000");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.phase(), Phase::GoalSet);
        assert_eq!(app.toast.as_ref().unwrap().message, "Goal set to 2000");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Apple");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "95");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.screen().text(Region::TotalCalories),
            "Total Calories: 95 / 2000"
        );
        assert_eq!(app.screen().items(Region::FoodList), ["Apple: 95 calories"]);
        assert_eq!(app.toast.as_ref().unwrap().message, "Added Apple (95 cal)");
    }

    #[test]
    fn test_add_before_goal_shows_disabled_toast() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.toast.as_ref().unwrap().message, "Add Food is disabled");
        assert_eq!(app.tracker.state().total_consumed(), 0);
    }

    #[test]
    fn test_rejection_raises_alert_not_toast() {
        let mut app = app();
        type_str(&mut app, "2000");
        press(&mut app, KeyCode::Enter);
        app.toast = None;

        // Add with empty fields
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.screen().current_alert(),
            Some("Please enter valid food name and calories.")
        );
        assert!(app.toast.is_none());

        // Next key only dismisses
        press(&mut app, KeyCode::Esc);
        assert!(app.screen().current_alert().is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.screen().value(Field::CalorieGoal), "");
    }
}
