//! Terminal display surface
//!
//! The `Screen` is the terminal's equivalent of a page: it holds the field
//! values, region content, control states and pending alerts that the
//! renderer draws every frame. Keyboard input edits the focused field or
//! activates the focused control.

use crate::view::{Control, Field, Region, Surface, SurfaceModel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Anything on screen that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    Button(Control),
}

/// Tab order: goal row first, then the food row
pub const FOCUS_ORDER: [Focus; 5] = [
    Focus::Input(Field::CalorieGoal),
    Focus::Button(Control::SubmitGoal),
    Focus::Input(Field::FoodName),
    Focus::Input(Field::FoodCalories),
    Focus::Button(Control::AddFood),
];

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Consumed by the screen itself (typing, focus, alert dismissal)
    Handled,
    /// A control was activated
    Activate(Control),
    Quit,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Screen {
    model: SurfaceModel,
    focus: usize,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            model: SurfaceModel::new(),
            focus: 0,
        }
    }

    pub fn focus(&self) -> Focus {
        FOCUS_ORDER[self.focus]
    }

    pub fn is_focused(&self, target: Focus) -> bool {
        self.focus() == target
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FOCUS_ORDER.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
    }

    pub fn text(&self, region: Region) -> &str {
        self.model.text(region)
    }

    pub fn items(&self, region: Region) -> &[String] {
        self.model.items(region)
    }

    /// Alert currently blocking input, if any
    pub fn current_alert(&self) -> Option<&str> {
        self.model.alerts().first().map(String::as_str)
    }

    /// Translate a key press into an action.
    ///
    /// Layered: Ctrl-C always quits, a pending alert swallows everything
    /// else, then global keys, then the focused widget.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if self.current_alert().is_some() {
            self.model.dismiss_alert();
            return KeyAction::Handled;
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                KeyAction::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                KeyAction::Handled
            }
            KeyCode::Enter => KeyAction::Activate(self.enter_target()),
            KeyCode::Backspace => match self.focus() {
                Focus::Input(field) => {
                    self.model.pop_char(field);
                    KeyAction::Handled
                }
                Focus::Button(_) => KeyAction::Ignored,
            },
            KeyCode::Char(' ') if matches!(self.focus(), Focus::Button(_)) => {
                KeyAction::Activate(self.enter_target())
            }
            KeyCode::Char(c) => match self.focus() {
                Focus::Input(field) => {
                    self.model.push_char(field, c);
                    KeyAction::Handled
                }
                Focus::Button(_) => KeyAction::Ignored,
            },
            _ => KeyAction::Ignored,
        }
    }

    /// Control that Enter triggers from the current focus
    fn enter_target(&self) -> Control {
        match self.focus() {
            Focus::Button(control) => control,
            Focus::Input(Field::CalorieGoal) => Control::SubmitGoal,
            Focus::Input(Field::FoodName | Field::FoodCalories) => Control::AddFood,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Screen {
    fn value(&self, field: Field) -> String {
        self.model.value(field)
    }

    fn set_value(&mut self, field: Field, value: &str) {
        self.model.set_value(field, value);
    }

    fn set_text(&mut self, region: Region, text: String) {
        self.model.set_text(region, text);
    }

    fn replace_items(&mut self, region: Region, items: Vec<String>) {
        self.model.replace_items(region, items);
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.model.set_enabled(control, enabled);
    }

    fn is_enabled(&self, control: Control) -> bool {
        self.model.is_enabled(control)
    }

    fn alert(&mut self, message: &str) {
        self.model.alert(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(screen: &mut Screen, code: KeyCode) -> KeyAction {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(screen: &mut Screen, s: &str) {
        for c in s.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut screen = Screen::new();
        assert_eq!(screen.focus(), Focus::Input(Field::CalorieGoal));
        press(&mut screen, KeyCode::BackTab);
        assert_eq!(screen.focus(), Focus::Button(Control::AddFood));
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.focus(), Focus::Button(Control::SubmitGoal));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut screen = Screen::new();
        type_str(&mut screen, "2000");
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "Apples");
        press(&mut screen, KeyCode::Backspace);

        assert_eq!(screen.value(Field::CalorieGoal), "2000");
        assert_eq!(screen.value(Field::FoodName), "Apple");
    }

    #[test]
    fn test_enter_activates_by_row() {
        let mut screen = Screen::new();
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            KeyAction::Activate(Control::SubmitGoal)
        );
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Tab);
        assert_eq!(screen.focus(), Focus::Input(Field::FoodCalories));
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            KeyAction::Activate(Control::AddFood)
        );
    }

    #[test]
    fn test_space_on_button_activates_but_types_in_input() {
        let mut screen = Screen::new();
        press(&mut screen, KeyCode::Tab);
        assert_eq!(
            press(&mut screen, KeyCode::Char(' ')),
            KeyAction::Activate(Control::SubmitGoal)
        );
        press(&mut screen, KeyCode::Tab);
        type_str(&mut screen, "Ice cream");
        assert_eq!(screen.value(Field::FoodName), "Ice cream");
    }

    #[test]
    fn test_alert_swallows_next_key() {
        let mut screen = Screen::new();
        screen.alert("Please set a calorie goal before adding food.");
        assert!(screen.current_alert().is_some());

        assert_eq!(press(&mut screen, KeyCode::Esc), KeyAction::Handled);
        assert!(screen.current_alert().is_none());
        assert_eq!(press(&mut screen, KeyCode::Esc), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_even_with_alert() {
        let mut screen = Screen::new();
        screen.alert("blocked");
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(screen.handle_key(key), KeyAction::Quit);
    }
}
