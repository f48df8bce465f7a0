//! Display surface contract
//!
//! A surface is a set of named input fields, output regions and controls.
//! The presenter only reads values from and writes text into these names;
//! how a host draws them (terminal frame, stdout lines) is its own business.

use std::collections::{HashMap, HashSet};

/// Text input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CalorieGoal,
    FoodName,
    FoodCalories,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::CalorieGoal => "Calorie goal",
            Field::FoodName => "Food name",
            Field::FoodCalories => "Calories",
        }
    }
}

/// Output regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Single-line totals label
    TotalCalories,
    /// Per-day history list
    History,
    /// Logged food list
    FoodList,
}

/// Activatable controls (buttons)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    AddFood,
    SubmitGoal,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::AddFood => "Add Food",
            Control::SubmitGoal => "Set Goal",
        }
    }
}

/// Everything the presenter needs from a host
pub trait Surface {
    /// Current raw value of an input field
    fn value(&self, field: Field) -> String;

    fn set_value(&mut self, field: Field, value: &str);

    /// Replace the text content of a region
    fn set_text(&mut self, region: Region, text: String);

    /// Replace all line items of a list region
    fn replace_items(&mut self, region: Region, items: Vec<String>);

    fn set_enabled(&mut self, control: Control, enabled: bool);

    fn is_enabled(&self, control: Control) -> bool;

    /// Blocking notification to the user
    fn alert(&mut self, message: &str);
}

/// Plain in-memory surface
///
/// Hosts embed this to hold field values and region content, and tests use it
/// directly as a headless display.
#[derive(Debug, Default, Clone)]
pub struct SurfaceModel {
    values: HashMap<Field, String>,
    texts: HashMap<Region, String>,
    items: HashMap<Region, Vec<String>>,
    disabled: HashSet<Control>,
    alerts: Vec<String>,
}

impl SurfaceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, region: Region) -> &str {
        self.texts.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn items(&self, region: Region) -> &[String] {
        self.items.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Alerts raised so far, oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain pending alerts
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Remove the oldest pending alert
    pub fn dismiss_alert(&mut self) -> Option<String> {
        if self.alerts.is_empty() {
            None
        } else {
            Some(self.alerts.remove(0))
        }
    }

    /// Append a character to a field (keyboard typing)
    pub fn push_char(&mut self, field: Field, c: char) {
        self.values.entry(field).or_default().push(c);
    }

    /// Remove the last character of a field (backspace)
    pub fn pop_char(&mut self, field: Field) {
        if let Some(value) = self.values.get_mut(&field) {
            value.pop();
        }
    }
}

impl Surface for SurfaceModel {
    fn value(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_string());
    }

    fn set_text(&mut self, region: Region, text: String) {
        self.texts.insert(region, text);
    }

    fn replace_items(&mut self, region: Region, items: Vec<String>) {
        self.items.insert(region, items);
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        if enabled {
            self.disabled.remove(&control);
        } else {
            self.disabled.insert(control);
        }
    }

    fn is_enabled(&self, control: Control) -> bool {
        !self.disabled.contains(&control)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_start_enabled() {
        let model = SurfaceModel::new();
        assert!(model.is_enabled(Control::AddFood));
        assert!(model.is_enabled(Control::SubmitGoal));
    }

    #[test]
    fn test_typing_into_fields() {
        let mut model = SurfaceModel::new();
        for c in "Soup".chars() {
            model.push_char(Field::FoodName, c);
        }
        model.pop_char(Field::FoodName);
        model.pop_char(Field::FoodCalories); // empty field, no-op
        assert_eq!(model.value(Field::FoodName), "Sou");
        assert_eq!(model.value(Field::FoodCalories), "");
    }

    #[test]
    fn test_replace_items_overwrites() {
        let mut model = SurfaceModel::new();
        model.replace_items(Region::FoodList, vec!["a".into(), "b".into()]);
        model.replace_items(Region::FoodList, vec!["c".into()]);
        assert_eq!(model.items(Region::FoodList), ["c".to_string()]);
        assert!(model.items(Region::History).is_empty());
    }

    #[test]
    fn test_take_alerts_drains() {
        let mut model = SurfaceModel::new();
        model.alert("one");
        model.alert("two");
        assert_eq!(model.take_alerts(), vec!["one", "two"]);
        assert!(model.alerts().is_empty());
    }

    #[test]
    fn test_dismiss_alert_is_fifo() {
        let mut model = SurfaceModel::new();
        model.alert("first");
        model.alert("second");
        assert_eq!(model.dismiss_alert().as_deref(), Some("first"));
        assert_eq!(model.alerts(), ["second"]);
        model.dismiss_alert();
        assert_eq!(model.dismiss_alert(), None);
    }
}
