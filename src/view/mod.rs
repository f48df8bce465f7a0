// View module - presentation adapter
//
// Translates between surface fields and plain values, and renders tracker
// state into surface regions. Holds no business data: only the surface and
// the single-slot handler bindings for the two controls.

mod surface;

pub use surface::{Control, Field, Region, Surface, SurfaceModel};

use crate::tracker::FoodEntry;

/// Handler bound to a control. `C` is the context the handler runs against
/// (the coordinator), passed in at dispatch time.
pub type Handler<C> = fn(&mut C);

/// Raw food input after trimming and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodInput {
    pub name: String,
    /// None when the calories field is not a non-negative integer
    pub calories: Option<u32>,
}

/// Parse the leading integer of a string, ignoring trailing text.
///
/// Mirrors the lenient "parse as much as you can" behavior of form inputs:
/// `"95 kcal"` is 95, `"3.7"` is 3, `"abc"` and `""` are None.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Totals label text. An unset goal renders as "not set".
pub fn totals_label(consumed: u64, goal: Option<i64>) -> String {
    match goal {
        Some(goal) => format!("Total Calories: {} / {}", consumed, goal),
        None => format!("Total Calories: {} / not set", consumed),
    }
}

pub fn food_line(entry: &FoodEntry) -> String {
    format!("{}: {} calories", entry.name, entry.calories)
}

/// Presentation adapter over a surface
pub struct Presenter<S, C> {
    surface: S,
    add_food: Option<Handler<C>>,
    submit_goal: Option<Handler<C>>,
}

impl<S: Surface, C> Presenter<S, C> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            add_food: None,
            submit_goal: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn read_food_input(&self) -> FoodInput {
        let name = self.surface.value(Field::FoodName).trim().to_string();
        let calories = parse_leading_int(&self.surface.value(Field::FoodCalories))
            .and_then(|v| u32::try_from(v).ok());
        FoodInput { name, calories }
    }

    pub fn read_goal_input(&self) -> Option<i64> {
        parse_leading_int(&self.surface.value(Field::CalorieGoal))
    }

    pub fn clear_food_input(&mut self) {
        self.surface.set_value(Field::FoodName, "");
        self.surface.set_value(Field::FoodCalories, "");
    }

    pub fn render_totals(&mut self, consumed: u64, goal: Option<i64>) {
        self.surface
            .set_text(Region::TotalCalories, totals_label(consumed, goal));
    }

    pub fn render_history(&mut self, lines: Vec<String>) {
        self.surface.replace_items(Region::History, lines);
    }

    pub fn render_food_list(&mut self, entries: &[FoodEntry]) {
        let lines = entries.iter().map(food_line).collect();
        self.surface.replace_items(Region::FoodList, lines);
    }

    pub fn set_add_enabled(&mut self, enabled: bool) {
        self.surface.set_enabled(Control::AddFood, enabled);
    }

    pub fn notify(&mut self, message: &str) {
        self.surface.alert(message);
    }

    /// Bind the add-food handler. Rebinding replaces the previous handler.
    pub fn on_add_food_requested(&mut self, handler: Handler<C>) {
        self.add_food = Some(handler);
    }

    /// Bind the goal-submission handler. Rebinding replaces the previous handler.
    pub fn on_goal_submitted(&mut self, handler: Handler<C>) {
        self.submit_goal = Some(handler);
    }

    /// Handler to run for an activated control.
    ///
    /// Disabled controls swallow the activation, like a disabled button.
    pub fn handler_for(&self, control: Control) -> Option<Handler<C>> {
        if !self.surface.is_enabled(control) {
            tracing::debug!("Ignoring activation of disabled control {:?}", control);
            return None;
        }
        match control {
            Control::AddFood => self.add_food,
            Control::SubmitGoal => self.submit_goal,
        }
    }
}
