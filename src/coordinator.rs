//! Coordinator - wires control activations to tracker mutations
//!
//! Owns the tracker state and the presenter. Two phases: `GoalUnset` at
//! startup, `GoalSet` after the first goal submission. There is no way back.
//!
//! ```text
//!   GoalUnset ──goal submitted──▶ GoalSet ──goal submitted──▶ GoalSet
//!   (add disabled)                (add enabled)
//! ```

use crate::tracker::TrackerState;
use crate::view::{Control, Presenter, Surface};
use chrono::NaiveDate;
use std::fmt::{self, Write as _};

/// Default history date rendering (month/day/year, no zero padding)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Coordinator phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    GoalUnset,
    GoalSet,
}

/// Why an add-food request was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Empty name or calories not a valid number
    InvalidFood,
    /// No goal has been set yet
    GoalNotSet,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InvalidFood => write!(f, "Please enter valid food name and calories."),
            Rejection::GoalNotSet => write!(f, "Please set a calorie goal before adding food."),
        }
    }
}

impl std::error::Error for Rejection {}

/// What a successful action did, for hosts that want to confirm it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    FoodAdded { name: String, calories: u32 },
    GoalSet(i64),
    /// Goal field did not hold an integer; nothing changed
    GoalIgnored,
}

pub struct Coordinator<S: Surface> {
    state: TrackerState,
    view: Presenter<S, Coordinator<S>>,
    phase: Phase,
    date_format: String,
    last_outcome: Option<Outcome>,
}

impl<S: Surface> Coordinator<S> {
    /// Wire a coordinator around injected state and surface, then render once
    pub fn new(state: TrackerState, surface: S) -> Self {
        Self::with_date_format(state, surface, DEFAULT_DATE_FORMAT)
    }

    pub fn with_date_format(state: TrackerState, surface: S, date_format: &str) -> Self {
        let phase = if state.goal().is_some() {
            Phase::GoalSet
        } else {
            Phase::GoalUnset
        };

        let mut view = Presenter::new(surface);
        view.on_add_food_requested(Self::on_add_food);
        view.on_goal_submitted(Self::on_submit_goal);

        let mut coordinator = Self {
            state,
            view,
            phase,
            date_format: date_format.to_string(),
            last_outcome: None,
        };
        if coordinator.phase == Phase::GoalUnset {
            coordinator.view.set_add_enabled(false);
        }
        coordinator.update_view();
        coordinator
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        self.view.surface()
    }

    /// Hosts write raw input into the surface through this
    pub fn surface_mut(&mut self) -> &mut S {
        self.view.surface_mut()
    }

    /// Take the outcome of the last successful action, if any
    pub fn take_outcome(&mut self) -> Option<Outcome> {
        self.last_outcome.take()
    }

    /// Run the handler bound to an activated control.
    ///
    /// Returns false when the control is disabled or unbound.
    pub fn activate(&mut self, control: Control) -> bool {
        match self.view.handler_for(control) {
            Some(handler) => {
                handler(self);
                true
            }
            None => false,
        }
    }

    /// Bound to the add-food control
    fn on_add_food(&mut self) {
        if let Err(rejection) = self.handle_add_food() {
            tracing::warn!("Add food rejected: {}", rejection);
            self.view.notify(&rejection.to_string());
        }
    }

    /// Bound to the submit-goal control
    fn on_submit_goal(&mut self) {
        self.handle_set_goal();
    }

    /// Validate the food inputs and record the entry.
    ///
    /// On rejection nothing is mutated; the caller decides how to notify.
    pub fn handle_add_food(&mut self) -> Result<(), Rejection> {
        let input = self.view.read_food_input();
        let calories = match input.calories {
            Some(calories) if !input.name.is_empty() => calories,
            _ => return Err(Rejection::InvalidFood),
        };
        // Re-checked on every request even though GoalSet implies a goal
        if self.state.goal().is_none() {
            return Err(Rejection::GoalNotSet);
        }

        self.state.record_food(input.name.clone(), calories);
        self.state.accumulate_calories(calories);
        tracing::info!(
            name = %input.name,
            calories,
            total = self.state.total_consumed(),
            "Food added"
        );

        self.view.clear_food_input();
        self.update_view();
        self.last_outcome = Some(Outcome::FoodAdded {
            name: input.name,
            calories,
        });
        Ok(())
    }

    /// Accept whatever integer the goal field holds and enter GoalSet.
    ///
    /// A goal field that does not hold an integer is ignored.
    pub fn handle_set_goal(&mut self) {
        let Some(goal) = self.view.read_goal_input() else {
            tracing::warn!("Goal submission ignored: not an integer");
            self.last_outcome = Some(Outcome::GoalIgnored);
            return;
        };

        self.state.set_goal(goal);
        if self.phase == Phase::GoalUnset {
            tracing::debug!("Phase transition: GoalUnset -> GoalSet");
            self.phase = Phase::GoalSet;
        }
        tracing::info!(goal, "Calorie goal set");

        self.view.set_add_enabled(true);
        self.update_view();
        self.last_outcome = Some(Outcome::GoalSet(goal));
    }

    /// Push current state to the presenter. Reads only.
    pub fn update_view(&mut self) {
        let history = self.history_lines();
        self.view
            .render_totals(self.state.total_consumed(), self.state.goal());
        self.view.render_history(history);
        self.view.render_food_list(self.state.food_entries());
    }

    fn history_lines(&self) -> Vec<String> {
        self.state
            .history()
            .iter()
            .map(|(day, calories)| format!("{}: {} calories", self.day_label(*day), calories))
            .collect()
    }

    /// Day label in the configured format, ISO date when chrono cannot render it
    fn day_label(&self, day: NaiveDate) -> String {
        let mut label = String::new();
        if write!(label, "{}", day.format(&self.date_format)).is_err() {
            tracing::debug!("Date format {:?} cannot render a day", self.date_format);
            return day.to_string();
        }
        label
    }
}
