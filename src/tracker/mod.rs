// Tracker module - in-memory calorie state
//
// Holds everything the session knows: the goal, every food entry in the
// order it was logged, the running total and the per-day buckets.
// Mutations trust their caller; validation lives in the coordinator.

use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

/// One logged food item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodEntry {
    pub name: String,
    pub calories: u32,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }
}

/// Per-day cumulative calories, keyed by local calendar day (chronological)
pub type DailyTotals = BTreeMap<NaiveDate, u64>;

/// Complete application state for one session
#[derive(Debug, Default)]
pub struct TrackerState {
    /// Sum of every addition this session. Not reset at midnight.
    total_calories_today: u64,

    /// Daily calorie goal (None until the first submission)
    target_goal: Option<i64>,

    /// Food entries in insertion order
    food_entries: Vec<FoodEntry>,

    /// Per-day buckets, created lazily on first contribution
    daily_totals: DailyTotals,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a food entry. Caller guarantees a non-empty name.
    pub fn record_food(&mut self, name: impl Into<String>, calories: u32) {
        self.food_entries.push(FoodEntry::new(name, calories));
    }

    /// Add calories to the running total and to today's bucket
    pub fn accumulate_calories(&mut self, amount: u32) {
        self.accumulate_calories_on(Local::now().date_naive(), amount);
    }

    /// Add calories to the running total and to the given day's bucket
    pub fn accumulate_calories_on(&mut self, day: NaiveDate, amount: u32) {
        let amount = u64::from(amount);
        self.total_calories_today += amount;
        *self.daily_totals.entry(day).or_insert(0) += amount;
    }

    pub fn set_goal(&mut self, value: i64) {
        self.target_goal = Some(value);
    }

    pub fn goal(&self) -> Option<i64> {
        self.target_goal
    }

    pub fn total_consumed(&self) -> u64 {
        self.total_calories_today
    }

    pub fn history(&self) -> &DailyTotals {
        &self.daily_totals
    }

    pub fn food_entries(&self) -> &[FoodEntry] {
        &self.food_entries
    }

    /// Calories left before reaching the goal (negative once over it)
    pub fn remaining(&self) -> Option<i64> {
        let consumed = i64::try_from(self.total_calories_today).unwrap_or(i64::MAX);
        self.target_goal.map(|goal| goal.saturating_sub(consumed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = TrackerState::new();
        assert_eq!(state.total_consumed(), 0);
        assert_eq!(state.goal(), None);
        assert!(state.food_entries().is_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.remaining(), None);
    }

    #[test]
    fn test_total_is_sum_of_all_additions() {
        let mut state = TrackerState::new();
        let inputs = [("Apple", 95), ("Bread", 120), ("Water", 0), ("Pasta", 640)];
        for (name, calories) in inputs {
            state.record_food(name, calories);
            state.accumulate_calories(calories);
        }

        let expected: u64 = inputs.iter().map(|(_, c)| u64::from(*c)).sum();
        assert_eq!(state.total_consumed(), expected);
        assert_eq!(state.food_entries().len(), 4);
        assert_eq!(state.food_entries()[1], FoodEntry::new("Bread", 120));
    }

    #[test]
    fn test_history_sums_to_total_across_days() {
        let mut state = TrackerState::new();
        state.accumulate_calories_on(day(2026, 10, 14), 500);
        state.accumulate_calories_on(day(2026, 10, 15), 300);
        state.accumulate_calories_on(day(2026, 10, 14), 250);
        state.accumulate_calories_on(day(2026, 10, 16), 10);

        let history_sum: u64 = state.history().values().sum();
        assert_eq!(history_sum, state.total_consumed());
        assert_eq!(state.history()[&day(2026, 10, 14)], 750);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_history_is_chronological() {
        let mut state = TrackerState::new();
        state.accumulate_calories_on(day(2026, 10, 16), 1);
        state.accumulate_calories_on(day(2026, 9, 30), 1);

        let days: Vec<_> = state.history().keys().copied().collect();
        assert_eq!(days, vec![day(2026, 9, 30), day(2026, 10, 16)]);
    }

    #[test]
    fn test_total_not_reset_across_days() {
        let mut state = TrackerState::new();
        state.accumulate_calories_on(day(2026, 10, 15), 1800);
        state.accumulate_calories_on(day(2026, 10, 16), 200);
        assert_eq!(state.total_consumed(), 2000);
    }

    #[test]
    fn test_goal_overwrite_and_remaining() {
        let mut state = TrackerState::new();
        state.set_goal(2000);
        state.accumulate_calories(215);
        assert_eq!(state.remaining(), Some(1785));

        state.set_goal(100);
        assert_eq!(state.goal(), Some(100));
        assert_eq!(state.remaining(), Some(-115));
    }

    #[test]
    fn test_goal_accepts_any_integer() {
        let mut state = TrackerState::new();
        state.set_goal(-50);
        assert_eq!(state.goal(), Some(-50));
        state.set_goal(0);
        assert_eq!(state.goal(), Some(0));
    }
}
