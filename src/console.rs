// Console module - headless host
//
// Reads one command per line, types into the same named fields the terminal
// UI has, and presses the same controls. Region changes and alerts are printed
// after each command, so a session can be scripted:
//
//   goal 2000
//   submit
//   add Apple 95
//   show

use crate::coordinator::{Coordinator, Outcome};
use crate::view::{Control, Field, Region, Surface, SurfaceModel};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  goal <value>            type into the calorie goal field
  submit                  press Set Goal
  name <text>             type into the food name field
  calories <value>        type into the food calories field
  add                     press Add Food
  add <name> <calories>   fill both food fields, then press Add Food
  show                    print every region
  help                    this list
  quit                    exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Goal(String),
    Name(String),
    Calories(String),
    Submit,
    Add,
    AddFood { name: String, calories: String },
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "goal" => Command::Goal(rest.to_string()),
            "name" => Command::Name(rest.to_string()),
            "calories" | "cal" => Command::Calories(rest.to_string()),
            "submit" => Command::Submit,
            "add" if rest.is_empty() => Command::Add,
            "add" => {
                // Last word is the calories, everything before it the name
                let (name, calories) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or_else(|| "usage: add <name> <calories>".to_string())?;
                Command::AddFood {
                    name: name.trim().to_string(),
                    calories: calories.to_string(),
                }
            }
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {} (try `help`)", other)),
        };
        Ok(Some(command))
    }
}

/// Surface that remembers which regions changed since the last flush
#[derive(Default)]
pub struct ConsoleSurface {
    model: SurfaceModel,
    changed: Vec<Region>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines describing region changes and alerts since the last call
    pub fn flush(&mut self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .model
            .take_alerts()
            .into_iter()
            .map(|message| format!("! {}", message))
            .collect();

        let mut changed = std::mem::take(&mut self.changed);
        changed.sort_by_key(|region| region_order(*region));
        changed.dedup();
        for region in changed {
            lines.extend(self.describe(region));
        }
        lines
    }

    /// Lines describing every region
    pub fn snapshot(&self) -> Vec<String> {
        [Region::TotalCalories, Region::History, Region::FoodList]
            .into_iter()
            .flat_map(|region| self.describe(region))
            .collect()
    }

    fn describe(&self, region: Region) -> Vec<String> {
        let heading = match region {
            Region::TotalCalories => return vec![self.model.text(region).to_string()],
            Region::History => "History:",
            Region::FoodList => "Food List:",
        };
        let items = self.model.items(region);
        let mut lines = vec![heading.to_string()];
        if items.is_empty() {
            lines.push("  (empty)".to_string());
        }
        lines.extend(items.iter().map(|item| format!("  - {}", item)));
        lines
    }
}

fn region_order(region: Region) -> u8 {
    match region {
        Region::TotalCalories => 0,
        Region::History => 1,
        Region::FoodList => 2,
    }
}

impl Surface for ConsoleSurface {
    fn value(&self, field: Field) -> String {
        self.model.value(field)
    }

    fn set_value(&mut self, field: Field, value: &str) {
        self.model.set_value(field, value);
    }

    fn set_text(&mut self, region: Region, text: String) {
        if self.model.text(region) != text {
            self.changed.push(region);
        }
        self.model.set_text(region, text);
    }

    fn replace_items(&mut self, region: Region, items: Vec<String>) {
        if self.model.items(region) != items.as_slice() {
            self.changed.push(region);
        }
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

/// Apply one command. Returns false when the session should end.
fn execute(
    tracker: &mut Coordinator<ConsoleSurface>,
    command: Command,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        Command::Goal(value) => tracker.surface_mut().set_value(Field::CalorieGoal, &value),
        Command::Name(value) => tracker.surface_mut().set_value(Field::FoodName, &value),
        Command::Calories(value) => tracker.surface_mut().set_value(Field::FoodCalories, &value),
        Command::Submit => press(tracker, Control::SubmitGoal, out)?,
        Command::Add => press(tracker, Control::AddFood, out)?,
        Command::AddFood { name, calories } => {
            let surface = tracker.surface_mut();
            surface.set_value(Field::FoodName, &name);
            surface.set_value(Field::FoodCalories, &calories);
            press(tracker, Control::AddFood, out)?;
        }
        Command::Show => {
            for line in tracker.surface().snapshot() {
                writeln!(out, "{}", line)?;
            }
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn press(
    tracker: &mut Coordinator<ConsoleSurface>,
    control: Control,
    out: &mut impl Write,
) -> Result<()> {
    if !tracker.activate(control) {
        writeln!(out, "{} is disabled", control.label())?;
        return Ok(());
    }
    if let Some(Outcome::GoalIgnored) = tracker.take_outcome() {
        writeln!(out, "Goal must be a whole number")?;
    }
    Ok(())
}

/// Run the headless session until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    mut tracker: Coordinator<ConsoleSurface>,
    input: R,
    mut out: W,
) -> Result<()> {
    // Initial render
    for line in tracker.surface_mut().flush() {
        writeln!(out, "{}", line)?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                tracing::debug!("Rejected command line {:?}", line);
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        let keep_going = execute(&mut tracker, command, &mut out)?;
        for line in tracker.surface_mut().flush() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        if !keep_going {
            break;
        }
    }

    tracing::info!(
        entries = tracker.state().food_entries().len(),
        total = tracker.state().total_consumed(),
        "Headless session ended"
    );
    Ok(())
}
