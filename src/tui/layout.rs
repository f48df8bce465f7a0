//! Width breakpoints for the tracker screen.
//!
//! Render code asks the breakpoint what to show instead of comparing widths.

use ratatui::layout::Direction;

/// Ordered narrowest first, so `>=` compares widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Below 60 columns
    Compact,
    /// 60 to 99 columns
    Normal,
    /// 100 columns and up
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// History and food list sit side by side unless the terminal is narrow
    pub fn lists_direction(self) -> Direction {
        if self >= Breakpoint::Normal {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }

    /// The logs panel is dropped on compact terminals even when enabled
    pub fn fits_logs(self) -> bool {
        self >= Breakpoint::Normal
    }

    pub fn fits_key_hints(self) -> bool {
        self == Breakpoint::Wide
    }
}
