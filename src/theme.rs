// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme names accepted in config
pub const THEME_NAMES: [&str; 4] = ["auto", "dracula", "nord", "gruvbox"];

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Shell
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub muted: Color,

    // Terminal colors
    pub background: Color,
    pub foreground: Color,

    // Tracker colors
    pub totals: Color,
    pub gauge_fill: Color,
    pub gauge_over: Color,
    pub history: Color,
    pub food: Color,
    pub alert: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "auto" => Self::auto(),
            other => {
                tracing::warn!(
                    "Unknown theme {:?} (known: {}), falling back to auto",
                    other,
                    THEME_NAMES.join(", ")
                );
                Self::auto()
            }
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            muted: Color::DarkGray,
            background: Color::Reset,
            foreground: Color::Reset,
            totals: Color::Cyan,
            // Muted gauge fills for white text contrast
            gauge_fill: Color::Rgb(0x00, 0x64, 0x00), // muted green
            gauge_over: Color::Rgb(0x8b, 0x00, 0x00), // muted red
            history: Color::Magenta,
            food: Color::Green,
            alert: Color::Red,
            border_type: BorderType::Plain,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(0x8b, 0xe9, 0xfd),      // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),  // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            muted: Color::Rgb(0x62, 0x72, 0xa4),      // comment
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            totals: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
            gauge_fill: Color::Rgb(0x28, 0x7d, 0x3d), // muted green
            gauge_over: Color::Rgb(0x80, 0x2a, 0x2a), // muted red
            history: Color::Rgb(0xbd, 0x93, 0xf9),    // purple
            food: Color::Rgb(0x50, 0xfa, 0x7b),       // green
            alert: Color::Rgb(0xff, 0x55, 0x55),      // red
            border_type: BorderType::Rounded,
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(0x88, 0xc0, 0xd0),      // frost cyan
            border: Color::Rgb(0x4c, 0x56, 0x6a),     // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),  // aurora yellow
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            muted: Color::Rgb(0x4c, 0x56, 0x6a),      // polar night
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            totals: Color::Rgb(0x8f, 0xbc, 0xbb),     // frost teal
            gauge_fill: Color::Rgb(0x51, 0x5f, 0x46), // muted green
            gauge_over: Color::Rgb(0x5f, 0x30, 0x35), // muted red
            history: Color::Rgb(0xb4, 0x8e, 0xad),    // aurora purple
            food: Color::Rgb(0xa3, 0xbe, 0x8c),       // aurora green
            alert: Color::Rgb(0xbf, 0x61, 0x6a),      // aurora red
            border_type: BorderType::Rounded,
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(0x83, 0xa5, 0x98),      // aqua
            border: Color::Rgb(0x92, 0x83, 0x74),     // gray
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),  // yellow
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            muted: Color::Rgb(0x92, 0x83, 0x74),      // gray
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            totals: Color::Rgb(0x83, 0xa5, 0x98),     // aqua
            gauge_fill: Color::Rgb(0x5c, 0x5d, 0x13), // muted green
            gauge_over: Color::Rgb(0x7d, 0x24, 0x1a), // muted red
            history: Color::Rgb(0xd3, 0x86, 0x9b),    // purple
            food: Color::Rgb(0xb8, 0xbb, 0x26),       // green
            alert: Color::Rgb(0xfb, 0x49, 0x34),      // red
            border_type: BorderType::Plain,
        }
    }

    /// Border color for a widget based on focus state
    pub fn focus_border(&self, focused: bool) -> Color {
        if focused {
            self.highlight
        } else {
            self.border
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_loads_by_name() {
        for name in THEME_NAMES {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }

    #[test]
    fn test_theme_lookup_is_case_insensitive() {
        assert_eq!(Theme::by_name("Nord").name, "nord");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_auto() {
        assert_eq!(Theme::by_name("solarized").name, "auto");
    }
}
