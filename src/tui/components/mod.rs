// Components module - reusable UI building blocks
//
// Shell components are rendered around the tracker:
// - Title bar: App name, goal phase
// - Status bar: Uptime, entry count, remaining calories
// - Logs panel: System log entries (optional)
//
// Tracker components render the surface regions:
// - Totals panel, form panel (inputs + buttons), list panels
//
// Overlays: alert modal (blocking) and toast (auto-dismiss).

pub mod alert;
pub mod form_panel;
pub mod list_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod totals_panel;

pub use toast::Toast;
