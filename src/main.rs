// Calorie Tracker - daily calorie goal and food log
//
// Set a daily calorie goal, log foods with their calories, and watch the
// running total and per-day history update.
//
// Architecture:
// - Tracker: State store (entries, running total, per-day totals, goal)
// - View: Named fields/regions/controls and the presenter that renders them
// - Coordinator: Validates user actions, mutates state, re-renders
// - TUI (ratatui): Terminal host drawing the surface every frame
// - Console: Headless host driven by line commands on stdin

mod cli;
mod config;
mod console;
mod coordinator;
mod logging;
mod startup;
mod theme;
mod tracker;
mod tui;
mod view;

use anyhow::Result;
use clap::Parser;
use config::Config;
use coordinator::Coordinator;
use logging::{LogBuffer, LogSink};
use tracker::TrackerState;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show, --path, --reset)
    let cli = cli::Cli::parse();
    if cli::handle_cli(&cli)? {
        return Ok(());
    }

    let config = Config::from_env()?;
    let headless = cli.headless || config.headless;

    // In TUI mode: capture logs to buffer (prevents garbling the display)
    // In headless mode: logs go to stderr, stdout carries region output
    let log_buffer = LogBuffer::new();
    let sink = if headless {
        LogSink::Stderr
    } else {
        LogSink::Buffer(log_buffer.clone())
    };
    // Guard must outlive the program so file logs flush
    let _file_guard = logging::init(&config.logging, sink);

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let date_format = config.checked_date_format();

    if headless {
        startup::print_startup(&config);

        let tracker = Coordinator::with_date_format(
            TrackerState::new(),
            console::ConsoleSurface::new(),
            date_format,
        );
        let stdin = std::io::stdin();
        console::run(tracker, stdin.lock(), std::io::stdout())?;
    } else {
        startup::log_startup(&config);

        let tracker = Coordinator::with_date_format(
            TrackerState::new(),
            tui::screen::Screen::new(),
            date_format,
        );
        let app = tui::app::App::new(
            tracker,
            log_buffer,
            theme::Theme::by_name(&config.theme),
            config.show_logs,
        );
        tui::run_tui(app).await?;
    }

    tracing::info!("Shutting down");
    Ok(())
}
