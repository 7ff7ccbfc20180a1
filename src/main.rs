// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Plex Toolbox Dashboard.
//!
//! A terminal dashboard for a Plex media server management backend.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background task worker that talks to the backend's REST API.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Task Worker** owns the HTTP client and an async runtime, and runs
//!   backend requests one task at a time.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.

mod api;
mod components;
mod config;
mod dashboard;
mod events;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, OpenOptions},
    io::{self},
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    components::{DashboardView, LibrariesView, ScanHistoryView, SettingsView},
    config::AppConfig,
    events::{AppEvent, process_events},
    tasks::AppTask,
    theme::Theme,
};

const TICK_MILLIS: u64 = 250;

/// Ticks a status bar message stays visible for.
const STATUS_TICKS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Dashboard,
    Libraries,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatusMessage {
    Notice(String),
    Error(String),
}

#[derive(Debug)]
pub(crate) struct Status {
    pub(crate) message: StatusMessage,
    expires_at: usize,
}

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,

    pub(crate) theme: Theme,
    pub(crate) main_view: MainView,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_tx: Sender<AppTask>,

    pub(crate) dashboard_view: DashboardView,
    pub(crate) history_view: ScanHistoryView,
    pub(crate) libraries_view: LibrariesView,
    pub(crate) settings_view: SettingsView,

    pub(crate) status: Option<Status>,
    pub(crate) tick: usize,
}

impl App {
    /// Create a new instance of application state.
    pub(crate) fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Dashboard,
            event_tx,
            event_rx,
            task_tx,
            dashboard_view: DashboardView::new(),
            history_view: ScanHistoryView::new(),
            libraries_view: LibrariesView::new(),
            settings_view: SettingsView::new(),
            status: None,
            tick: 0,
        }
    }

    pub(crate) fn set_status(&mut self, message: StatusMessage) {
        self.status = Some(Status {
            message,
            expires_at: self.tick.wrapping_add(STATUS_TICKS),
        });
    }

    pub(crate) fn expire_status(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.expires_at == self.tick)
        {
            self.status = None;
        }
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging().context("Failed to initialise logging")?;
    info!(api_url = %config.api_url(), "starting");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends `tracing` output to a log file beside the configuration file.
///
/// The terminal belongs to the UI, so nothing is logged to it. Verbosity
/// comes from `RUST_LOG` and defaults to `info`.
fn init_logging() -> Result<()> {
    let Some(path) = config::log_file_path() else {
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process backend [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it requests the first dashboard load and hands
/// control to [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to run backend requests.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(TICK_MILLIS));
        }
    });

    app.event_tx
        .send(AppEvent::RefreshDashboard)
        .context("Failed to request the dashboard")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_expires_after_its_ticks() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);

        app.set_status(StatusMessage::Notice("Scan started".to_string()));

        for _ in 0..STATUS_TICKS - 1 {
            app.tick += 1;
            app.expire_status();
        }
        assert!(app.status.is_some());

        app.tick += 1;
        app.expire_status();
        assert!(app.status.is_none());
    }
}
