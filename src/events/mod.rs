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

//! Application logic, event handling, and task dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs are translated into internal
//! state changes.
//!
//! # Organization
//!
//! * [`AppEvent`]: everything that can happen to the application, from key
//!   presses and ticks to the results of background tasks.
//! * `handlers`: one function per event, applying it to the [`App`] state and
//!   scheduling [`AppTask`](crate::tasks::AppTask)s.
//! * `key_handlers`: routing of raw key presses to the modal, the active view,
//!   and finally the global bindings.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    api::models::{
        ConnectionTest, LibraryContentPage, PlexLibrary, PlexServerConfig, ScanHistoryPage,
    },
    components::{LibraryDetail, SettingsSnapshot},
    dashboard::DashboardSnapshot,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),

    RefreshDashboard,
    DashboardLoaded(Box<DashboardSnapshot>),
    DashboardFailed(String),

    OpenScanHistory,
    CloseScanHistory,
    ReloadScanHistory,
    ScanHistoryLoaded(ScanHistoryPage),
    ScanHistoryFailed(String),
    DeleteScanRecord(i64),
    ScanRecordDeleted(i64, String),

    ReloadLibraries,
    LibrariesLoaded(Vec<PlexLibrary>),
    LibrariesFailed(String),
    SelectLibrary(String),
    LibraryLoaded(Box<LibraryDetail>),
    LibraryContentLoaded {
        key: String,
        offset: u32,
        page: LibraryContentPage,
    },
    LibraryFailed(String),
    LibraryContentFailed {
        key: String,
        message: String,
    },
    PageLibraryContent {
        key: String,
        offset: u32,
    },
    ScanLibrary {
        key: String,
        tracked: bool,
    },

    ReloadSettings,
    SettingsLoaded(Box<SettingsSnapshot>),
    TestConnection(PlexServerConfig),
    ConnectionTested(ConnectionTest),
    ConnectionTestFailed(String),
    SavePlexConfig(PlexServerConfig),

    Notice(String),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Implemented by views that consume key input while they are on screen.
pub(crate) trait AppEventProcessor {
    /// Handles a terminal event, returning `true` when it was consumed.
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if !dispatch_event(app, event)? {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` once the application should exit.
pub(crate) fn dispatch_event(app: &mut App, event: AppEvent) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => return Ok(false),
        AppEvent::FatalError(message) => return Err(anyhow!(message)),

        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::SetMainView(view) => handle_set_main_view(app, view)?,

        AppEvent::RefreshDashboard => handle_refresh_dashboard(app)?,
        AppEvent::DashboardLoaded(snapshot) => handle_dashboard_loaded(app, *snapshot),
        AppEvent::DashboardFailed(message) => handle_dashboard_failed(app, message),

        AppEvent::OpenScanHistory => handle_open_scan_history(app)?,
        AppEvent::CloseScanHistory => handle_close_scan_history(app),
        AppEvent::ReloadScanHistory => handle_reload_scan_history(app)?,
        AppEvent::ScanHistoryLoaded(page) => handle_scan_history_loaded(app, page)?,
        AppEvent::ScanHistoryFailed(message) => handle_scan_history_failed(app, message)?,
        AppEvent::DeleteScanRecord(id) => handle_delete_scan_record(app, id)?,
        AppEvent::ScanRecordDeleted(id, message) => handle_scan_record_deleted(app, id, message)?,

        AppEvent::ReloadLibraries => handle_reload_libraries(app)?,
        AppEvent::LibrariesLoaded(libraries) => handle_libraries_loaded(app, libraries)?,
        AppEvent::LibrariesFailed(message) => handle_libraries_failed(app, message),
        AppEvent::SelectLibrary(key) => handle_select_library(app, key)?,
        AppEvent::LibraryLoaded(detail) => handle_library_loaded(app, *detail)?,
        AppEvent::LibraryContentLoaded { key, offset, page } => {
            handle_library_content_loaded(app, key, offset, page)
        }
        AppEvent::LibraryFailed(message) => handle_library_failed(app, message)?,
        AppEvent::LibraryContentFailed { key, message } => {
            handle_library_content_failed(app, key, message)
        }
        AppEvent::PageLibraryContent { key, offset } => {
            handle_page_library_content(app, key, offset)?
        }
        AppEvent::ScanLibrary { key, tracked } => handle_scan_library(app, key, tracked)?,

        AppEvent::ReloadSettings => handle_reload_settings(app)?,
        AppEvent::SettingsLoaded(snapshot) => handle_settings_loaded(app, *snapshot),
        AppEvent::TestConnection(config) => handle_test_connection(app, config)?,
        AppEvent::ConnectionTested(result) => handle_connection_tested(app, result),
        AppEvent::ConnectionTestFailed(message) => handle_connection_test_failed(app, message),
        AppEvent::SavePlexConfig(config) => handle_save_plex_config(app, config)?,

        AppEvent::Notice(message) => handle_notice(app, message),
        AppEvent::Error(message) => handle_error(app, message),

        AppEvent::Tick => handle_tick(app),
    }

    Ok(true)
}
