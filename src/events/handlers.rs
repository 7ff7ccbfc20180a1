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

use anyhow::Result;
use tracing::debug;

use crate::{
    App, MainView, StatusMessage,
    api::models::{
        ConnectionTest, LibraryContentPage, PlexLibrary, PlexServerConfig, ScanHistoryPage,
    },
    components::{LibraryDetail, SettingsSnapshot},
    dashboard::DashboardSnapshot,
    events::AppEvent,
    tasks::AppTask,
};

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) -> Result<()> {
    match main_view {
        MainView::Dashboard => {}
        MainView::Libraries => {
            if app.libraries_view.needs_load() {
                app.event_tx.send(AppEvent::ReloadLibraries)?;
            }
        }
        MainView::Settings => app.event_tx.send(AppEvent::ReloadSettings)?,
    }
    app.main_view = main_view;

    Ok(())
}

pub(super) fn handle_refresh_dashboard(app: &mut App) -> Result<()> {
    if app.dashboard_view.begin_load() {
        app.task_tx.send(AppTask::LoadDashboard)?;
    } else {
        debug!("dashboard refresh ignored, load in flight");
    }

    Ok(())
}

pub(super) fn handle_dashboard_loaded(app: &mut App, snapshot: DashboardSnapshot) {
    app.dashboard_view.set_snapshot(snapshot);
}

pub(super) fn handle_dashboard_failed(app: &mut App, message: String) {
    app.dashboard_view.set_failed(message);
}

fn request_scan_history(app: &mut App) -> Result<()> {
    app.task_tx.send(AppTask::LoadScanHistory {
        library_key: app.history_view.applied_filter.clone(),
        limit: app.config.history_limit,
    })?;

    Ok(())
}

pub(super) fn handle_open_scan_history(app: &mut App) -> Result<()> {
    if app.history_view.open() {
        request_scan_history(app)?;
    }

    Ok(())
}

pub(super) fn handle_close_scan_history(app: &mut App) {
    app.history_view.close();
}

pub(super) fn handle_reload_scan_history(app: &mut App) -> Result<()> {
    if !app.history_view.is_open {
        return Ok(());
    }
    if app.history_view.request_reload() {
        request_scan_history(app)?;
    } else {
        debug!("scan history reload queued behind load in flight");
    }

    Ok(())
}

/// Sends the reload queued while the previous page was in flight, so a
/// filter applied or a record deleted meanwhile is reflected.
fn request_pending_scan_history(app: &mut App) -> Result<()> {
    if app.history_view.begin_pending_reload() {
        request_scan_history(app)?;
    }

    Ok(())
}

pub(super) fn handle_scan_history_loaded(app: &mut App, page: ScanHistoryPage) -> Result<()> {
    // The modal may have been closed while the page was in flight
    if app.history_view.is_open {
        app.history_view.set_page(page);
        request_pending_scan_history(app)?;
    }

    Ok(())
}

pub(super) fn handle_scan_history_failed(app: &mut App, message: String) -> Result<()> {
    if app.history_view.is_open {
        app.history_view.set_failed(message);
        request_pending_scan_history(app)?;
    }

    Ok(())
}

pub(super) fn handle_delete_scan_record(app: &mut App, id: i64) -> Result<()> {
    app.task_tx.send(AppTask::DeleteScanRecord(id))?;

    Ok(())
}

pub(super) fn handle_scan_record_deleted(app: &mut App, id: i64, message: String) -> Result<()> {
    debug!(id, "reloading scan history after delete");
    app.set_status(StatusMessage::Notice(message));
    app.event_tx.send(AppEvent::ReloadScanHistory)?;

    Ok(())
}

pub(super) fn handle_reload_libraries(app: &mut App) -> Result<()> {
    if app.libraries_view.begin_load() {
        app.task_tx.send(AppTask::LoadLibraries)?;
    }

    Ok(())
}

pub(super) fn handle_libraries_loaded(app: &mut App, libraries: Vec<PlexLibrary>) -> Result<()> {
    app.libraries_view.set_libraries(libraries);
    if let Some(library) = app.libraries_view.selected_library() {
        app.event_tx
            .send(AppEvent::SelectLibrary(library.key.clone()))?;
    }

    Ok(())
}

pub(super) fn handle_libraries_failed(app: &mut App, message: String) {
    app.libraries_view.set_libraries_failed(message);
}

pub(super) fn handle_select_library(app: &mut App, key: String) -> Result<()> {
    if app.libraries_view.select_detail(&key) {
        app.task_tx.send(AppTask::LoadLibrary(key))?;
    } else {
        debug!(%key, "library selection queued behind detail load");
    }

    Ok(())
}

pub(super) fn handle_library_loaded(app: &mut App, detail: LibraryDetail) -> Result<()> {
    let next = app
        .libraries_view
        .take_pending_selection(Some(detail.library.key.as_str()));
    app.libraries_view.set_detail(detail);
    if let Some(key) = next {
        handle_select_library(app, key)?;
    }

    Ok(())
}

pub(super) fn handle_library_content_loaded(
    app: &mut App,
    key: String,
    offset: u32,
    page: LibraryContentPage,
) {
    app.libraries_view.set_content_page(&key, offset, page);
}

pub(super) fn handle_library_failed(app: &mut App, message: String) -> Result<()> {
    let next = app.libraries_view.take_pending_selection(None);
    app.libraries_view.set_detail_failed(message);
    if let Some(key) = next {
        handle_select_library(app, key)?;
    }

    Ok(())
}

pub(super) fn handle_library_content_failed(app: &mut App, key: String, message: String) {
    if app.libraries_view.content_page_failed(&key) {
        app.set_status(StatusMessage::Error(message));
    } else {
        debug!(%key, "dropping content failure for library no longer shown");
    }
}

pub(super) fn handle_page_library_content(app: &mut App, key: String, offset: u32) -> Result<()> {
    if app.libraries_view.begin_page(&key) {
        app.task_tx.send(AppTask::LoadLibraryContent { key, offset })?;
    }

    Ok(())
}

pub(super) fn handle_scan_library(app: &mut App, key: String, tracked: bool) -> Result<()> {
    app.set_status(StatusMessage::Notice("Starting scan...".to_string()));
    app.task_tx.send(AppTask::ScanLibrary { key, tracked })?;

    Ok(())
}

pub(super) fn handle_reload_settings(app: &mut App) -> Result<()> {
    if app.settings_view.begin_load() {
        app.task_tx.send(AppTask::LoadSettings)?;
    }

    Ok(())
}

pub(super) fn handle_settings_loaded(app: &mut App, snapshot: SettingsSnapshot) {
    app.settings_view.set_snapshot(snapshot);
}

pub(super) fn handle_test_connection(app: &mut App, config: PlexServerConfig) -> Result<()> {
    app.settings_view.testing = true;
    app.task_tx.send(AppTask::TestConnection(config))?;

    Ok(())
}

pub(super) fn handle_connection_tested(app: &mut App, result: ConnectionTest) {
    app.settings_view.set_test_result(result);
}

pub(super) fn handle_connection_test_failed(app: &mut App, message: String) {
    app.settings_view.testing = false;
    app.set_status(StatusMessage::Error(message));
}

pub(super) fn handle_save_plex_config(app: &mut App, config: PlexServerConfig) -> Result<()> {
    app.task_tx.send(AppTask::SavePlexConfig(config))?;

    Ok(())
}

pub(super) fn handle_notice(app: &mut App, message: String) {
    app.set_status(StatusMessage::Notice(message));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.set_status(StatusMessage::Error(message));
}

pub(super) fn handle_tick(app: &mut App) {
    app.tick = app.tick.wrapping_add(1);
    app.expire_status();
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crate::{
        App, MainView, StatusMessage,
        api::models::PlexServerConfig,
        components::{history::tests::sample_page, libraries::tests::detail},
        config::AppConfig,
        dashboard::tests::sample_snapshot,
        events::{AppEvent, dispatch_event},
        model::LoadState,
        tasks::AppTask,
    };

    fn test_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let config = AppConfig {
            history_limit: 25,
            ..AppConfig::default()
        };
        (App::new(config, task_tx), task_rx)
    }

    /// Dispatches an event and everything it queues on the event channel.
    fn dispatch_all(app: &mut App, event: AppEvent) {
        assert!(dispatch_event(app, event).unwrap());
        while let Ok(next) = app.event_rx.try_recv() {
            assert!(dispatch_event(app, next).unwrap());
        }
    }

    #[test]
    fn refresh_while_loading_sends_one_task() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::RefreshDashboard);
        dispatch_all(&mut app, AppEvent::RefreshDashboard);

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadDashboard)));
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn retry_after_failure_reloads() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::RefreshDashboard);
        dispatch_all(&mut app, AppEvent::DashboardFailed("Plex offline".to_string()));
        assert_eq!(app.dashboard_view.state.error(), Some("Plex offline"));

        dispatch_all(&mut app, AppEvent::RefreshDashboard);

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadDashboard)));
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadDashboard)));
        assert!(app.dashboard_view.state.is_loading());
    }

    #[test]
    fn refresh_after_load_discards_snapshot() {
        let (mut app, _task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::DashboardLoaded(Box::new(sample_snapshot())));
        assert!(app.dashboard_view.state.loaded().is_some());

        dispatch_all(&mut app, AppEvent::RefreshDashboard);

        assert!(app.dashboard_view.state.loaded().is_none());
    }

    #[test]
    fn history_modal_opens_with_configured_limit() {
        let (mut app, task_rx) = test_app();
        app.history_view.applied_filter = Some("3".to_string());

        dispatch_all(&mut app, AppEvent::OpenScanHistory);

        assert!(app.history_view.is_open);
        assert!(app.history_view.state.is_loading());
        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::LoadScanHistory { library_key: Some(key), limit: 25 }) if key == "3"
        ));

        dispatch_all(&mut app, AppEvent::CloseScanHistory);
        assert!(!app.history_view.is_open);
    }

    #[test]
    fn late_page_after_close_is_dropped() {
        let (mut app, _task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::OpenScanHistory);
        dispatch_all(&mut app, AppEvent::CloseScanHistory);
        dispatch_all(&mut app, AppEvent::ScanHistoryLoaded(sample_page()));

        assert_eq!(app.history_view.state, LoadState::Idle);
    }

    #[test]
    fn delete_reloads_history() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::OpenScanHistory);
        dispatch_all(&mut app, AppEvent::ScanHistoryLoaded(sample_page()));
        let _ = task_rx.try_recv();

        dispatch_all(&mut app, AppEvent::DeleteScanRecord(7));
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::DeleteScanRecord(7))));

        dispatch_all(
            &mut app,
            AppEvent::ScanRecordDeleted(7, "Scan history record deleted".to_string()),
        );

        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::LoadScanHistory { limit: 25, .. })
        ));
        assert!(app.history_view.state.is_loading());
        assert_eq!(
            app.status.as_ref().map(|s| &s.message),
            Some(&StatusMessage::Notice("Scan history record deleted".to_string()))
        );
    }

    #[test]
    fn filter_applied_during_load_is_fetched_once_the_page_lands() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::OpenScanHistory);
        app.history_view.applied_filter = Some("3".to_string());
        dispatch_all(&mut app, AppEvent::ReloadScanHistory);

        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::LoadScanHistory { library_key: None, .. })
        ));
        assert!(task_rx.try_recv().is_err());

        dispatch_all(&mut app, AppEvent::ScanHistoryLoaded(sample_page()));

        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::LoadScanHistory { library_key: Some(key), limit: 25 }) if key == "3"
        ));
        assert!(app.history_view.state.is_loading());

        dispatch_all(&mut app, AppEvent::ScanHistoryLoaded(sample_page()));
        assert!(task_rx.try_recv().is_err());
        assert!(app.history_view.state.loaded().is_some());
    }

    #[test]
    fn reload_queued_behind_a_failed_load_still_runs() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::OpenScanHistory);
        dispatch_all(&mut app, AppEvent::ReloadScanHistory);
        let _ = task_rx.try_recv();

        dispatch_all(&mut app, AppEvent::ScanHistoryFailed("Plex offline".to_string()));

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadScanHistory { .. })));
        assert!(app.history_view.state.is_loading());
    }

    #[test]
    fn selecting_during_a_detail_load_loads_the_latest_selection() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::SelectLibrary("1".to_string()));
        dispatch_all(&mut app, AppEvent::SelectLibrary("2".to_string()));

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadLibrary(key)) if key == "1"));
        assert!(task_rx.try_recv().is_err());

        dispatch_all(&mut app, AppEvent::LibraryLoaded(Box::new(detail("1", false))));

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadLibrary(key)) if key == "2"));
        assert!(app.libraries_view.detail.is_loading());

        dispatch_all(&mut app, AppEvent::LibraryLoaded(Box::new(detail("2", false))));
        assert!(task_rx.try_recv().is_err());
        assert_eq!(
            app.libraries_view.detail.loaded().map(|d| d.library.key.as_str()),
            Some("2")
        );
    }

    #[test]
    fn selection_queued_behind_a_failed_detail_still_loads() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::SelectLibrary("1".to_string()));
        dispatch_all(&mut app, AppEvent::SelectLibrary("2".to_string()));
        let _ = task_rx.try_recv();

        dispatch_all(&mut app, AppEvent::LibraryFailed("Library not found".to_string()));

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadLibrary(key)) if key == "2"));
    }

    #[test]
    fn failed_content_page_keeps_the_detail() {
        let (mut app, task_rx) = test_app();
        app.libraries_view.set_detail(detail("2", true));

        dispatch_all(
            &mut app,
            AppEvent::PageLibraryContent {
                key: "2".to_string(),
                offset: 50,
            },
        );
        assert!(matches!(
            task_rx.try_recv(),
            Ok(AppTask::LoadLibraryContent { offset: 50, .. })
        ));

        dispatch_all(
            &mut app,
            AppEvent::LibraryContentFailed {
                key: "2".to_string(),
                message: "timeout".to_string(),
            },
        );

        assert_eq!(app.libraries_view.detail.loaded(), Some(&detail("2", true)));
        assert!(!app.libraries_view.paging);
        assert_eq!(
            app.status.as_ref().map(|s| &s.message),
            Some(&StatusMessage::Error("timeout".to_string()))
        );
    }

    #[test]
    fn failed_content_page_for_another_library_is_dropped() {
        let (mut app, _task_rx) = test_app();
        app.libraries_view.set_detail(detail("2", true));

        dispatch_all(
            &mut app,
            AppEvent::LibraryContentFailed {
                key: "1".to_string(),
                message: "timeout".to_string(),
            },
        );

        assert_eq!(app.libraries_view.detail.loaded(), Some(&detail("2", true)));
        assert!(app.status.is_none());
    }

    #[test]
    fn entering_libraries_loads_once() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::SetMainView(MainView::Libraries));
        dispatch_all(&mut app, AppEvent::LibrariesLoaded(vec![]));
        dispatch_all(&mut app, AppEvent::SetMainView(MainView::Dashboard));
        dispatch_all(&mut app, AppEvent::SetMainView(MainView::Libraries));

        assert_eq!(app.main_view, MainView::Libraries);
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadLibraries)));
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn entering_settings_reloads() {
        let (mut app, task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::SetMainView(MainView::Settings));

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadSettings)));
        assert!(app.settings_view.snapshot.is_loading());
    }

    #[test]
    fn errors_reach_the_status_bar() {
        let (mut app, _task_rx) = test_app();

        dispatch_all(&mut app, AppEvent::Error("Scan failed".to_string()));

        assert_eq!(
            app.status.as_ref().map(|s| &s.message),
            Some(&StatusMessage::Error("Scan failed".to_string()))
        );
    }

    #[test]
    fn unrelated_error_leaves_a_connection_test_running() {
        let (mut app, task_rx) = test_app();
        let config = PlexServerConfig {
            url: "http://plex.lan:32400".to_string(),
            token: String::new(),
        };

        dispatch_all(&mut app, AppEvent::TestConnection(config));
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::TestConnection(_))));

        dispatch_all(&mut app, AppEvent::Error("Scan failed".to_string()));
        assert!(app.settings_view.testing);

        dispatch_all(&mut app, AppEvent::ConnectionTestFailed("Invalid token".to_string()));
        assert!(!app.settings_view.testing);
        assert_eq!(
            app.status.as_ref().map(|s| &s.message),
            Some(&StatusMessage::Error("Invalid token".to_string()))
        );
    }

    #[test]
    fn fatal_error_ends_the_loop() {
        let (mut app, _task_rx) = test_app();

        assert!(dispatch_event(&mut app, AppEvent::FatalError("boom".to_string())).is_err());
        assert!(!dispatch_event(&mut app, AppEvent::ExitApplication).unwrap());
    }
}
