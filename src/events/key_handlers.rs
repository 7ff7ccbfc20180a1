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
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App, MainView,
    events::{AppEvent, AppEventProcessor},
};

/// Routes a key press.
///
/// Ctrl-C always exits. Otherwise an open scan history modal takes every key,
/// then the active view gets a chance, and whatever it leaves is matched
/// against the global bindings.
///
/// # Errors
///
/// Returns an error if an event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    if app.history_view.process_event(event.clone(), &app.event_tx)? {
        return Ok(());
    }

    let handled = match app.main_view {
        MainView::Dashboard => app.dashboard_view.process_event(event, &app.event_tx)?,
        MainView::Libraries => app.libraries_view.process_event(event, &app.event_tx)?,
        MainView::Settings => app.settings_view.process_event(event, &app.event_tx)?,
    };
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Dashboard))?,
        KeyCode::Char('2') => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Libraries))?,
        KeyCode::Char('3') => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Settings))?,

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc;

    use crate::config::AppConfig;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let (task_tx, _task_rx) = mpsc::channel();
        App::new(AppConfig::default(), task_tx)
    }

    #[test]
    fn open_modal_captures_quit() {
        let mut app = test_app();
        app.history_view.open();

        process_key_event(&mut app, press(KeyCode::Char('q'))).unwrap();

        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn control_c_exits_from_anywhere() {
        let mut app = test_app();
        app.history_view.open();

        process_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn number_keys_switch_views() {
        let mut app = test_app();

        process_key_event(&mut app, press(KeyCode::Char('3'))).unwrap();

        assert!(matches!(
            app.event_rx.try_recv(),
            Ok(AppEvent::SetMainView(MainView::Settings))
        ));
    }

    #[test]
    fn settings_editing_keeps_text_keys() {
        let mut app = test_app();
        app.main_view = MainView::Settings;
        app.settings_view.editing = true;

        process_key_event(&mut app, press(KeyCode::Char('q'))).unwrap();

        assert_eq!(app.settings_view.url.value(), "q");
        assert!(app.event_rx.try_recv().is_err());
    }
}
