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

//! Key bindings for the library browser.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    MainView,
    components::LibrariesView,
    events::{AppEvent, AppEventProcessor},
};

impl LibrariesView {
    /// The library scans apply to: the one shown in detail, else the one
    /// selected in the list.
    fn scan_target(&self) -> Option<String> {
        self.detail
            .loaded()
            .map(|detail| detail.library.key.clone())
            .or_else(|| self.selected_library().map(|library| library.key.clone()))
    }
}

impl AppEventProcessor for LibrariesView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.next_library(),
            KeyCode::Char('k') | KeyCode::Up => self.previous_library(),

            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                if let Some(library) = self.selected_library() {
                    event_tx.send(AppEvent::SelectLibrary(library.key.clone()))?;
                }
            }

            KeyCode::Char('n') => {
                if let Some(detail) = self.detail.loaded() {
                    if let Some(offset) = detail.next_offset() {
                        let key = detail.library.key.clone();
                        event_tx.send(AppEvent::PageLibraryContent { key, offset })?;
                    }
                }
            }
            KeyCode::Char('p') => {
                if let Some(detail) = self.detail.loaded() {
                    if let Some(offset) = detail.previous_offset() {
                        let key = detail.library.key.clone();
                        event_tx.send(AppEvent::PageLibraryContent { key, offset })?;
                    }
                }
            }

            KeyCode::Char(c @ ('s' | 'S')) => {
                if let Some(key) = self.scan_target() {
                    let tracked = c == 's';
                    event_tx.send(AppEvent::ScanLibrary { key, tracked })?;
                }
            }

            KeyCode::Char('r') => event_tx.send(AppEvent::ReloadLibraries)?,
            KeyCode::Esc => event_tx.send(AppEvent::SetMainView(MainView::Dashboard))?,

            _ => return Ok(false),
        }

        Ok(true)
    }
}
