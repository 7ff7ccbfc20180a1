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

//! Key bindings for the scan history modal.
//!
//! While the modal is open it consumes every key, so nothing leaks through
//! to the view underneath.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::ScanHistoryView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for ScanHistoryView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.is_open {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(true);
        };

        if self.editing_filter {
            match key_event.code {
                KeyCode::Esc => self.cancel_filter(),
                KeyCode::Enter => {
                    self.apply_filter();
                    event_tx.send(AppEvent::ReloadScanHistory)?;
                }
                _ => {
                    self.filter.handle_event(&event);
                }
            }
            return Ok(true);
        }

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.next_record(),
            KeyCode::Char('k') | KeyCode::Up => self.previous_record(),

            KeyCode::Char('d') => {
                if let Some(id) = self.selected_record_id() {
                    event_tx.send(AppEvent::DeleteScanRecord(id))?;
                }
            }

            KeyCode::Char('/') => self.start_editing_filter(),
            KeyCode::Char('r') => event_tx.send(AppEvent::ReloadScanHistory)?,
            KeyCode::Esc | KeyCode::Char('h') => event_tx.send(AppEvent::CloseScanHistory)?,

            _ => {}
        }

        Ok(true)
    }
}
