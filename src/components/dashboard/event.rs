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

//! Key bindings for the dashboard view.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    MainView,
    components::DashboardView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for DashboardView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            // Refresh and retry are the same three-way load
            KeyCode::Char('r') => event_tx.send(AppEvent::RefreshDashboard)?,
            KeyCode::Char('h') => event_tx.send(AppEvent::OpenScanHistory)?,
            KeyCode::Char('l') => event_tx.send(AppEvent::SetMainView(MainView::Libraries))?,
            KeyCode::Char('s') => event_tx.send(AppEvent::SetMainView(MainView::Settings))?,

            KeyCode::Char('j') | KeyCode::Down => self.next_recent(),
            KeyCode::Char('k') | KeyCode::Up => self.previous_recent(),

            _ => return Ok(false),
        }

        Ok(true)
    }
}
