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

//! Key bindings for the settings view.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    MainView,
    components::SettingsView,
    events::{AppEvent, AppEventProcessor},
};

const URL_REQUIRED: &str = "Enter the Plex server URL first";

impl AppEventProcessor for SettingsView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.editing {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter => self.editing = false,
                KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
                _ => {
                    self.focused_input().handle_event(&event);
                }
            }
            return Ok(true);
        }

        match key_event.code {
            KeyCode::Char('e') => self.editing = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),

            KeyCode::Char('t') => match self.entered_config() {
                Some(config) if !self.testing => {
                    self.testing = true;
                    event_tx.send(AppEvent::TestConnection(config))?;
                }
                Some(_) => {}
                None => event_tx.send(AppEvent::Error(URL_REQUIRED.to_string()))?,
            },

            KeyCode::Char('w') => match self.entered_config() {
                Some(config) => event_tx.send(AppEvent::SavePlexConfig(config))?,
                None => event_tx.send(AppEvent::Error(URL_REQUIRED.to_string()))?,
            },

            KeyCode::Char('r') => event_tx.send(AppEvent::ReloadSettings)?,
            KeyCode::Esc => event_tx.send(AppEvent::SetMainView(MainView::Dashboard))?,

            _ => return Ok(false),
        }

        Ok(true)
    }
}
