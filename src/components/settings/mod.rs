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

//! Backend health and Plex connection settings.
//!
//! The three reads behind this view are independent: each one is shown, or
//! its own error is shown in its place.

mod event;
mod render;

use serde_json::Value;
use tui_input::Input;

use crate::{
    api::models::{ConnectionTest, PlexServerConfig, PlexServerInfo},
    model::LoadState,
};

/// Result of one settings load. Each part failed or succeeded on its own.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SettingsSnapshot {
    pub(crate) health: Result<Value, String>,
    pub(crate) config: Result<Value, String>,
    pub(crate) server: Result<PlexServerInfo, String>,
}

impl SettingsSnapshot {
    /// The saved Plex URL, if the backend reported one.
    pub(crate) fn saved_url(&self) -> Option<&str> {
        self.config
            .as_ref()
            .ok()?
            .get("url")?
            .as_str()
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingsField {
    Url,
    Token,
}

pub(crate) struct SettingsView {
    pub(crate) snapshot: LoadState<SettingsSnapshot>,
    pub(crate) url: Input,
    pub(crate) token: Input,
    pub(crate) focus: SettingsField,
    pub(crate) editing: bool,
    pub(crate) testing: bool,
    pub(crate) last_test: Option<ConnectionTest>,
}

impl SettingsView {
    pub(crate) fn new() -> Self {
        Self {
            snapshot: LoadState::Idle,
            url: Input::default(),
            token: Input::default(),
            focus: SettingsField::Url,
            editing: false,
            testing: false,
            last_test: None,
        }
    }

    pub(crate) fn begin_load(&mut self) -> bool {
        self.snapshot.begin()
    }

    /// Stores a loaded snapshot.
    ///
    /// The URL field is filled from the saved configuration unless the user
    /// has already typed something.
    pub(crate) fn set_snapshot(&mut self, snapshot: SettingsSnapshot) {
        if !self.editing && self.url.value().is_empty() {
            if let Some(url) = snapshot.saved_url() {
                self.url = Input::new(url.to_string());
            }
        }
        self.snapshot = LoadState::Loaded(snapshot);
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SettingsField::Url => SettingsField::Token,
            SettingsField::Token => SettingsField::Url,
        };
    }

    pub(crate) fn focused_input(&mut self) -> &mut Input {
        match self.focus {
            SettingsField::Url => &mut self.url,
            SettingsField::Token => &mut self.token,
        }
    }

    /// The connection settings as entered, `None` while the URL is blank.
    pub(crate) fn entered_config(&self) -> Option<PlexServerConfig> {
        let url = self.url.value().trim();
        if url.is_empty() {
            return None;
        }
        Some(PlexServerConfig {
            url: url.to_string(),
            token: self.token.value().trim().to_string(),
        })
    }

    pub(crate) fn set_test_result(&mut self, result: ConnectionTest) {
        self.testing = false;
        self.last_test = Some(result);
    }
}
