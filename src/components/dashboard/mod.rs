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

//! Dashboard landing view.
//!
//! Holds the [`DashboardState`] produced by the three-way dashboard load and
//! the scroll position of the recently added list.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::{next_index, previous_index},
    dashboard::{DashboardSnapshot, DashboardState},
};

pub(crate) struct DashboardView {
    pub(crate) state: DashboardState,
    pub(crate) recent_state: ListState,
}

impl DashboardView {
    pub(crate) fn new() -> Self {
        Self {
            state: DashboardState::Idle,
            recent_state: ListState::default(),
        }
    }

    /// Starts a refresh, or a retry after a failure.
    ///
    /// Returns `false` if a load is already in flight.
    pub(crate) fn begin_load(&mut self) -> bool {
        let started = self.state.begin();
        if started {
            self.recent_state.select(None);
        }
        started
    }

    pub(crate) fn set_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.recent_state
            .select((!snapshot.recent.is_empty()).then_some(0));
        self.state = DashboardState::Loaded(snapshot);
    }

    pub(crate) fn set_failed(&mut self, message: String) {
        self.recent_state.select(None);
        self.state = DashboardState::Failed(message);
    }

    fn recent_len(&self) -> usize {
        self.state.loaded().map_or(0, |s| s.recent.len())
    }

    pub(crate) fn next_recent(&mut self) {
        let i = next_index(self.recent_state.selected(), self.recent_len());
        self.recent_state.select(i);
    }

    pub(crate) fn previous_recent(&mut self) {
        let i = previous_index(self.recent_state.selected(), self.recent_len());
        self.recent_state.select(i);
    }
}
