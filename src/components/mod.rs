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

//! Screen components.
//!
//! Each view owns the state it renders and implements
//! [`AppEventProcessor`](crate::events::AppEventProcessor) for its own keys:
//!
//! * [`DashboardView`]: the landing screen.
//! * [`ScanHistoryView`]: the scan history modal opened from the dashboard.
//! * [`LibrariesView`]: library list, detail and content paging.
//! * [`SettingsView`]: backend health and the Plex connection settings.

pub(crate) mod dashboard;
pub(crate) mod history;
pub(crate) mod libraries;
pub(crate) mod settings;

pub(crate) use dashboard::DashboardView;
pub(crate) use history::ScanHistoryView;
pub(crate) use libraries::{LibrariesView, LibraryDetail};
pub(crate) use settings::{SettingsSnapshot, SettingsView};

/// Moves a selection one row down, wrapping to the first row.
pub(crate) fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    })
}

/// Moves a selection one row up, wrapping to the last row.
pub(crate) fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    })
}
