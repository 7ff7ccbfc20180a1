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

//! Fetch lifecycle of a piece of remote data.

/// `Idle -> Loading -> Loaded | Failed`, and back to `Loading` on refresh or
/// retry.
///
/// There is no stale value: entering `Loading` or `Failed` drops whatever was
/// loaded before.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Moves to `Loading`, unless a load is already in flight.
    ///
    /// Returns `false` when the caller should not start another load.
    pub(crate) fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = LoadState::Loading;
        true
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub(crate) fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
