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

//! Scan history modal.
//!
//! The modal manages its own fetch lifecycle, independent of the dashboard
//! it is opened from. The history can be narrowed to a single library by
//! key, the filter only takes effect once it is applied.

mod event;
mod render;

use ratatui::widgets::TableState;
use tui_input::Input;

use crate::{
    api::models::ScanHistoryPage,
    components::{next_index, previous_index},
    model::LoadState,
};

pub(crate) struct ScanHistoryView {
    pub(crate) is_open: bool,
    pub(crate) state: LoadState<ScanHistoryPage>,
    pub(crate) filter: Input,
    pub(crate) editing_filter: bool,
    pub(crate) applied_filter: Option<String>,
    pub(crate) table_state: TableState,
    /// A reload was asked for while a load was in flight.
    pub(crate) reload_pending: bool,
}

impl ScanHistoryView {
    pub(crate) fn new() -> Self {
        Self {
            is_open: false,
            state: LoadState::Idle,
            filter: Input::default(),
            editing_filter: false,
            applied_filter: None,
            table_state: TableState::default(),
            reload_pending: false,
        }
    }

    /// Opens the modal and starts a load.
    ///
    /// Returns `false` if a load is already in flight.
    pub(crate) fn open(&mut self) -> bool {
        self.is_open = true;
        self.begin_load()
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
        self.editing_filter = false;
        self.state = LoadState::Idle;
        self.table_state.select(None);
        self.reload_pending = false;
    }

    pub(crate) fn begin_load(&mut self) -> bool {
        let started = self.state.begin();
        if started {
            self.table_state.select(None);
        }
        started
    }

    /// Starts a reload, or queues one behind the load in flight.
    ///
    /// Returns `true` if a request should be sent now.
    pub(crate) fn request_reload(&mut self) -> bool {
        if self.begin_load() {
            return true;
        }
        self.reload_pending = true;
        false
    }

    /// Starts the reload queued by [`Self::request_reload`], if any.
    pub(crate) fn begin_pending_reload(&mut self) -> bool {
        std::mem::take(&mut self.reload_pending) && self.begin_load()
    }

    pub(crate) fn set_page(&mut self, page: ScanHistoryPage) {
        self.table_state
            .select((!page.scans.is_empty()).then_some(0));
        self.state = LoadState::Loaded(page);
    }

    pub(crate) fn set_failed(&mut self, message: String) {
        self.table_state.select(None);
        self.state = LoadState::Failed(message);
    }

    pub(crate) fn selected_record_id(&self) -> Option<i64> {
        let page = self.state.loaded()?;
        let index = self.table_state.selected()?;
        page.scans.get(index).map(|record| record.id)
    }

    fn record_count(&self) -> usize {
        self.state.loaded().map_or(0, |page| page.scans.len())
    }

    pub(crate) fn next_record(&mut self) {
        let i = next_index(self.table_state.selected(), self.record_count());
        self.table_state.select(i);
    }

    pub(crate) fn previous_record(&mut self) {
        let i = previous_index(self.table_state.selected(), self.record_count());
        self.table_state.select(i);
    }

    pub(crate) fn start_editing_filter(&mut self) {
        self.filter = Input::new(self.applied_filter.clone().unwrap_or_default());
        self.editing_filter = true;
    }

    /// Applies the edited filter, a blank filter clears it.
    pub(crate) fn apply_filter(&mut self) {
        let value = self.filter.value().trim();
        self.applied_filter = (!value.is_empty()).then(|| value.to_string());
        self.editing_filter = false;
    }

    pub(crate) fn cancel_filter(&mut self) {
        self.filter = Input::new(self.applied_filter.clone().unwrap_or_default());
        self.editing_filter = false;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::api::models::{ScanHistoryRecord, ScanStatus};

    pub(crate) fn record(id: i64, status: ScanStatus) -> ScanHistoryRecord {
        ScanHistoryRecord {
            id,
            library_key: "1".to_string(),
            library_name: "Movies".to_string(),
            library_type: "movie".to_string(),
            scan_type: "manual".to_string(),
            status,
            started_at: "2026-10-18T11:30:00Z".to_string(),
            completed_at: None,
            duration_seconds: Some(75.4),
            error_message: None,
        }
    }

    pub(crate) fn sample_page() -> ScanHistoryPage {
        ScanHistoryPage {
            scans: vec![
                record(7, ScanStatus::Completed),
                record(6, ScanStatus::Failed),
            ],
            total: 2,
        }
    }

    #[test]
    fn open_then_close() {
        let mut view = ScanHistoryView::new();

        assert!(view.open());
        assert!(view.is_open);
        assert!(view.state.is_loading());

        view.set_page(sample_page());
        assert_eq!(view.selected_record_id(), Some(7));

        view.close();
        assert!(!view.is_open);
        assert_eq!(view.state, LoadState::Idle);
        assert_eq!(view.selected_record_id(), None);
    }

    #[test]
    fn reload_during_load_is_queued() {
        let mut view = ScanHistoryView::new();
        assert!(view.open());

        assert!(!view.request_reload());
        assert!(view.reload_pending);

        view.set_page(sample_page());
        assert!(view.begin_pending_reload());
        assert!(view.state.is_loading());
        assert!(!view.reload_pending);
        assert!(!view.begin_pending_reload());
    }

    #[test]
    fn closing_forgets_a_queued_reload() {
        let mut view = ScanHistoryView::new();
        view.open();
        view.request_reload();

        view.close();

        assert!(!view.reload_pending);
    }

    #[test]
    fn selection_follows_navigation() {
        let mut view = ScanHistoryView::new();
        view.set_page(sample_page());

        view.next_record();
        assert_eq!(view.selected_record_id(), Some(6));
        view.previous_record();
        assert_eq!(view.selected_record_id(), Some(7));
    }

    #[test]
    fn filter_applies_trimmed_value() {
        let mut view = ScanHistoryView::new();

        view.start_editing_filter();
        view.filter = Input::new(" 3 ".to_string());
        view.apply_filter();
        assert_eq!(view.applied_filter.as_deref(), Some("3"));

        view.start_editing_filter();
        view.filter = Input::new("   ".to_string());
        view.apply_filter();
        assert_eq!(view.applied_filter, None);
    }

    #[test]
    fn cancelled_filter_keeps_previous_value() {
        let mut view = ScanHistoryView::new();
        view.applied_filter = Some("2".to_string());

        view.start_editing_filter();
        view.filter = Input::new("5".to_string());
        view.cancel_filter();

        assert!(!view.editing_filter);
        assert_eq!(view.applied_filter.as_deref(), Some("2"));
        assert_eq!(view.filter.value(), "2");
    }
}
