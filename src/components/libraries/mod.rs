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

//! Library browser.
//!
//! Lists the Plex libraries on the left, and the detail of the selected
//! library on the right: its metadata, its statistics and one page of its
//! content. Content is paged by offset in pages of [`CONTENT_PAGE_SIZE`].

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    api::models::{LibraryContentPage, LibraryStats, PlexLibrary},
    components::{next_index, previous_index},
    model::LoadState,
};

pub(crate) const CONTENT_PAGE_SIZE: u32 = 50;

/// Everything shown for the selected library, loaded together.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LibraryDetail {
    pub(crate) library: PlexLibrary,
    pub(crate) stats: LibraryStats,
    pub(crate) content: LibraryContentPage,
    /// Offset of the first item in `content`.
    pub(crate) offset: u32,
}

impl LibraryDetail {
    pub(crate) fn next_offset(&self) -> Option<u32> {
        self.content
            .has_more
            .then(|| self.offset + CONTENT_PAGE_SIZE)
    }

    pub(crate) fn previous_offset(&self) -> Option<u32> {
        (self.offset > 0).then(|| self.offset.saturating_sub(CONTENT_PAGE_SIZE))
    }
}

pub(crate) struct LibrariesView {
    pub(crate) libraries: LoadState<Vec<PlexLibrary>>,
    pub(crate) list_state: ListState,
    pub(crate) detail: LoadState<LibraryDetail>,
    /// A content page request is in flight for the loaded detail.
    pub(crate) paging: bool,
    /// Latest library selected while a detail load was in flight.
    pub(crate) pending_selection: Option<String>,
}

impl LibrariesView {
    pub(crate) fn new() -> Self {
        Self {
            libraries: LoadState::Idle,
            list_state: ListState::default(),
            detail: LoadState::Idle,
            paging: false,
            pending_selection: None,
        }
    }

    /// True when the library list has never loaded, or failed to.
    pub(crate) fn needs_load(&self) -> bool {
        matches!(self.libraries, LoadState::Idle | LoadState::Failed(_))
    }

    pub(crate) fn begin_load(&mut self) -> bool {
        let started = self.libraries.begin();
        if started {
            self.list_state.select(None);
            self.detail = LoadState::Idle;
            self.paging = false;
            self.pending_selection = None;
        }
        started
    }

    pub(crate) fn set_libraries(&mut self, libraries: Vec<PlexLibrary>) {
        self.list_state
            .select((!libraries.is_empty()).then_some(0));
        self.libraries = LoadState::Loaded(libraries);
    }

    pub(crate) fn set_libraries_failed(&mut self, message: String) {
        self.list_state.select(None);
        self.libraries = LoadState::Failed(message);
    }

    pub(crate) fn selected_library(&self) -> Option<&PlexLibrary> {
        let libraries = self.libraries.loaded()?;
        libraries.get(self.list_state.selected()?)
    }

    fn library_count(&self) -> usize {
        self.libraries.loaded().map_or(0, Vec::len)
    }

    pub(crate) fn next_library(&mut self) {
        let i = next_index(self.list_state.selected(), self.library_count());
        self.list_state.select(i);
    }

    pub(crate) fn previous_library(&mut self) {
        let i = previous_index(self.list_state.selected(), self.library_count());
        self.list_state.select(i);
    }

    pub(crate) fn begin_load_detail(&mut self) -> bool {
        let started = self.detail.begin();
        if started {
            self.paging = false;
        }
        started
    }

    /// Starts loading the detail for `key`.
    ///
    /// While another detail is loading the key is queued instead, replacing
    /// any earlier queued key. Returns `true` if a request should be sent now.
    pub(crate) fn select_detail(&mut self, key: &str) -> bool {
        if self.begin_load_detail() {
            self.pending_selection = None;
            return true;
        }
        self.pending_selection = Some(key.to_string());
        false
    }

    /// Takes the queued selection, unless it is the library that just
    /// finished loading.
    pub(crate) fn take_pending_selection(&mut self, loaded_key: Option<&str>) -> Option<String> {
        self.pending_selection
            .take()
            .filter(|key| Some(key.as_str()) != loaded_key)
    }

    pub(crate) fn set_detail(&mut self, detail: LibraryDetail) {
        self.paging = false;
        self.detail = LoadState::Loaded(detail);
    }

    pub(crate) fn set_detail_failed(&mut self, message: String) {
        self.paging = false;
        self.detail = LoadState::Failed(message);
    }

    /// Marks a content page request as started.
    ///
    /// Returns `false` if there is no loaded detail for `key`, or a page
    /// request is already in flight.
    pub(crate) fn begin_page(&mut self, key: &str) -> bool {
        let matches = self
            .detail
            .loaded()
            .is_some_and(|detail| detail.library.key == key);
        if !matches || self.paging {
            return false;
        }
        self.paging = true;
        true
    }

    /// Replaces the content page of the loaded detail.
    ///
    /// A page for a library that is no longer shown is dropped.
    pub(crate) fn set_content_page(&mut self, key: &str, offset: u32, page: LibraryContentPage) {
        if let Some(detail) = self.shown_detail_mut(key) {
            detail.content = page;
            detail.offset = offset;
            self.paging = false;
        }
    }

    /// Ends a failed content page request, keeping the page already shown.
    ///
    /// Returns `false` if the page was for a library that is no longer shown.
    pub(crate) fn content_page_failed(&mut self, key: &str) -> bool {
        let shown = self.shown_detail_mut(key).is_some();
        if shown {
            self.paging = false;
        }
        shown
    }

    fn shown_detail_mut(&mut self, key: &str) -> Option<&mut LibraryDetail> {
        self.detail
            .loaded_mut()
            .filter(|detail| detail.library.key == key)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::api::models::PlexMediaItem;

    pub(crate) fn library(key: &str, title: &str, kind: &str) -> PlexLibrary {
        PlexLibrary {
            key: key.to_string(),
            title: title.to_string(),
            kind: kind.to_string(),
            agent: None,
            scanner: None,
            language: Some("en".to_string()),
            uuid: format!("uuid-{key}"),
            updated_at: None,
            created_at: None,
            scanned_at: Some("2026-10-18T10:00:00Z".to_string()),
            total_items: 120,
        }
    }

    pub(crate) fn item(title: &str) -> PlexMediaItem {
        PlexMediaItem {
            key: format!("/library/metadata/{title}"),
            title: title.to_string(),
            kind: "movie".to_string(),
            year: Some(1999),
            rating: Some(7.5),
            summary: None,
            thumb: None,
            art: None,
            duration: Some(8_160_000),
            added_at: None,
            updated_at: None,
        }
    }

    pub(crate) fn detail(key: &str, has_more: bool) -> LibraryDetail {
        LibraryDetail {
            library: library(key, "Movies", "movie"),
            stats: LibraryStats {
                library_key: key.to_string(),
                library_name: "Movies".to_string(),
                library_type: "movie".to_string(),
                total_items: 120,
                total_duration_minutes: 14_400,
                recently_added_count: 3,
                last_scanned: None,
            },
            content: LibraryContentPage {
                items: vec![item("The Matrix")],
                total: 120,
                has_more,
            },
            offset: 0,
        }
    }

    #[test]
    fn paging_offsets() {
        let mut detail = detail("1", true);
        assert_eq!(detail.next_offset(), Some(50));
        assert_eq!(detail.previous_offset(), None);

        detail.offset = 100;
        detail.content.has_more = false;
        assert_eq!(detail.next_offset(), None);
        assert_eq!(detail.previous_offset(), Some(50));
    }

    #[test]
    fn stale_content_page_is_dropped() {
        let mut view = LibrariesView::new();
        view.set_detail(detail("1", true));

        assert!(view.begin_page("1"));
        assert!(!view.begin_page("1"));

        let page = LibraryContentPage {
            items: vec![item("Heat")],
            total: 120,
            has_more: true,
        };
        view.set_content_page("2", 50, page.clone());
        assert_eq!(view.detail.loaded().unwrap().offset, 0);

        view.set_content_page("1", 50, page);
        let detail = view.detail.loaded().unwrap();
        assert_eq!(detail.offset, 50);
        assert_eq!(detail.content.items[0].title, "Heat");
        assert!(!view.paging);
    }

    #[test]
    fn failed_page_keeps_the_shown_detail() {
        let mut view = LibrariesView::new();
        view.set_detail(detail("2", true));
        assert!(view.begin_page("2"));

        assert!(!view.content_page_failed("1"));
        assert!(view.paging);

        assert!(view.content_page_failed("2"));
        assert!(!view.paging);
        assert_eq!(view.detail.loaded(), Some(&detail("2", true)));
    }

    #[test]
    fn selection_during_detail_load_is_queued() {
        let mut view = LibrariesView::new();

        assert!(view.select_detail("1"));
        assert!(!view.select_detail("2"));
        assert!(!view.select_detail("3"));
        assert_eq!(view.pending_selection.as_deref(), Some("3"));

        view.set_detail(detail("1", false));
        assert_eq!(view.take_pending_selection(Some("1")).as_deref(), Some("3"));
        assert_eq!(view.pending_selection, None);
    }

    #[test]
    fn queued_selection_of_the_loaded_library_is_skipped() {
        let mut view = LibrariesView::new();
        view.select_detail("1");
        view.select_detail("1");

        assert_eq!(view.take_pending_selection(Some("1")), None);
    }

    #[test]
    fn reloading_the_list_clears_the_detail() {
        let mut view = LibrariesView::new();
        assert!(view.needs_load());

        view.set_libraries(vec![library("1", "Movies", "movie")]);
        view.set_detail(detail("1", false));
        assert!(!view.needs_load());

        view.pending_selection = Some("2".to_string());

        assert!(view.begin_load());
        assert_eq!(view.detail, LoadState::Idle);
        assert!(view.selected_library().is_none());
        assert_eq!(view.pending_selection, None);
    }
}
