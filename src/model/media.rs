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

//! Media type classification.
//!
//! The backend reports media and library types as free-form strings. The UI
//! only distinguishes five treatments, each with a fixed icon and colour.

use ratatui::style::Color;

use crate::{
    render::icons::{ICON_MOVIE, ICON_MUSIC, ICON_OTHER, ICON_PHOTO, ICON_SHOW},
    theme::{MOVIE_COLOUR, MUSIC_COLOUR, OTHER_COLOUR, PHOTO_COLOUR, SHOW_COLOUR},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MediaKind {
    Movie,
    Show,
    Music,
    Photo,
    Other,
}

impl MediaKind {
    /// Maps a backend type string to its display treatment.
    ///
    /// Matching ignores case. Artists, albums and tracks share the music
    /// treatment, and anything unrecognised falls back to [`MediaKind::Other`].
    pub(crate) fn classify(kind: &str) -> Self {
        match kind.to_lowercase().as_str() {
            "movie" => MediaKind::Movie,
            "show" => MediaKind::Show,
            "artist" | "album" | "track" => MediaKind::Music,
            "photo" => MediaKind::Photo,
            _ => MediaKind::Other,
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            MediaKind::Movie => ICON_MOVIE,
            MediaKind::Show => ICON_SHOW,
            MediaKind::Music => ICON_MUSIC,
            MediaKind::Photo => ICON_PHOTO,
            MediaKind::Other => ICON_OTHER,
        }
    }

    pub(crate) fn colour(self) -> Color {
        match self {
            MediaKind::Movie => MOVIE_COLOUR,
            MediaKind::Show => SHOW_COLOUR,
            MediaKind::Music => MUSIC_COLOUR,
            MediaKind::Photo => PHOTO_COLOUR,
            MediaKind::Other => OTHER_COLOUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_ignores_case() {
        assert_eq!(MediaKind::classify("Movie"), MediaKind::Movie);
        assert_eq!(MediaKind::classify("SHOW"), MediaKind::Show);
        assert_eq!(MediaKind::classify("pHoTo"), MediaKind::Photo);
    }

    #[test]
    fn music_types_collapse() {
        for kind in ["artist", "album", "track", "Track"] {
            assert_eq!(MediaKind::classify(kind), MediaKind::Music);
        }
    }

    #[test]
    fn unknown_types_get_the_default_treatment() {
        for kind in ["episode", "", "clip", "movies"] {
            let treatment = MediaKind::classify(kind);
            assert_eq!(treatment, MediaKind::Other);
            assert_eq!(treatment.icon(), ICON_OTHER);
            assert_eq!(treatment.colour(), OTHER_COLOUR);
        }
    }

    #[test]
    fn every_treatment_has_a_distinct_colour() {
        let kinds = [
            MediaKind::Movie,
            MediaKind::Show,
            MediaKind::Music,
            MediaKind::Photo,
            MediaKind::Other,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.colour(), b.colour());
                assert_ne!(a.icon(), b.icon());
            }
        }
    }
}
