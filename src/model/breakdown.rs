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

//! Library breakdown tiles.

use crate::{api::models::TypeBreakdown, model::MediaKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BreakdownTile {
    pub(crate) label: &'static str,
    pub(crate) kind: MediaKind,
    pub(crate) count: u64,
}

/// Builds the tiles for the library breakdown panel.
///
/// Tiles come in a fixed order and a category with a zero count has no tile.
pub(crate) fn breakdown_tiles(by_type: &TypeBreakdown) -> Vec<BreakdownTile> {
    [
        ("Movies", MediaKind::Movie, by_type.movie),
        ("TV Shows", MediaKind::Show, by_type.show),
        ("Music", MediaKind::Music, by_type.artist),
        ("Photos", MediaKind::Photo, by_type.photo),
        ("Other", MediaKind::Other, by_type.other),
    ]
    .into_iter()
    .filter(|(_, _, count)| *count > 0)
    .map(|(label, kind, count)| BreakdownTile { label, kind, count })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(by_type: &TypeBreakdown) -> Vec<&'static str> {
        breakdown_tiles(by_type).iter().map(|t| t.label).collect()
    }

    #[test]
    fn zero_counts_are_omitted() {
        let by_type = TypeBreakdown {
            movie: 10,
            show: 0,
            artist: 4,
            photo: 0,
            other: 0,
        };

        assert_eq!(labels(&by_type), vec!["Movies", "Music"]);
    }

    #[test]
    fn all_categories_in_fixed_order() {
        let by_type = TypeBreakdown {
            movie: 1,
            show: 2,
            artist: 3,
            photo: 4,
            other: 5,
        };

        let tiles = breakdown_tiles(&by_type);
        assert_eq!(
            tiles.iter().map(|t| t.label).collect::<Vec<_>>(),
            vec!["Movies", "TV Shows", "Music", "Photos", "Other"]
        );
        assert_eq!(tiles[3].kind, MediaKind::Photo);
        assert_eq!(tiles[3].count, 4);
    }

    #[test]
    fn empty_breakdown_has_no_tiles() {
        assert!(breakdown_tiles(&TypeBreakdown::default()).is_empty());
    }
}
