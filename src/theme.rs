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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

// Media type colours
pub(crate) const MOVIE_COLOUR: Color = Color::Rgb(229, 9, 20);
pub(crate) const SHOW_COLOUR: Color = Color::Rgb(33, 150, 243);
pub(crate) const MUSIC_COLOUR: Color = Color::Rgb(76, 175, 80);
pub(crate) const PHOTO_COLOUR: Color = Color::Rgb(255, 152, 0);
pub(crate) const OTHER_COLOUR: Color = Color::Rgb(117, 117, 117);

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) panel_colour: Color,
    pub(crate) muted_fg: Color,
    pub(crate) text_fg: Color,

    pub(crate) success_fg: Color,
    pub(crate) success_bg: Color,
    pub(crate) error_fg: Color,
    pub(crate) error_bg: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) status_bar_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 24, 28),
            accent_colour: Color::Rgb(229, 160, 13),
            border_colour: Color::Rgb(102, 102, 102),
            panel_colour: Color::Rgb(36, 36, 42),
            muted_fg: Color::Rgb(162, 161, 166),
            text_fg: Color::Rgb(255, 255, 255),

            success_fg: Color::Rgb(129, 199, 132),
            success_bg: Color::Rgb(20, 48, 24),
            error_fg: Color::Rgb(239, 83, 80),
            error_bg: Color::Rgb(60, 20, 20),

            highlight_bg: Color::Rgb(55, 55, 70),
            status_bar_bg: Color::Rgb(44, 44, 52),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_colours_render_as_hex() {
        assert_eq!(Theme::to_hex(MOVIE_COLOUR), "#e50914");
        assert_eq!(Theme::to_hex(SHOW_COLOUR), "#2196f3");
        assert_eq!(Theme::to_hex(MUSIC_COLOUR), "#4caf50");
        assert_eq!(Theme::to_hex(PHOTO_COLOUR), "#ff9800");
        assert_eq!(Theme::to_hex(OTHER_COLOUR), "#757575");
    }
}
