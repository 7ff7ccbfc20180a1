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

//! Unicode and Emoji symbols for the TUI.
//!
//! This module contains standardized icons used across the interface to
//! represent media types and system status. These are selected for
//! compatibility with most modern terminal emulators and fonts.

// Media types
pub(crate) const ICON_MOVIE: &str = "\u{1F3AC}";
pub(crate) const ICON_SHOW: &str = "\u{1F4FA}";
pub(crate) const ICON_MUSIC: &str = "\u{266B}";
pub(crate) const ICON_PHOTO: &str = "\u{1F5BC}";
pub(crate) const ICON_OTHER: &str = "\u{2630}";

// Text-style variants (using Variation Selector-15 [\u{FE0E}]), this forces
// terminals to render the icons as monochrome text rather than colorful
// emojis, ensuring they respect the TUI's color styling.
pub(crate) const ICON_CONNECTED: &str = "\u{2714}\u{FE0E}";
pub(crate) const ICON_DISCONNECTED: &str = "\u{2716}\u{FE0E}";
pub(crate) const ICON_SPEED: &str = "\u{26A1}\u{FE0E}";
pub(crate) const ICON_HISTORY: &str = "\u{231B}\u{FE0E}";
pub(crate) const ICON_REFRESH: &str = "\u{21BB}";
pub(crate) const ICON_SETTINGS: &str = "\u{2699}\u{FE0E}";

pub(crate) const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
