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

//! Display-side domain models.
//!
//! This module holds the lookups and derived values the views build from the
//! backend records, such as the media type treatments and the library
//! breakdown tiles, and the lifecycle every fetched value goes through.

mod breakdown;
mod load;
mod media;

pub(crate) use breakdown::breakdown_tiles;
pub(crate) use load::LoadState;
pub(crate) use media::MediaKind;
