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

//! Backend REST API access.
//!
//! * [`client`]: the [`ApiClient`], one async method per endpoint.
//! * [`models`]: the records the backend sends and accepts.
//! * [`error`]: the raw failure kinds a request can produce.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod models;

pub(crate) use client::ApiClient;
pub(crate) use error::ApiError;
