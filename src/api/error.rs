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

//! Error types for the backend API client.
//!
//! The client never classifies or recovers from failures, it only carries
//! them. Interpreting an error for display is left to the caller.

use reqwest::StatusCode;

/// Result type alias for API operations.
pub(crate) type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the backend.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (connect failure, timeout...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Request failed with status code {}", status.as_u16())]
    Status { status: StatusCode, body: String },

    /// The response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the structured `detail` string of an error response body, if
    /// the backend sent one.
    pub(crate) fn detail(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };

        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        match value.get("detail")? {
            serde_json::Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
            _ => None,
        }
    }
}
