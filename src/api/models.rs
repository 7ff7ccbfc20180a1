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

//! Wire records exchanged with the backend.
//!
//! These are plain values built fresh from each response body. Timestamps are
//! kept as the strings the backend sent, they are only interpreted when
//! formatted for display.

use serde::{Deserialize, Serialize};

/// Connection details for a Plex server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlexServerConfig {
    pub(crate) url: String,
    pub(crate) token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ConnectionTest {
    pub(crate) success: bool,
    pub(crate) server_name: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) platform: Option<String>,
    pub(crate) error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct PlexServerInfo {
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) platform: String,
    pub(crate) platform_version: String,
    pub(crate) machine_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct PlexLibrary {
    pub(crate) key: String,
    pub(crate) title: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) agent: Option<String>,
    pub(crate) scanner: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) uuid: String,
    pub(crate) updated_at: Option<String>,
    pub(crate) created_at: Option<String>,
    pub(crate) scanned_at: Option<String>,
    pub(crate) total_items: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct LibraryList {
    pub(crate) libraries: Vec<PlexLibrary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct PlexMediaItem {
    pub(crate) key: String,
    pub(crate) title: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) year: Option<i32>,
    pub(crate) rating: Option<f64>,
    pub(crate) summary: Option<String>,
    pub(crate) thumb: Option<String>,
    pub(crate) art: Option<String>,
    pub(crate) duration: Option<u64>,
    pub(crate) added_at: Option<String>,
    pub(crate) updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct LibraryContentPage {
    pub(crate) items: Vec<PlexMediaItem>,
    pub(crate) total: u64,
    pub(crate) has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct LibraryStats {
    pub(crate) library_key: String,
    pub(crate) library_name: String,
    pub(crate) library_type: String,
    pub(crate) total_items: u64,
    pub(crate) total_duration_minutes: u64,
    pub(crate) recently_added_count: u64,
    pub(crate) last_scanned: Option<String>,
}

/// Acknowledgement returned by scan triggers and history deletion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ScanAck {
    pub(crate) status: String,
    pub(crate) message: String,
}

/// Acknowledgement of a scan that was recorded in the scan history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct TrackedScan {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) scan_id: i64,
    pub(crate) started_at: String,
    pub(crate) completed_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ScanStatus {
    Started,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ScanHistoryRecord {
    pub(crate) id: i64,
    pub(crate) library_key: String,
    pub(crate) library_name: String,
    pub(crate) library_type: String,
    pub(crate) scan_type: String,
    pub(crate) status: ScanStatus,
    pub(crate) started_at: String,
    pub(crate) completed_at: Option<String>,
    pub(crate) duration_seconds: Option<f64>,
    pub(crate) error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ScanHistoryPage {
    pub(crate) scans: Vec<ScanHistoryRecord>,
    pub(crate) total: u64,
}

/// Item counts per library type.
///
/// Buckets the backend leaves out are zero. The counts are not guaranteed to
/// add up to [`DashboardStats::total_items`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct TypeBreakdown {
    pub(crate) movie: u64,
    pub(crate) show: u64,
    pub(crate) artist: u64,
    pub(crate) photo: u64,
    pub(crate) other: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct DashboardStats {
    pub(crate) total_libraries: u64,
    pub(crate) total_items: u64,
    #[serde(default)]
    pub(crate) by_type: TypeBreakdown,
    pub(crate) last_scan: Option<String>,
    pub(crate) recent_scans: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RecentItem {
    pub(crate) title: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) library: String,
    pub(crate) added_at: Option<String>,
    pub(crate) year: Option<i32>,
    pub(crate) rating: Option<f64>,
    pub(crate) thumb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RecentItems {
    pub(crate) items: Vec<RecentItem>,
}

/// Reachability of the Plex server as seen by the backend.
///
/// Absent fields mean unknown, not zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ServerStatus {
    pub(crate) connected: bool,
    pub(crate) server_name: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) response_time_ms: Option<f64>,
    pub(crate) error: Option<String>,
}
