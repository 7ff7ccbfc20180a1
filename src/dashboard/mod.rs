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

//! Dashboard snapshot aggregation.
//!
//! The dashboard shows three independent backend reads as one consistent
//! snapshot. The reads run concurrently and the snapshot only exists when all
//! three succeed: a single failure fails the whole load and none of the other
//! results are kept.
//!
//! This is also the only place where an [`ApiError`] is turned into a message
//! for the user, see [`describe_error`].

use async_trait::async_trait;

use crate::api::{
    ApiClient, ApiError,
    error::Result,
    models::{DashboardStats, RecentItem, RecentItems, ServerStatus},
};
use crate::model::LoadState;

/// Message shown when a failure carries nothing more useful.
pub(crate) const FALLBACK_ERROR: &str = "Failed to load dashboard data";

/// The three dashboard reads, abstracted so the load can be exercised without
/// a backend.
#[async_trait]
pub(crate) trait DashboardSource {
    async fn dashboard_stats(&self) -> Result<DashboardStats>;
    async fn recent_items(&self) -> Result<RecentItems>;
    async fn server_status(&self) -> Result<ServerStatus>;
}

#[async_trait]
impl DashboardSource for ApiClient {
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        ApiClient::dashboard_stats(self).await
    }

    async fn recent_items(&self) -> Result<RecentItems> {
        ApiClient::recent_items(self).await
    }

    async fn server_status(&self) -> Result<ServerStatus> {
        ApiClient::server_status(self).await
    }
}

/// The merged result of one successful dashboard load.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DashboardSnapshot {
    pub(crate) stats: DashboardStats,
    pub(crate) recent: Vec<RecentItem>,
    pub(crate) status: ServerStatus,
}

/// Lifecycle of the dashboard data.
pub(crate) type DashboardState = LoadState<DashboardSnapshot>;

/// Runs the three dashboard reads concurrently.
///
/// Fails fast with whichever error surfaces first.
pub(crate) async fn load_snapshot<S>(source: &S) -> Result<DashboardSnapshot>
where
    S: DashboardSource + Sync + ?Sized,
{
    let (stats, recent, status) = tokio::try_join!(
        source.dashboard_stats(),
        source.recent_items(),
        source.server_status(),
    )?;

    Ok(DashboardSnapshot {
        stats,
        recent: recent.items,
        status,
    })
}

/// Derives the single message shown for a failed load.
///
/// In order of preference: the backend's structured `detail`, the error's own
/// message, then [`FALLBACK_ERROR`].
pub(crate) fn describe_error(err: &ApiError) -> String {
    if let Some(detail) = err.detail() {
        return detail;
    }

    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use reqwest::StatusCode;

    use crate::api::models::TypeBreakdown;

    pub(crate) fn sample_stats() -> DashboardStats {
        DashboardStats {
            total_libraries: 2,
            total_items: 1500,
            by_type: TypeBreakdown {
                movie: 1200,
                show: 300,
                ..TypeBreakdown::default()
            },
            last_scan: None,
            recent_scans: 1,
        }
    }

    pub(crate) fn sample_recent() -> Vec<RecentItem> {
        vec![
            RecentItem {
                title: "Dune: Part Two".to_string(),
                kind: "movie".to_string(),
                library: "Movies".to_string(),
                added_at: Some("2026-10-18T11:00:00Z".to_string()),
                year: Some(2024),
                rating: Some(8.6),
                thumb: None,
            },
            RecentItem {
                title: "Severance".to_string(),
                kind: "show".to_string(),
                library: "TV Shows".to_string(),
                added_at: None,
                year: None,
                rating: None,
                thumb: None,
            },
        ]
    }

    pub(crate) fn sample_status() -> ServerStatus {
        ServerStatus {
            connected: true,
            server_name: Some("Basement".to_string()),
            version: Some("1.41.0".to_string()),
            response_time_ms: Some(12.5),
            error: None,
        }
    }

    pub(crate) fn sample_snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            stats: sample_stats(),
            recent: sample_recent(),
            status: sample_status(),
        }
    }

    #[derive(Default)]
    struct FakeSource {
        fail_stats: bool,
        fail_recent: bool,
        fail_status: bool,
        calls: AtomicUsize,
    }

    fn backend_error(detail: &str) -> ApiError {
        ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: format!(r#"{{"detail": "{detail}"}}"#),
        }
    }

    #[async_trait]
    impl DashboardSource for FakeSource {
        async fn dashboard_stats(&self) -> Result<DashboardStats> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_stats {
                return Err(backend_error("stats unavailable"));
            }
            Ok(sample_stats())
        }

        async fn recent_items(&self) -> Result<RecentItems> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_recent {
                return Err(backend_error("recent unavailable"));
            }
            Ok(RecentItems {
                items: sample_recent(),
            })
        }

        async fn server_status(&self) -> Result<ServerStatus> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_status {
                return Err(backend_error("status unavailable"));
            }
            Ok(sample_status())
        }
    }

    #[tokio::test]
    async fn all_reads_succeeding_yield_the_records_verbatim() {
        let source = FakeSource::default();

        let snapshot = load_snapshot(&source).await.unwrap();

        assert_eq!(snapshot, sample_snapshot());
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn any_single_failure_fails_the_whole_load() {
        let cases = [
            (
                FakeSource {
                    fail_stats: true,
                    ..FakeSource::default()
                },
                "stats unavailable",
            ),
            (
                FakeSource {
                    fail_recent: true,
                    ..FakeSource::default()
                },
                "recent unavailable",
            ),
            (
                FakeSource {
                    fail_status: true,
                    ..FakeSource::default()
                },
                "status unavailable",
            ),
        ];

        for (source, expected) in cases {
            let err = load_snapshot(&source).await.unwrap_err();
            assert_eq!(describe_error(&err), expected);
        }
    }

    #[test]
    fn error_message_prefers_detail_then_message() {
        assert_eq!(describe_error(&backend_error("Plex offline")), "Plex offline");

        let without_detail = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(
            describe_error(&without_detail),
            "Request failed with status code 502"
        );
    }

    #[test]
    fn error_without_detail_uses_its_own_message() {
        let decode = ApiError::Decode(serde_json::from_str::<u32>("not json").unwrap_err());
        let message = describe_error(&decode);

        assert_eq!(message, decode.to_string());
        assert!(message.starts_with("Invalid response body"));
    }

    #[test]
    fn refresh_after_load_drops_the_previous_snapshot() {
        let mut state = DashboardState::Loaded(sample_snapshot());

        assert!(state.begin());
        assert!(state.loaded().is_none());

        state = DashboardState::Failed(FALLBACK_ERROR.to_string());
        assert!(state.loaded().is_none());
        assert_eq!(state.error(), Some(FALLBACK_ERROR));
    }
}
