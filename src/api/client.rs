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

//! HTTP client for the Plex Toolbox backend.
//!
//! Each method maps to exactly one backend endpoint and issues exactly one
//! request. Responses are deserialized and returned as-is; failures are
//! propagated without retry.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::api::{
    error::{ApiError, Result},
    models::{
        ConnectionTest, DashboardStats, LibraryContentPage, LibraryList, LibraryStats,
        PlexLibrary, PlexServerConfig, PlexServerInfo, RecentItems, ScanAck, ScanHistoryPage,
        ServerStatus, TrackedScan,
    },
};

/// Base URL used when nothing else is configured.
pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Timeout applied to every request.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// The URL is normalised once here: surrounding whitespace and trailing
    /// slashes are removed, and `http://` is assumed when no scheme is given.
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Client)?;

        let base_url = normalize_base_url(base_url);
        info!(%base_url, "created API client");

        Ok(Self { client, base_url })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    // Health

    pub(crate) async fn health(&self) -> Result<serde_json::Value> {
        self.send(self.request(Method::GET, "/health")).await
    }

    // Plex connection

    pub(crate) async fn test_connection(&self, config: &PlexServerConfig) -> Result<ConnectionTest> {
        self.send(self.request(Method::POST, "/plex/test-connection").json(config))
            .await
    }

    pub(crate) async fn save_plex_config(
        &self,
        config: &PlexServerConfig,
    ) -> Result<serde_json::Value> {
        self.send(self.request(Method::POST, "/plex/config").json(config))
            .await
    }

    pub(crate) async fn plex_config(&self) -> Result<serde_json::Value> {
        self.send(self.request(Method::GET, "/plex/config")).await
    }

    pub(crate) async fn server_info(&self) -> Result<PlexServerInfo> {
        self.send(self.request(Method::GET, "/plex/server-info"))
            .await
    }

    // Libraries

    pub(crate) async fn libraries(&self) -> Result<Vec<PlexLibrary>> {
        let list: LibraryList = self
            .send(self.request(Method::GET, "/plex/libraries"))
            .await?;
        Ok(list.libraries)
    }

    pub(crate) async fn library(&self, key: &str) -> Result<PlexLibrary> {
        let path = format!("/library/libraries/{key}");
        self.send(self.request(Method::GET, &path)).await
    }

    pub(crate) async fn library_content(
        &self,
        key: &str,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryContentPage> {
        let path = format!("/library/libraries/{key}/content");
        let request = self
            .request(Method::GET, &path)
            .query(&[("limit", limit), ("offset", offset)]);
        self.send(request).await
    }

    pub(crate) async fn library_stats(&self, key: &str) -> Result<LibraryStats> {
        let path = format!("/library/libraries/{key}/stats");
        self.send(self.request(Method::GET, &path)).await
    }

    /// Asks the Plex server to scan a library without recording it in the
    /// scan history.
    pub(crate) async fn scan_library(&self, key: &str) -> Result<ScanAck> {
        let path = format!("/plex/libraries/{key}/scan");
        self.send(self.request(Method::POST, &path)).await
    }

    // Scan history

    pub(crate) async fn scan_history(
        &self,
        library_key: Option<&str>,
        limit: u32,
    ) -> Result<ScanHistoryPage> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(key) = library_key {
            query.push(("library_key", key.to_string()));
        }

        let request = self
            .request(Method::GET, "/scan/scan-history")
            .query(&query);
        self.send(request).await
    }

    pub(crate) async fn delete_scan_history(&self, scan_id: i64) -> Result<ScanAck> {
        let path = format!("/scan/scan-history/{scan_id}");
        self.send(self.request(Method::DELETE, &path)).await
    }

    /// Scans a library and records the scan in the history.
    pub(crate) async fn scan_library_tracked(&self, key: &str) -> Result<TrackedScan> {
        let path = format!("/scan/libraries/{key}/scan");
        self.send(self.request(Method::POST, &path)).await
    }

    // Dashboard

    pub(crate) async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.send(self.request(Method::GET, "/dashboard/stats"))
            .await
    }

    pub(crate) async fn recent_items(&self) -> Result<RecentItems> {
        self.send(self.request(Method::GET, "/dashboard/recent"))
            .await
    }

    pub(crate) async fn server_status(&self) -> Result<ServerStatus> {
        self.send(self.request(Method::GET, "/dashboard/server-status"))
            .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        debug!(%url, status = status.as_u16(), bytes = body.len(), "backend response");

        if !status.is_success() {
            return Err(ApiError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path, query_param, query_param_is_missing},
    };

    use crate::api::models::ScanStatus;

    async fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&format!("{}/api/", server.uri())).unwrap()
    }

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(normalize_base_url("localhost:8000/api/"), "http://localhost:8000/api");
        assert_eq!(normalize_base_url(" https://plex.lan/api "), "https://plex.lan/api");
        assert_eq!(normalize_base_url(DEFAULT_API_URL), DEFAULT_API_URL);
    }

    #[tokio::test]
    async fn dashboard_stats_are_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_libraries": 3,
                "total_items": 1523,
                "by_type": {"movie": 1200, "show": 300, "artist": 23, "photo": 0, "other": 0},
                "last_scan": "2026-10-18T09:00:00",
                "recent_scans": 4
            })))
            .expect(1)
            .mount(&server)
            .await;

        let stats = client_for(&server).await.dashboard_stats().await.unwrap();

        assert_eq!(stats.total_libraries, 3);
        assert_eq!(stats.total_items, 1523);
        assert_eq!(stats.by_type.artist, 23);
        assert_eq!(stats.last_scan.as_deref(), Some("2026-10-18T09:00:00"));
        assert_eq!(stats.recent_scans, 4);
    }

    #[tokio::test]
    async fn scan_history_sends_limit_and_optional_library() {
        let server = MockServer::start().await;
        let page = json!({
            "scans": [{
                "id": 12, "library_key": "2", "library_name": "Shows",
                "library_type": "show", "scan_type": "manual", "status": "completed",
                "started_at": "2026-10-18T08:00:00", "completed_at": "2026-10-18T08:01:00",
                "duration_seconds": 60.5
            }],
            "total": 1
        });

        Mock::given(method("GET"))
            .and(path("/api/scan/scan-history"))
            .and(query_param("limit", "50"))
            .and(query_param("library_key", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/scan/scan-history"))
            .and(query_param("limit", "10"))
            .and(query_param_is_missing("library_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"scans": [], "total": 0})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        let filtered = client.scan_history(Some("2"), 50).await.unwrap();
        assert_eq!(filtered.total, 1);
        assert_eq!(filtered.scans[0].status, ScanStatus::Completed);
        assert_eq!(filtered.scans[0].duration_seconds, Some(60.5));

        let all = client.scan_history(None, 10).await.unwrap();
        assert!(all.scans.is_empty());
    }

    #[tokio::test]
    async fn library_content_passes_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/library/libraries/7/content"))
            .and(query_param("limit", "50"))
            .and(query_param("offset", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"key": "/library/metadata/9", "title": "Alien", "type": "movie", "year": 1979}],
                "total": 151,
                "has_more": true
            })))
            .mount(&server)
            .await;

        let page = client_for(&server)
            .await
            .library_content("7", 50, 100)
            .await
            .unwrap();

        assert_eq!(page.items[0].title, "Alien");
        assert_eq!(page.items[0].year, Some(1979));
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn libraries_are_unwrapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/plex/libraries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "libraries": [{"key": "1", "title": "Movies", "type": "movie", "uuid": "abc", "total_items": 10}]
            })))
            .mount(&server)
            .await;

        let libraries = client_for(&server).await.libraries().await.unwrap();

        assert_eq!(libraries.len(), 1);
        assert_eq!(libraries[0].kind, "movie");
        assert_eq!(libraries[0].agent, None);
    }

    #[tokio::test]
    async fn connection_test_posts_config() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/plex/test-connection"))
            .and(body_json(json!({"url": "http://plex:32400", "token": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "server_name": "Basement", "version": "1.40", "platform": "Linux"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = PlexServerConfig {
            url: "http://plex:32400".to_string(),
            token: "secret".to_string(),
        };
        let result = client_for(&server).await.test_connection(&config).await.unwrap();

        assert!(result.success);
        assert_eq!(result.server_name.as_deref(), Some("Basement"));
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn delete_and_tracked_scan_use_their_paths() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/scan/scan-history/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success", "message": "Scan history 42 deleted"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/scan/libraries/3/scan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "completed", "message": "Scan finished", "scan_id": 43,
                "started_at": "2026-10-18T10:00:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;

        let ack = client.delete_scan_history(42).await.unwrap();
        assert_eq!(ack.status, "success");

        let scan = client.scan_library_tracked("3").await.unwrap();
        assert_eq!(scan.scan_id, 43);
        assert_eq!(scan.completed_at, None);
    }

    #[tokio::test]
    async fn error_status_carries_the_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard/server-status"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Plex server not configured"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).await.server_status().await.unwrap_err();

        match &err {
            ApiError::Status { status, body } => {
                assert_eq!(*status, StatusCode::BAD_REQUEST);
                assert!(body.contains("not configured"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.detail().as_deref(), Some("Plex server not configured"));
    }

    #[tokio::test]
    async fn unexpected_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard/recent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.recent_items().await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();

        let err = client.health().await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
    }
}
