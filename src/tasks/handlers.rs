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

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    api::models::PlexServerConfig,
    components::{LibraryDetail, SettingsSnapshot, libraries::CONTENT_PAGE_SIZE},
    dashboard::{describe_error, load_snapshot},
    events::AppEvent,
    tasks::TaskContext,
};

pub(super) async fn load_dashboard(ctx: &TaskContext<'_>) -> Result<()> {
    match load_snapshot(ctx.client).await {
        Ok(snapshot) => {
            info!(
                recent = snapshot.recent.len(),
                connected = snapshot.status.connected,
                "dashboard loaded"
            );
            ctx.event_tx.send(AppEvent::DashboardLoaded(Box::new(snapshot)))?;
        }
        Err(e) => {
            warn!("dashboard load failed: {e}");
            ctx.event_tx
                .send(AppEvent::DashboardFailed(describe_error(&e)))?;
        }
    }

    Ok(())
}

pub(super) async fn load_scan_history(
    ctx: &TaskContext<'_>,
    library_key: Option<String>,
    limit: u32,
) -> Result<()> {
    match ctx.client.scan_history(library_key.as_deref(), limit).await {
        Ok(page) => ctx.event_tx.send(AppEvent::ScanHistoryLoaded(page))?,
        Err(e) => {
            warn!("scan history load failed: {e}");
            ctx.event_tx
                .send(AppEvent::ScanHistoryFailed(describe_error(&e)))?;
        }
    }

    Ok(())
}

pub(super) async fn delete_scan_record(ctx: &TaskContext<'_>, id: i64) -> Result<()> {
    let ack = ctx.client.delete_scan_history(id).await?;
    info!(id, status = %ack.status, "scan record deleted");
    ctx.event_tx
        .send(AppEvent::ScanRecordDeleted(id, ack.message))?;

    Ok(())
}

pub(super) async fn load_libraries(ctx: &TaskContext<'_>) -> Result<()> {
    match ctx.client.libraries().await {
        Ok(libraries) => ctx.event_tx.send(AppEvent::LibrariesLoaded(libraries))?,
        Err(e) => {
            warn!("library list load failed: {e}");
            ctx.event_tx
                .send(AppEvent::LibrariesFailed(describe_error(&e)))?;
        }
    }

    Ok(())
}

pub(super) async fn load_library(ctx: &TaskContext<'_>, key: String) -> Result<()> {
    let result = tokio::try_join!(
        ctx.client.library(&key),
        ctx.client.library_stats(&key),
        ctx.client.library_content(&key, CONTENT_PAGE_SIZE, 0),
    );

    match result {
        Ok((library, stats, content)) => {
            let detail = LibraryDetail {
                library,
                stats,
                content,
                offset: 0,
            };
            ctx.event_tx.send(AppEvent::LibraryLoaded(Box::new(detail)))?;
        }
        Err(e) => {
            warn!(%key, "library load failed: {e}");
            ctx.event_tx
                .send(AppEvent::LibraryFailed(describe_error(&e)))?;
        }
    }

    Ok(())
}

pub(super) async fn load_library_content(
    ctx: &TaskContext<'_>,
    key: String,
    offset: u32,
) -> Result<()> {
    match ctx.client.library_content(&key, CONTENT_PAGE_SIZE, offset).await {
        Ok(page) => ctx
            .event_tx
            .send(AppEvent::LibraryContentLoaded { key, offset, page })?,
        Err(e) => {
            warn!(%key, offset, "library content load failed: {e}");
            let message = describe_error(&e);
            ctx.event_tx
                .send(AppEvent::LibraryContentFailed { key, message })?;
        }
    }

    Ok(())
}

pub(super) async fn scan_library(ctx: &TaskContext<'_>, key: String, tracked: bool) -> Result<()> {
    let notice = if tracked {
        let scan = ctx.client.scan_library_tracked(&key).await?;
        info!(%key, scan_id = scan.scan_id, "tracked scan requested");
        format!("Scan #{} {}: {}", scan.scan_id, scan.status, scan.message)
    } else {
        let ack = ctx.client.scan_library(&key).await?;
        info!(%key, "scan requested");
        ack.message
    };

    ctx.event_tx.send(AppEvent::Notice(notice))?;

    Ok(())
}

pub(super) async fn load_settings(ctx: &TaskContext<'_>) -> Result<()> {
    let (health, config, server) = tokio::join!(
        ctx.client.health(),
        ctx.client.plex_config(),
        ctx.client.server_info(),
    );

    let snapshot = SettingsSnapshot {
        health: health.map_err(|e| describe_error(&e)),
        config: config.map_err(|e| describe_error(&e)),
        server: server.map_err(|e| describe_error(&e)),
    };
    ctx.event_tx.send(AppEvent::SettingsLoaded(Box::new(snapshot)))?;

    Ok(())
}

pub(super) async fn test_connection(ctx: &TaskContext<'_>, config: PlexServerConfig) -> Result<()> {
    match ctx.client.test_connection(&config).await {
        Ok(result) => {
            info!(success = result.success, url = %config.url, "connection tested");
            ctx.event_tx.send(AppEvent::ConnectionTested(result))?;
        }
        Err(e) => {
            warn!(url = %config.url, "connection test failed: {e}");
            ctx.event_tx
                .send(AppEvent::ConnectionTestFailed(describe_error(&e)))?;
        }
    }

    Ok(())
}

pub(super) async fn save_plex_config(
    ctx: &TaskContext<'_>,
    config: PlexServerConfig,
) -> Result<()> {
    ctx.client.save_plex_config(&config).await?;
    info!(url = %config.url, "plex configuration saved");
    ctx.event_tx
        .send(AppEvent::Notice("Plex configuration saved".to_string()))?;
    ctx.event_tx.send(AppEvent::ReloadSettings)?;

    Ok(())
}
