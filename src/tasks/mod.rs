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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep backend requests
//! off the main UI thread. A dedicated worker owns the [`ApiClient`] and a
//! single-threaded async runtime, translates each [`AppTask`] into one or more
//! API calls and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Tasks are handled strictly one after another, so two loads of the same
//! data never overlap. Only work that talks to the backend belongs here, other
//! actions are handled directly as events.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};
use tracing::{error, info};

use crate::{
    api::{ApiClient, ApiError, models::PlexServerConfig},
    config::AppConfig,
    dashboard::describe_error,
    events::AppEvent,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadDashboard,

    LoadScanHistory {
        library_key: Option<String>,
        limit: u32,
    },
    DeleteScanRecord(i64),

    LoadLibraries,
    LoadLibrary(String),
    LoadLibraryContent {
        key: String,
        offset: u32,
    },
    ScanLibrary {
        key: String,
        tracked: bool,
    },

    LoadSettings,
    TestConnection(PlexServerConfig),
    SavePlexConfig(PlexServerConfig),
}

/// Spawns a background thread to process application tasks.
///
/// The worker builds its own runtime and API client. If either cannot be
/// created the failure is reported as [`AppEvent::FatalError`] and the worker
/// exits.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let api_url = config.api_url();

    thread::spawn(move || {
        let (runtime, client) = match init_worker(&api_url) {
            Ok(parts) => parts,
            Err(e) => {
                error!("task worker failed to start: {e:#}");
                let _ = event_tx.send(AppEvent::FatalError(format!("{e:#}")));
                return;
            }
        };

        info!(base_url = client.base_url(), "task worker started");

        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                client: &client,
                event_tx: &event_tx,
            };

            if let Err(e) = runtime.block_on(handle_task(task, &ctx)) {
                let _ = event_tx.send(AppEvent::Error(describe_task_error(&e)));
            }
        }

        info!("task worker stopped");
    });
}

fn init_worker(api_url: &str) -> Result<(Runtime, ApiClient)> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = ApiClient::new(api_url).context("Failed to create API client")?;

    Ok((runtime, client))
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a> {
    pub(crate) client: &'a ApiClient,
    pub(crate) event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
///
/// Handlers report their outcome through the application event channel.
/// Errors returned from here end up in the status bar.
pub(crate) async fn handle_task(task: AppTask, ctx: &TaskContext<'_>) -> Result<()> {
    match task {
        AppTask::LoadDashboard => handlers::load_dashboard(ctx).await,

        AppTask::LoadScanHistory { library_key, limit } => {
            handlers::load_scan_history(ctx, library_key, limit).await
        }
        AppTask::DeleteScanRecord(id) => handlers::delete_scan_record(ctx, id).await,

        AppTask::LoadLibraries => handlers::load_libraries(ctx).await,
        AppTask::LoadLibrary(key) => handlers::load_library(ctx, key).await,
        AppTask::LoadLibraryContent { key, offset } => {
            handlers::load_library_content(ctx, key, offset).await
        }
        AppTask::ScanLibrary { key, tracked } => handlers::scan_library(ctx, key, tracked).await,

        AppTask::LoadSettings => handlers::load_settings(ctx).await,
        AppTask::TestConnection(config) => handlers::test_connection(ctx, config).await,
        AppTask::SavePlexConfig(config) => handlers::save_plex_config(ctx, config).await,
    }
}

fn describe_task_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<ApiError>() {
        Some(api_error) => describe_error(api_error),
        None => format!("{e:#}"),
    }
}
