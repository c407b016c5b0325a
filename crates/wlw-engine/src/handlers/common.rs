// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared bodies for the backup-shaped (ArchiveBackup/MigrateBackup) and
//! clean-shaped (ArchiveClean/Delete/MigrateClean) phases (spec §4.8). Kept
//! separate from `dispatch_one` so each phase's own module stays a short,
//! readable statement of *which* knobs it passes, not *how* the skeleton
//! works.

use tokio_util::sync::CancellationToken;
use wlw_adapters::{DeleteTarget, SharedVars};
use wlw_core::WorkspaceInfo;
use wlw_wire::Event;

use crate::error::EngineError;
use crate::runtime::Runtime;

/// Build a storage adapter, launch the keepalive, run `do_backup`, and close
/// the adapter on every exit path — the common shape of ArchiveBackup and
/// MigrateBackup, differing only in `full_check` and the event pair.
pub(super) async fn run_backup_phase(
    rt: &Runtime,
    ws: &WorkspaceInfo,
    cancel: &CancellationToken,
    full_check: bool,
    started: Event,
    done: Event,
) -> Result<(), EngineError> {
    let reporter = rt.reporter(&ws.workspace, ws.version, cancel);
    rt.logger.append(&ws.workspace, started.as_wire_str());
    reporter.marker(started, 0).await;
    reporter.start_keepalive();

    let db_url = rt.workspace_db_url(&ws.workspace);
    let storage = match rt.storage.open(&db_url).await {
        Ok(storage) => storage,
        Err(source) => {
            reporter.stop_keepalive();
            return Err(EngineError::PhaseFailed { workspace: ws.workspace.clone(), source });
        }
    };

    let result = rt.backup_pipeline.do_backup(&db_url, &rt.worker.txes, full_check, &reporter).await;
    if let Err(err) = storage.close().await {
        tracing::warn!(workspace = %ws.workspace, error = %err, "storage adapter close failed");
    }
    reporter.stop_keepalive();

    let succeeded = result.map_err(|source| EngineError::PhaseFailed { workspace: ws.workspace.clone(), source })?;
    if succeeded {
        rt.logger.append(&ws.workspace, done.as_wire_str());
        reporter.marker(done, 100).await;
    } else {
        tracing::warn!(workspace = %ws.workspace, phase = started.as_wire_str(), "backup pipeline returned false; not marking done");
    }
    Ok(())
}

/// Resolve the destroy adapter (unless `perform_delete` is false — the
/// MigrateClean env-gate case) and call the reindex endpoint. Shared by
/// ArchiveClean, Delete, and MigrateClean.
#[allow(clippy::too_many_arguments)]
pub(super) async fn run_clean_phase(
    rt: &Runtime,
    ws: &WorkspaceInfo,
    cancel: &CancellationToken,
    perform_delete: bool,
    only_drop: bool,
    started: Event,
    done: Event,
    done_progress: u8,
) -> Result<(), EngineError> {
    let reporter = rt.reporter(&ws.workspace, ws.version, cancel);
    rt.logger.append(&ws.workspace, started.as_wire_str());
    reporter.marker(started, 0).await;

    if perform_delete {
        let db_url = rt.workspace_db_url(&ws.workspace);
        let target = DeleteTarget { name: ws.workspace.clone(), uuid: ws.uuid.clone() };
        rt.destroy
            .delete_workspace(&db_url, &SharedVars::new(), &target)
            .await
            .map_err(|source| EngineError::PhaseFailed { workspace: ws.workspace.clone(), source })?;
    } else {
        tracing::info!(workspace = %ws.workspace, phase = started.as_wire_str(), "cleanup gated off; skipping destroy adapter");
    }

    crate::reindex::reindex(&rt.fulltext, rt.worker.fulltext_url.as_ref(), &rt.token, only_drop, &ws.workspace).await;

    rt.logger.append(&ws.workspace, done.as_wire_str());
    reporter.marker(done, done_progress).await;
    Ok(())
}
