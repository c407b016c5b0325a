// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upgrade handler (spec §4.8 Upgrade).

use tokio_util::sync::CancellationToken;
use wlw_core::{Mode, WorkspaceInfo};
use wlw_wire::Event;

use crate::error::EngineError;
use crate::runtime::Runtime;

fn skipped(rt: &Runtime, ws: &WorkspaceInfo) -> bool {
    if ws.disabled || rt.options.ignore.contains(&ws.workspace) {
        return true;
    }
    matches!(
        ws.mode_or_active(),
        Mode::ArchivingPendingBackup
            | Mode::ArchivingBackup
            | Mode::ArchivingPendingClean
            | Mode::ArchivingClean
            | Mode::MigrationPendingBackup
            | Mode::MigrationBackup
            | Mode::MigrationPendingClean
            | Mode::MigrationClean
            | Mode::PendingRestore
            | Mode::Restoring
    )
}

/// Skipped (no-op, no event) for a disabled workspace, an ignored workspace
/// name, or one mid-archive/migration/restore — see [`skipped`]. Otherwise
/// drives the re-entrant external upgrade operation.
pub async fn run(rt: &Runtime, ws: &WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    if skipped(rt, ws) {
        tracing::debug!(workspace = %ws.workspace, mode = %ws.mode_or_active(), "upgrade skipped");
        return Ok(());
    }

    let reporter = rt.reporter(&ws.workspace, ws.version, cancel);
    rt.logger.append(&ws.workspace, "upgrade-started");
    reporter.marker(Event::UpgradeStarted, 0).await;
    reporter.start_keepalive();

    let result = rt
        .upgrade_workspace
        .upgrade(rt.worker.version, &rt.worker.txes, ws, rt.options.force, &reporter)
        .await;
    reporter.stop_keepalive();
    result.map_err(|source| EngineError::PhaseFailed { workspace: ws.workspace.clone(), source })?;

    rt.logger.append(&ws.workspace, "upgrade-done");
    reporter.marker(Event::UpgradeDone, 100).await;
    Ok(())
}
