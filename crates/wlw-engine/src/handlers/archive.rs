// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ArchiveBackup / ArchiveClean handlers (spec §4.8).

use tokio_util::sync::CancellationToken;
use wlw_core::WorkspaceInfo;
use wlw_wire::Event;

use super::common::{run_backup_phase, run_clean_phase};
use crate::error::EngineError;
use crate::runtime::Runtime;

/// `full_check = true`: archive is not time-critical, so the backup
/// additionally verifies blob integrity.
pub async fn run_backup(rt: &Runtime, ws: &WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    run_backup_phase(rt, ws, cancel, true, Event::ArchivingBackupStarted, Event::ArchivingBackupDone).await
}

/// DB-only destructive: force-close transactor sessions first, then drop and
/// reindex (`only_drop = false`, unlike Delete's full drop).
pub async fn run_clean(rt: &Runtime, ws: &WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    crate::transactor::force_close(rt.account.as_ref(), rt.transactor.as_ref(), &rt.token, &ws.workspace).await;
    run_clean_phase(rt, ws, cancel, true, false, Event::ArchivingCleanStarted, Event::ArchivingCleanDone, 100).await
}
