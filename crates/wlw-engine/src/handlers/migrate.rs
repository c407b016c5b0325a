// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! MigrateBackup / MigrateClean handlers (spec §4.8).

use tokio_util::sync::CancellationToken;
use wlw_core::WorkspaceInfo;
use wlw_wire::Event;

use super::common::{run_backup_phase, run_clean_phase};
use crate::error::EngineError;
use crate::runtime::Runtime;

const MIGRATION_CLEANUP_ENV: &str = "MIGRATION_CLEANUP";

/// `full_check = false`: migration is time-critical, and a full integrity
/// check is scheduled pre-migration separately.
pub async fn run_backup(rt: &Runtime, ws: &WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    run_backup_phase(rt, ws, cancel, false, Event::MigrateBackupStarted, Event::MigrateBackupDone).await
}

/// Destructive only when `MIGRATION_CLEANUP=true`; regardless, the
/// start/done event pair is emitted. `migrate-clean-done` is reported at
/// progress 0, not 100 — preserved as-is from the source behaviour rather
/// than "fixed", since external consumers may already depend on it.
pub async fn run_clean(rt: &Runtime, ws: &WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    let cleanup_enabled = std::env::var(MIGRATION_CLEANUP_ENV).is_ok_and(|v| v == "true");
    if cleanup_enabled {
        crate::transactor::force_close(rt.account.as_ref(), rt.transactor.as_ref(), &rt.token, &ws.workspace).await;
    }
    run_clean_phase(rt, ws, cancel, cleanup_enabled, false, Event::MigrateCleanStarted, Event::MigrateCleanDone, 0).await
}
