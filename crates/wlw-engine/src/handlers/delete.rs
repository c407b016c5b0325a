// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delete handler (spec §4.8 ArchiveClean/Delete/MigrateClean, Delete case).

use tokio_util::sync::CancellationToken;
use wlw_core::WorkspaceInfo;
use wlw_wire::Event;

use super::common::run_clean_phase;
use crate::error::EngineError;
use crate::runtime::Runtime;

/// Always destructive: force-close transactor sessions, then a full drop
/// (`only_drop = true`) rather than ArchiveClean's drop-and-reindex.
pub async fn run(rt: &Runtime, ws: &WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    crate::transactor::force_close(rt.account.as_ref(), rt.transactor.as_ref(), &rt.token, &ws.workspace).await;
    run_clean_phase(rt, ws, cancel, true, true, Event::DeleteStarted, Event::DeleteDone, 100).await
}
