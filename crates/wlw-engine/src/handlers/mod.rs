// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase handlers (C7, spec §4.8): one function per [`PhaseKind`]. Each
//! handler opens the per-workspace log sink, streams progress through C2,
//! and emits the terminal `*-done` marker on success; none of them ever
//! return a successfully-swallowed error — [`dispatch_one`] is the single
//! place that turns a handler's `Err` into a logged, non-fatal outcome.

mod archive;
mod common;
mod create;
mod delete;
mod migrate;
mod restore;
mod upgrade;

use tokio_util::sync::CancellationToken;
use wlw_core::WorkspaceInfo;

use crate::dispatch::{dispatch, PhaseKind};
use crate::error::EngineError;
use crate::runtime::Runtime;

/// Route one polled workspace to its phase handler. Unknown modes are logged
/// and treated as a no-op job (spec §3, §7 taxonomy item 4) rather than an
/// error, since there is nothing a caller could usefully retry.
pub async fn dispatch_one(rt: &Runtime, ws: WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    let mode = ws.mode_or_active();
    let Some(phase) = dispatch(&mode) else {
        tracing::warn!(workspace = %ws.workspace, mode = %mode, "unknown workspace mode; skipping");
        return Ok(());
    };

    match phase {
        PhaseKind::Create => create::run(rt, &ws, cancel).await,
        PhaseKind::Upgrade => upgrade::run(rt, &ws, cancel).await,
        PhaseKind::ArchiveBackup => archive::run_backup(rt, &ws, cancel).await,
        PhaseKind::ArchiveClean => archive::run_clean(rt, &ws, cancel).await,
        PhaseKind::MigrateBackup => migrate::run_backup(rt, &ws, cancel).await,
        PhaseKind::MigrateClean => migrate::run_clean(rt, &ws, cancel).await,
        PhaseKind::Restore => restore::run(rt, &ws, cancel).await,
        PhaseKind::Delete => delete::run(rt, &ws, cancel).await,
    }
}
