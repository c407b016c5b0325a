// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Create handler (spec §4.8 Create).

use tokio_util::sync::CancellationToken;
use wlw_core::{Mode, WorkspaceInfo, CREATE_RESUME_PROGRESS_THRESHOLD};
use wlw_wire::Event;

use crate::error::EngineError;
use crate::runtime::Runtime;

/// The init script is not reliably re-entrant: once a prior attempt has
/// advanced past `CREATE_RESUME_PROGRESS_THRESHOLD` while still in
/// `creating`, a second attempt would risk re-running it. Advancing the
/// state machine without retrying trades a possibly-partially-initialised
/// workspace for a worker that doesn't loop forever on the same job.
pub async fn run(rt: &Runtime, ws: &WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    let reporter = rt.reporter(&ws.workspace, ws.version, cancel);
    rt.logger.append(&ws.workspace, "create-started");
    reporter.marker(Event::CreateStarted, 0).await;

    let previous_attempt_passed_init =
        ws.mode.as_ref() == Some(&Mode::Creating) && ws.progress_or_zero() >= CREATE_RESUME_PROGRESS_THRESHOLD;

    if previous_attempt_passed_init {
        let observed = ws.progress_or_zero();
        tracing::info!(workspace = %ws.workspace, progress = observed, "resuming past init threshold without retrying init script");
        rt.logger.append(&ws.workspace, "create-done (resumed past init)");
        reporter.marker(Event::CreateDone, observed).await;
        return Ok(());
    }

    rt.create_workspace
        .create(ws, &reporter)
        .await
        .map_err(|source| EngineError::PhaseFailed { workspace: ws.workspace.clone(), source })?;

    rt.logger.append(&ws.workspace, "create-done");
    reporter.marker(Event::CreateDone, 100).await;
    Ok(())
}
