// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Restore handler (spec §4.8 Restore).

use tokio_util::sync::CancellationToken;
use wlw_core::WorkspaceInfo;
use wlw_wire::Event;

use crate::error::EngineError;
use crate::runtime::Runtime;

pub async fn run(rt: &Runtime, ws: &WorkspaceInfo, cancel: &CancellationToken) -> Result<(), EngineError> {
    let reporter = rt.reporter(&ws.workspace, ws.version, cancel);
    rt.logger.append(&ws.workspace, "restore-started");
    reporter.marker(Event::RestoreStarted, 0).await;
    reporter.start_keepalive();

    let db_url = rt.workspace_db_url(&ws.workspace);
    let storage = match rt.storage.open(&db_url).await {
        Ok(storage) => storage,
        Err(source) => {
            reporter.stop_keepalive();
            return Err(EngineError::PhaseFailed { workspace: ws.workspace.clone(), source });
        }
    };

    let blob_domain = format!("{}.{}", ws.workspace, rt.options.blob_domain);
    let result = rt.restore_pipeline.do_restore_workspace(&db_url, &blob_domain, &reporter).await;
    if let Err(err) = storage.close().await {
        tracing::warn!(workspace = %ws.workspace, error = %err, "storage adapter close failed");
    }
    reporter.stop_keepalive();

    let succeeded = result.map_err(|source| EngineError::PhaseFailed { workspace: ws.workspace.clone(), source })?;
    if succeeded {
        crate::reindex::reindex(&rt.fulltext, rt.worker.fulltext_url.as_ref(), &rt.token, false, &ws.workspace).await;
        rt.logger.append(&ws.workspace, "restore-done");
        reporter.marker(Event::RestoreDone, 100).await;
    } else {
        tracing::warn!(workspace = %ws.workspace, "restore pipeline returned false; not marking done");
    }
    Ok(())
}
