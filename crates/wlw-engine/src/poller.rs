// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job poller (C4, spec §4.4): acquire a concurrency slot, fetch one pending
//! workspace, and dispatch it without awaiting so the next slot can be
//! acquired immediately. Errors from `get_pending_workspace` itself are
//! caught here, logged, and treated as "nothing pending" — deliberately
//! *not* wrapped in [`crate::retry::until_success`], since a transient
//! control-plane error must degrade to an empty poll rather than retry
//! forever and starve the gate (spec §4.4).

use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::handlers;
use crate::runtime::Runtime;
use crate::wakeup::idle_sleep;

/// Runs until `cancel` fires, then drains every job already dispatched
/// before returning (spec §5: "Jobs in flight are not interrupted; the
/// worker waits for them to complete or fail naturally").
pub async fn run_poller(rt: Arc<Runtime>, cancel: CancellationToken) {
    let mut in_flight = JoinSet::new();

    while !cancel.is_cancelled() {
        let permit = rt.gate().acquire().await;
        if cancel.is_cancelled() {
            drop(permit);
            break;
        }

        let pending = rt
            .account
            .get_pending_workspace(&rt.token, &rt.worker.region, rt.worker.version, rt.worker.operation)
            .await;

        match pending {
            Ok(Some(ws)) => {
                let this = rt.clone();
                let job_cancel = cancel.clone();
                in_flight.spawn(async move {
                    let workspace = ws.workspace.clone();
                    if let Err(err) = handlers::dispatch_one(&this, ws, &job_cancel).await {
                        this.options.error_handler.handle(&workspace, &err);
                        tracing::error!(workspace, error = %err, "job failed");
                    }
                    drop(permit);
                });
            }
            Ok(None) => {
                drop(permit);
                idle_sleep(rt.options.wait_timeout, rt.wakeup(), &cancel).await;
            }
            Err(err) => {
                drop(permit);
                tracing::warn!(error = %err, "getPendingWorkspace failed; treating as no pending work");
                idle_sleep(rt.options.wait_timeout, rt.wakeup(), &cancel).await;
            }
        }

        while in_flight.try_join_next().is_some() {}
    }

    tracing::info!(in_flight = in_flight.len(), "poll loop cancelled; draining in-flight jobs");
    while in_flight.join_next().await.is_some() {}
}
