// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The worker control loop (spec §2 data flow: "C3 → (loop: C4 → C5 → C6 →
//! C7 → C2 → control-plane)"). [`Runtime`] owns every shared collaborator;
//! [`Runtime::run`] is the whole process lifetime after construction: one
//! handshake, then an unbounded poll loop until cancellation.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use wlw_adapters::{BackupPipeline, CreateWorkspace, DestroyAdapterRegistry, RestorePipeline, StorageAdapterRegistry, UpgradeWorkspace};
use wlw_core::WorkerOptions;
use wlw_wire::{AccountClient, FulltextClient, TransactorClient};

use crate::gate::ConcurrencyGate;
use crate::logging::WorkspaceLogger;
use crate::options::RuntimeOptions;
use crate::progress::ProgressReporter;
use crate::wakeup::Wakeup;

/// Every collaborator the control loop and phase handlers need, wired once
/// at startup (spec §5 "Adapter factory registry: registered once after
/// handshake; read-only thereafter").
pub struct Runtime {
    pub worker: WorkerOptions,
    pub options: RuntimeOptions,
    pub token: String,
    pub account: Arc<dyn AccountClient>,
    pub transactor: Arc<TransactorClient>,
    pub fulltext: Arc<FulltextClient>,
    pub storage: Arc<StorageAdapterRegistry>,
    pub destroy: Arc<DestroyAdapterRegistry>,
    pub create_workspace: Arc<dyn CreateWorkspace>,
    pub upgrade_workspace: Arc<dyn UpgradeWorkspace>,
    pub backup_pipeline: Arc<dyn BackupPipeline>,
    pub restore_pipeline: Arc<dyn RestorePipeline>,
    pub logger: WorkspaceLogger,
    gate: ConcurrencyGate,
    wakeup: Wakeup,
}

impl Runtime {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        worker: WorkerOptions,
        options: RuntimeOptions,
        token: String,
        account: Arc<dyn AccountClient>,
        transactor: Arc<TransactorClient>,
        fulltext: Arc<FulltextClient>,
        storage: Arc<StorageAdapterRegistry>,
        destroy: Arc<DestroyAdapterRegistry>,
        create_workspace: Arc<dyn CreateWorkspace>,
        upgrade_workspace: Arc<dyn UpgradeWorkspace>,
        backup_pipeline: Arc<dyn BackupPipeline>,
        restore_pipeline: Arc<dyn RestorePipeline>,
    ) -> Arc<Self> {
        let wakeup = Wakeup::new();
        let gate = ConcurrencyGate::new(worker.limit, wakeup.clone());
        let logger = WorkspaceLogger::new(options.logs_dir.clone());
        Arc::new(Self {
            worker,
            options,
            token,
            account,
            transactor,
            fulltext,
            storage,
            destroy,
            create_workspace,
            upgrade_workspace,
            backup_pipeline,
            restore_pipeline,
            logger,
            gate,
            wakeup,
        })
    }

    pub fn reporter(&self, workspace: &str, version: Option<wlw_core::Version>, cancel: &CancellationToken) -> ProgressReporter {
        ProgressReporter::new(self.account.clone(), self.token.clone(), workspace, version, cancel.clone())
    }

    /// The configured DB URL with its path rewritten to the workspace id, so
    /// each workspace addresses its own database under a shared host/scheme.
    pub fn workspace_db_url(&self, workspace: &str) -> url::Url {
        let mut url = self.options.db_url.clone();
        url.set_path(workspace);
        url
    }

    pub(crate) fn gate(&self) -> &ConcurrencyGate {
        &self.gate
    }

    pub(crate) fn wakeup(&self) -> &Wakeup {
        &self.wakeup
    }

    /// Number of jobs currently in flight. Exposed for tests/monitoring.
    pub fn running_tasks(&self) -> u32 {
        self.gate.running_tasks()
    }

    /// C3 then the C4/C5/C6/C7 poll loop, until `cancel` fires. Jobs already
    /// dispatched are drained (awaited to completion) before returning —
    /// spec §5 "Jobs in flight are not interrupted; the worker waits for
    /// them to complete or fail naturally."
    pub async fn run(self: Arc<Self>, cancel: CancellationToken) {
        if crate::handshake::handshake(
            self.account.as_ref(),
            &self.token,
            &self.worker.region,
            self.worker.version,
            self.worker.operation,
            &cancel,
        )
        .await
        .is_err()
        {
            tracing::info!("handshake cancelled before completion; shutting down");
            return;
        }
        tracing::info!(region = %self.worker.region_or_default(), version = %self.worker.version, operation = %self.worker.operation, "handshake accepted");

        crate::poller::run_poller(self, cancel).await;
    }
}
