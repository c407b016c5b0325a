// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory fakes for the out-of-scope collaborators, exposed under the
//! `test-support` feature so `wlw-engine`'s integration tests can exercise
//! the full phase-handler skeleton without real adapters — mirroring the
//! teacher's `oj_adapters::agent::fake::FakeAgentAdapter`.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;
use wlw_core::{ProgressSink, Version, WorkspaceInfo};

use crate::backup::BackupPipeline;
use crate::create::CreateWorkspace;
use crate::destroy::{DeleteTarget, DestroyAdapter, SharedVars};
use crate::error::AdapterError;
use crate::restore::RestorePipeline;
use crate::storage::{StorageAdapter, StorageAdapterFactory};
use crate::upgrade::UpgradeWorkspace;

/// A recorded invocation, for assertions in caller test suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    Create { workspace: String },
    Upgrade { workspace: String, force: bool },
    Backup { workspace_scheme: String, full_check: bool },
    Restore { blob_domain: String },
    Delete { workspace: String },
    StorageOpened { scheme: String },
    StorageClosed,
}

/// Shared call log + failure injection, cloneable so a test can hold one
/// handle while handing `Arc`-wrapped adapter trait objects to the engine.
#[derive(Default)]
pub struct FakeCollaborators {
    pub calls: Mutex<Vec<FakeCall>>,
    pub fail_create: std::sync::atomic::AtomicBool,
    pub fail_backup: std::sync::atomic::AtomicBool,
    pub progress_reports: Mutex<Vec<u8>>,
    close_count: AtomicUsize,
}

impl FakeCollaborators {
    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().clone()
    }

    pub fn close_count(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }

    fn record(&self, call: FakeCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl CreateWorkspace for FakeCollaborators {
    async fn create(&self, workspace: &WorkspaceInfo, progress: &dyn ProgressSink) -> Result<(), AdapterError> {
        self.record(FakeCall::Create { workspace: workspace.workspace.clone() });
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(AdapterError::OperationFailed {
                collaborator: "createWorkspace",
                workspace: workspace.workspace.clone(),
                message: "injected failure".to_string(),
            });
        }
        progress.report(50);
        Ok(())
    }
}

#[async_trait]
impl UpgradeWorkspace for FakeCollaborators {
    async fn upgrade(
        &self,
        _target_version: Version,
        _transactions: &[String],
        workspace: &WorkspaceInfo,
        force: bool,
        progress: &dyn ProgressSink,
    ) -> Result<(), AdapterError> {
        self.record(FakeCall::Upgrade { workspace: workspace.workspace.clone(), force });
        progress.report(50);
        Ok(())
    }
}

#[async_trait]
impl BackupPipeline for FakeCollaborators {
    async fn do_backup(
        &self,
        db_url: &Url,
        _transactions: &[String],
        full_check: bool,
        progress: &dyn ProgressSink,
    ) -> Result<bool, AdapterError> {
        self.record(FakeCall::Backup { workspace_scheme: db_url.scheme().to_string(), full_check });
        if self.fail_backup.load(Ordering::SeqCst) {
            return Err(AdapterError::Other("injected backup failure".to_string()));
        }
        progress.report(50);
        Ok(true)
    }
}

#[async_trait]
impl RestorePipeline for FakeCollaborators {
    async fn do_restore_workspace(
        &self,
        _db_url: &Url,
        blob_domain: &str,
        progress: &dyn ProgressSink,
    ) -> Result<bool, AdapterError> {
        self.record(FakeCall::Restore { blob_domain: blob_domain.to_string() });
        progress.report(50);
        Ok(true)
    }
}

#[async_trait]
impl DestroyAdapter for FakeCollaborators {
    fn scheme(&self) -> &'static str {
        "mongodb"
    }

    async fn delete_workspace(&self, _shared: &SharedVars, target: &DeleteTarget) -> Result<(), AdapterError> {
        self.record(FakeCall::Delete { workspace: target.name.clone() });
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for FakeCollaborators {
    async fn close(&self) -> Result<(), AdapterError> {
        self.close_count.fetch_add(1, Ordering::SeqCst);
        self.record(FakeCall::StorageClosed);
        Ok(())
    }
}

/// Factory that always hands back the same fake handle, recording the
/// scheme it was opened for.
pub struct FakeStorageFactory {
    pub scheme: &'static str,
    pub collaborators: std::sync::Arc<FakeCollaborators>,
}

#[async_trait]
impl StorageAdapterFactory for FakeStorageFactory {
    fn scheme(&self) -> &'static str {
        self.scheme
    }

    async fn open(&self, db_url: &Url) -> Result<std::sync::Arc<dyn StorageAdapter>, AdapterError> {
        self.collaborators.record(FakeCall::StorageOpened { scheme: db_url.scheme().to_string() });
        Ok(self.collaborators.clone())
    }
}
