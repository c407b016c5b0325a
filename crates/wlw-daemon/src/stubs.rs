// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder collaborators for the operations spec §1 declares out of
//! scope: the actual schema migration, backup/restore byte-pumping, and the
//! production storage/destroy adapters. `wlw-adapters` only defines the
//! trait seams; a real deployment swaps this module out for adapters that
//! actually talk to MongoDB/PostgreSQL and blob storage. Wiring these in is
//! what lets the rest of the control loop — handshake, polling, dispatch,
//! progress reporting — run and be exercised end to end without those
//! collaborators existing yet.

use async_trait::async_trait;
use url::Url;

use wlw_adapters::{
    AdapterError, BackupPipeline, CreateWorkspace, DeleteTarget, DestroyAdapter,
    DestroyAdapterRegistry, RestorePipeline, SharedVars, StorageAdapter, StorageAdapterFactory,
    StorageAdapterRegistry, UpgradeWorkspace,
};
use wlw_core::{ProgressSink, Version, WorkspaceInfo};

const SCHEMES: [&str; 2] = ["mongodb", "postgresql"];

fn not_implemented(collaborator: &'static str, workspace: &str) -> AdapterError {
    AdapterError::OperationFailed {
        collaborator,
        workspace: workspace.to_string(),
        message: "no production adapter wired into this deployment".to_string(),
    }
}

/// Single placeholder type implementing every out-of-scope collaborator
/// trait, mirroring the shape of `wlw_adapters::fake::FakeCollaborators`
/// but failing loudly instead of recording calls.
pub struct UnimplementedCollaborators;

#[async_trait]
impl CreateWorkspace for UnimplementedCollaborators {
    async fn create(&self, workspace: &WorkspaceInfo, _progress: &dyn ProgressSink) -> Result<(), AdapterError> {
        Err(not_implemented("createWorkspace", &workspace.workspace))
    }
}

#[async_trait]
impl UpgradeWorkspace for UnimplementedCollaborators {
    async fn upgrade(
        &self,
        _target_version: Version,
        _transactions: &[String],
        workspace: &WorkspaceInfo,
        _force: bool,
        _progress: &dyn ProgressSink,
    ) -> Result<(), AdapterError> {
        Err(not_implemented("upgradeWorkspace", &workspace.workspace))
    }
}

#[async_trait]
impl BackupPipeline for UnimplementedCollaborators {
    async fn do_backup(
        &self,
        db_url: &Url,
        _transactions: &[String],
        _full_check: bool,
        _progress: &dyn ProgressSink,
    ) -> Result<bool, AdapterError> {
        Err(not_implemented("doBackup", db_url.path().trim_start_matches('/')))
    }
}

#[async_trait]
impl RestorePipeline for UnimplementedCollaborators {
    async fn do_restore_workspace(
        &self,
        db_url: &Url,
        _blob_domain: &str,
        _progress: &dyn ProgressSink,
    ) -> Result<bool, AdapterError> {
        Err(not_implemented("doRestoreWorkspace", db_url.path().trim_start_matches('/')))
    }
}

#[async_trait]
impl StorageAdapter for UnimplementedCollaborators {
    async fn close(&self) -> Result<(), AdapterError> {
        Ok(())
    }
}

struct UnimplementedStorageFactory {
    scheme: &'static str,
}

#[async_trait]
impl StorageAdapterFactory for UnimplementedStorageFactory {
    fn scheme(&self) -> &'static str {
        self.scheme
    }

    async fn open(&self, db_url: &Url) -> Result<std::sync::Arc<dyn StorageAdapter>, AdapterError> {
        Err(not_implemented("storageAdapter.open", db_url.path().trim_start_matches('/')))
    }
}

struct UnimplementedDestroyAdapter {
    scheme: &'static str,
}

#[async_trait]
impl DestroyAdapter for UnimplementedDestroyAdapter {
    fn scheme(&self) -> &'static str {
        self.scheme
    }

    async fn delete_workspace(&self, _shared: &SharedVars, target: &DeleteTarget) -> Result<(), AdapterError> {
        Err(not_implemented("deleteWorkspace", &target.name))
    }
}

/// Registry covering both schemes spec §6 names (`mongodb`, `postgresql`),
/// every factory backed by [`UnimplementedCollaborators`].
pub fn storage_registry() -> StorageAdapterRegistry {
    let mut registry = StorageAdapterRegistry::new();
    for scheme in SCHEMES {
        registry = registry.register(std::sync::Arc::new(UnimplementedStorageFactory { scheme }));
    }
    registry
}

pub fn destroy_registry() -> DestroyAdapterRegistry {
    let mut registry = DestroyAdapterRegistry::new();
    for scheme in SCHEMES {
        registry = registry.register(std::sync::Arc::new(UnimplementedDestroyAdapter { scheme }));
    }
    registry
}
