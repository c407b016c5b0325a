// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for the end-to-end lifecycle tests: a recording
//! `AccountClient` fake and a `Runtime` builder wired against
//! `wlw_adapters::fake::FakeCollaborators`.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;
use wlw_adapters::fake::{FakeCollaborators, FakeStorageFactory};
use wlw_adapters::{DestroyAdapterRegistry, StorageAdapterRegistry};
use wlw_core::{Operation, Version, WorkerOptions, WorkspaceInfo};
use wlw_engine::{Runtime, RuntimeOptions};
use wlw_wire::{AccountClient, Event, FulltextClient, TransactorClient, WireError};

/// Records every `updateWorkspaceInfo` call in order, per workspace, for
/// assertions on the exact `<phase>-started → progress* → <phase>-done`
/// sequence (spec §5 ordering guarantee).
#[derive(Default)]
pub struct FakeAccount {
    pub events: Mutex<Vec<(String, Event, u8)>>,
}

impl FakeAccount {
    pub fn events_for(&self, workspace: &str) -> Vec<(Event, u8)> {
        self.events.lock().iter().filter(|(w, _, _)| w == workspace).map(|(_, e, p)| (*e, *p)).collect()
    }
}

#[async_trait]
impl AccountClient for FakeAccount {
    async fn worker_handshake(&self, _token: &str, _region: &str, _version: Version, _operation: Operation) -> Result<(), WireError> {
        Ok(())
    }

    async fn get_pending_workspace(&self, _token: &str, _region: &str, _version: Version, _operation: Operation) -> Result<Option<WorkspaceInfo>, WireError> {
        Ok(None)
    }

    async fn update_workspace_info(
        &self,
        _token: &str,
        workspace: &str,
        event: Event,
        _version: Option<Version>,
        progress: u8,
        _message: Option<&str>,
    ) -> Result<(), WireError> {
        self.events.lock().push((workspace.to_string(), event, progress));
        Ok(())
    }

    async fn get_transactor_endpoint(&self, _token: &str) -> Result<Url, WireError> {
        // No transactor configured in tests; C8's force-close degrades to a
        // logged no-op, matching the "transactor may already be down" case.
        Err(WireError::Status { status: 404, endpoint: "getTransactorEndpoint".to_string() })
    }
}

pub struct Fixture {
    pub runtime: Arc<Runtime>,
    pub account: Arc<FakeAccount>,
    pub collaborators: Arc<FakeCollaborators>,
}

/// Builds a `Runtime` with every collaborator replaced by an in-memory fake,
/// suitable for driving `wlw_engine::handlers::dispatch_one` directly without
/// a poll loop or real network I/O.
pub fn build_fixture() -> Fixture {
    let account = Arc::new(FakeAccount::default());
    let collaborators = Arc::new(FakeCollaborators::default());

    let storage = Arc::new(
        StorageAdapterRegistry::new()
            .register(Arc::new(FakeStorageFactory { scheme: "mongodb", collaborators: collaborators.clone() })),
    );
    let destroy = Arc::new(DestroyAdapterRegistry::new().register(collaborators.clone()));

    let worker = WorkerOptions {
        version: Version::new(1, 0, 0),
        region: "us-east".to_string(),
        limit: NonZeroU32::new(4).expect("4 is non-zero"),
        operation: Operation::AllWithBackup,
        brandings: HashMap::new(),
        fulltext_url: None,
        txes: vec!["tx1".to_string()],
        migration_operation: None,
    };

    let db_url: Url = "mongodb://localhost:27017/base".parse().expect("valid url");
    let options = RuntimeOptions::new(db_url, "blobs.example.test");

    let runtime = Runtime::new(
        worker,
        options,
        "test-token".to_string(),
        account.clone(),
        Arc::new(TransactorClient::new(reqwest::Client::new())),
        Arc::new(FulltextClient::new(reqwest::Client::new())),
        storage,
        destroy,
        collaborators.clone(),
        collaborators.clone(),
        collaborators.clone(),
        collaborators.clone(),
    );

    Fixture { runtime, account, collaborators }
}

pub fn workspace(workspace: &str, mode: wlw_core::Mode, progress: Option<u8>, disabled: bool) -> WorkspaceInfo {
    WorkspaceInfo {
        workspace: workspace.to_string(),
        uuid: format!("{workspace}-uuid"),
        branding: None,
        version: Some(Version::new(1, 0, 0)),
        mode: Some(mode),
        progress,
        disabled,
    }
}
