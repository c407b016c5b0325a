// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upgrade-workspace collaborator: invokes an external migration runner
//! against a target version, transaction set, and workspace. The external
//! operation is itself re-entrant.

use async_trait::async_trait;
use wlw_core::{ProgressSink, Version, WorkspaceInfo};

use crate::error::AdapterError;

#[async_trait]
pub trait UpgradeWorkspace: Send + Sync {
    /// Re-entrant: safe to call again if a previous attempt was interrupted.
    ///
    /// `transactions` are the transaction/model ids the upgrade migrations
    /// run against; `force` mirrors the worker's `--force` runtime option.
    async fn upgrade(
        &self,
        target_version: Version,
        transactions: &[String],
        workspace: &WorkspaceInfo,
        force: bool,
        progress: &dyn ProgressSink,
    ) -> Result<(), AdapterError>;
}
