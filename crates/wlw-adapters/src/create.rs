// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Create-workspace collaborator: model init, indices, and seed data for a
//! brand-new workspace. The actual implementation lives outside this
//! workspace; this crate only names the trait seam the engine drives it through.

use async_trait::async_trait;
use wlw_core::{ProgressSink, WorkspaceInfo};

use crate::error::AdapterError;

#[async_trait]
pub trait CreateWorkspace: Send + Sync {
    /// Run the full create sequence: model init, indices, seed data.
    ///
    /// Not reliably re-entrant — callers must only invoke this when resuming
    /// is safe (see `wlw-engine`'s Create handler).
    async fn create(
        &self,
        workspace: &WorkspaceInfo,
        progress: &dyn ProgressSink,
    ) -> Result<(), AdapterError>;
}
