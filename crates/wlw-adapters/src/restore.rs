// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Restore pipeline collaborator: invokes an external restore operation
//! restricted to the workspace's blob domain.

use async_trait::async_trait;
use url::Url;
use wlw_core::ProgressSink;

use crate::error::AdapterError;

#[async_trait]
pub trait RestorePipeline: Send + Sync {
    /// `blob_domain` restricts the restore to the workspace's own blob
    /// storage namespace — the pipeline must not read or write outside it.
    async fn do_restore_workspace(
        &self,
        db_url: &Url,
        blob_domain: &str,
        progress: &dyn ProgressSink,
    ) -> Result<bool, AdapterError>;
}
