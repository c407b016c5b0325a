// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backup pipeline collaborator: a backup pipeline bound to the workspace's
//! DB URL and transaction set, invoking an external backup operation.

use async_trait::async_trait;
use url::Url;
use wlw_core::ProgressSink;

use crate::error::AdapterError;

/// Where backup blobs are written. Opaque to the core beyond construction.
#[derive(Debug, Clone)]
pub struct BackupStorageConfig {
    pub backup_storage: String,
    pub bucket_name: String,
}

#[async_trait]
pub trait BackupPipeline: Send + Sync {
    /// Runs the backup. `full_check = true` additionally verifies blob
    /// integrity — used for archive, not migration, since migration is
    /// time-critical. Returns `true` on a successful result.
    async fn do_backup(
        &self,
        db_url: &Url,
        transactions: &[String],
        full_check: bool,
        progress: &dyn ProgressSink,
    ) -> Result<bool, AdapterError>;
}
