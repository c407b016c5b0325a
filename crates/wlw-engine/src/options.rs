// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime options (spec §6 CLI/options surface): `errorHandler, force,
//! console, logs (dir), ignore, waitTimeout, backup?{backupStorage,
//! bucketName}`. Distinct from [`wlw_core::WorkerOptions`], which is the
//! immutable worker *identity*; these are knobs for how the engine behaves
//! while driving jobs.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use url::Url;
use wlw_adapters::BackupStorageConfig;

use crate::error::EngineError;

/// Default idle-sleep duration used when the daemon doesn't override it.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Invoked by a phase handler when the phase fails (spec §4.8 "On
/// exception: invoke the configured `errorHandler(workspace, err)`").
/// Distinct from the telemetry hook in `crate::runtime::Runtime` — this is
/// the *caller-supplied* handler; it runs in addition to, not instead of,
/// logging (spec §9 design note: "route every swallowed error through a
/// telemetry hook so operators retain visibility").
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, workspace: &str, err: &EngineError);
}

/// Default handler: logs at `error` level and nothing else.
pub struct LoggingErrorHandler;

impl ErrorHandler for LoggingErrorHandler {
    fn handle(&self, workspace: &str, err: &EngineError) {
        tracing::error!(workspace, error = %err, "phase failed");
    }
}

pub struct RuntimeOptions {
    pub error_handler: Arc<dyn ErrorHandler>,
    /// Forwarded to `UpgradeWorkspace::upgrade`'s `force` parameter.
    pub force: bool,
    /// `None` means stream to the process's own tracing output (spec
    /// §6 `console = true`); `Some(dir)` means `<dir>/<workspace>.log`.
    pub logs_dir: Option<PathBuf>,
    /// Workspace names the Upgrade handler skips unconditionally.
    pub ignore: HashSet<String>,
    /// Idle-sleep duration for the job poller (spec §4.5 `waitTimeout`).
    pub wait_timeout: Duration,
    pub backup: Option<BackupStorageConfig>,
    /// Base database URL the Create/Upgrade/ArchiveBackup/MigrateBackup/
    /// Restore/ArchiveClean/Delete/MigrateClean handlers resolve a storage
    /// or destroy adapter against (spec §4.8: "from environment" / "the
    /// configured DB URL"). The scheme selects the adapter; the per-workspace
    /// database is addressed by rewriting the path to the workspace id, see
    /// `Runtime::workspace_db_url`.
    pub db_url: Url,
    /// Root domain blob storage for a restored workspace is scoped under
    /// (spec §4.8 Restore: "restricted to the blob domain").
    pub blob_domain: String,
}

impl RuntimeOptions {
    /// `db_url` and `blob_domain` have no sensible default; everything else
    /// matches the daemon's stated CLI defaults.
    pub fn new(db_url: Url, blob_domain: impl Into<String>) -> Self {
        Self {
            error_handler: Arc::new(LoggingErrorHandler),
            force: false,
            logs_dir: None,
            ignore: HashSet::new(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            backup: None,
            db_url,
            blob_domain: blob_domain.into(),
        }
    }
}
