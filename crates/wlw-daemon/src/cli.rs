// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface (spec §6 "CLI/options surface"): everything the
//! worker needs to construct its identity (`wlw_core::WorkerOptions`) and
//! its runtime behaviour (`wlw_engine::RuntimeOptions`). Every field is
//! optional here so [`crate::config::Config::resolve`] can layer CLI flags
//! over an optional config file without a flag's clap-level default
//! masking a value set only in the file.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "wlw", version, about = "Workspace lifecycle worker")]
pub struct Cli {
    /// Path to an optional TOML config file; CLI flags take precedence over
    /// values it sets.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Control-plane auth token. Falls back to `WLW_TOKEN` if unset here and
    /// in the config file.
    #[arg(long, env = "WLW_TOKEN")]
    pub token: Option<String>,

    /// Account/control-plane service base URL, e.g. `https://account.example.test/rpc`.
    #[arg(long)]
    pub account_url: Option<String>,

    /// Declared region; empty/omitted means "default region" (spec §3).
    #[arg(long)]
    pub region: Option<String>,

    /// This worker's version triple, e.g. `1.4.0`.
    #[arg(long)]
    pub version: Option<String>,

    /// Max concurrent jobs.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Declared operation capability: create|upgrade|all|all+backup.
    #[arg(long)]
    pub operation: Option<String>,

    /// Separate operation capability for migration jobs; defaults to
    /// `operation` when unset (spec §3 `operation`).
    #[arg(long)]
    pub migration_operation: Option<String>,

    /// Transaction/model ids forwarded to upgrade and backup collaborators.
    #[arg(long, value_delimiter = ',')]
    pub txes: Option<Vec<String>>,

    /// Path to a JSON file mapping branding name -> branding record.
    #[arg(long)]
    pub brandings: Option<PathBuf>,

    /// Full-text service base URL. Omitted disables the reindex caller (C9).
    #[arg(long)]
    pub fulltext_url: Option<String>,

    /// Base database URL whose scheme selects the storage/destroy adapter
    /// and whose path is rewritten per-workspace.
    #[arg(long)]
    pub db_url: Option<String>,

    /// Root domain restored blob storage is scoped under.
    #[arg(long)]
    pub blob_domain: Option<String>,

    /// Directory for per-workspace phase logs. Omitted (or `--console`)
    /// streams phase logs to this process's own tracing output instead.
    #[arg(long)]
    pub logs: Option<PathBuf>,

    /// Stream per-workspace phase logs to stdout instead of `--logs`.
    #[arg(long)]
    pub console: bool,

    /// Comma-separated workspace names the Upgrade handler always skips.
    #[arg(long, value_delimiter = ',')]
    pub ignore: Option<Vec<String>>,

    /// Idle-sleep duration in milliseconds (spec §4.5 `waitTimeout`).
    #[arg(long)]
    pub wait_timeout_ms: Option<u64>,

    /// Forwarded to `UpgradeWorkspace::upgrade`'s `force` parameter.
    #[arg(long)]
    pub force: bool,

    /// Backup blob storage backend identifier.
    #[arg(long)]
    pub backup_storage: Option<String>,

    /// Backup bucket name; required alongside `--backup-storage`.
    #[arg(long)]
    pub bucket_name: Option<String>,
}
