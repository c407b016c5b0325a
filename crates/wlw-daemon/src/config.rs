// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading: an optional TOML file merged under CLI flags,
//! following the corpus convention of a `serde`-derived config struct
//! (spec §11 Ambient Stack) rather than hand-rolled env parsing. CLI flags
//! always win; the file exists so a fleet can ship most settings once and
//! vary only what differs per worker (e.g. `--region`) on the command line.

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use wlw_adapters::BackupStorageConfig;
use wlw_core::{Branding, CoreError, Operation, Version, WorkerOptions};
use wlw_engine::options::DEFAULT_WAIT_TIMEOUT;
use wlw_engine::RuntimeOptions;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error("invalid {field}: {source}")]
    InvalidValue { field: &'static str, #[source] source: CoreError },
    #[error("invalid url for {field}: {source}")]
    InvalidUrl { field: &'static str, #[source] source: url::ParseError },
    #[error("failed to read config file {path}: {source}")]
    ReadFile { path: PathBuf, #[source] source: std::io::Error },
    #[error("failed to parse config file {path}: {source}")]
    ParseFile { path: PathBuf, #[source] source: toml::de::Error },
    #[error("failed to read brandings file {path}: {source}")]
    ReadBrandings { path: PathBuf, #[source] source: std::io::Error },
    #[error("failed to parse brandings file {path}: {source}")]
    ParseBrandings { path: PathBuf, #[source] source: serde_json::Error },
}

/// Mirrors every [`Cli`] field that may instead be supplied by a config
/// file. Every field is optional; a CLI flag always overrides the matching
/// file value (see [`Config::resolve`]).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    token: Option<String>,
    account_url: Option<String>,
    region: Option<String>,
    version: Option<String>,
    limit: Option<u32>,
    operation: Option<String>,
    migration_operation: Option<String>,
    txes: Option<Vec<String>>,
    brandings: Option<PathBuf>,
    fulltext_url: Option<String>,
    db_url: Option<String>,
    blob_domain: Option<String>,
    logs: Option<PathBuf>,
    console: Option<bool>,
    ignore: Option<Vec<String>>,
    wait_timeout_ms: Option<u64>,
    force: Option<bool>,
    backup_storage: Option<String>,
    bucket_name: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        toml::from_str(&raw).map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
    }
}

/// Everything needed to build a [`wlw_engine::Runtime`]: worker identity,
/// runtime options, and the control-plane token — resolved from CLI flags
/// layered over an optional file, per spec §11.
pub struct Config {
    pub token: String,
    pub account_url: Url,
    pub worker: WorkerOptions,
    pub options: RuntimeOptions,
}

/// First non-`None` of `cli`, `file`; falls back to `default` only if both
/// resolve to `None`.
fn pick<T>(cli: Option<T>, file: Option<T>) -> Option<T> {
    cli.or(file)
}

impl Config {
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let token = pick(cli.token, file.token).ok_or(ConfigError::Missing("token"))?;

        let account_url_str =
            pick(cli.account_url, file.account_url).ok_or(ConfigError::Missing("account_url"))?;
        let account_url = Url::parse(&account_url_str)
            .map_err(|source| ConfigError::InvalidUrl { field: "account_url", source })?;

        let region = pick(cli.region, file.region).unwrap_or_default();

        let version_str = pick(cli.version, file.version).ok_or(ConfigError::Missing("version"))?;
        let version = Version::from_str(&version_str)
            .map_err(|source| ConfigError::InvalidValue { field: "version", source })?;

        let limit = pick(cli.limit, file.limit).unwrap_or(1);
        let limit = NonZeroU32::new(limit).ok_or(ConfigError::Missing("limit (must be >= 1)"))?;

        let operation_str = pick(cli.operation, file.operation).unwrap_or_else(|| "all".to_string());
        let operation = Operation::from_str(&operation_str)
            .map_err(|source| ConfigError::InvalidValue { field: "operation", source })?;

        let migration_operation = match pick(cli.migration_operation, file.migration_operation) {
            Some(s) => Some(
                Operation::from_str(&s)
                    .map_err(|source| ConfigError::InvalidValue { field: "migration_operation", source })?,
            ),
            None => None,
        };

        let txes = pick(cli.txes, file.txes).unwrap_or_default();

        let brandings = match pick(cli.brandings, file.brandings) {
            Some(path) => load_brandings(&path)?,
            None => HashMap::new(),
        };

        let fulltext_url = match pick(cli.fulltext_url, file.fulltext_url) {
            Some(raw) => {
                Some(Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { field: "fulltext_url", source })?)
            }
            None => None,
        };

        let db_url_str = pick(cli.db_url, file.db_url).ok_or(ConfigError::Missing("db_url"))?;
        let db_url =
            Url::parse(&db_url_str).map_err(|source| ConfigError::InvalidUrl { field: "db_url", source })?;

        let blob_domain = pick(cli.blob_domain, file.blob_domain).ok_or(ConfigError::Missing("blob_domain"))?;

        let console = cli.console || file.console.unwrap_or(false);
        let logs_dir = if console { None } else { pick(cli.logs, file.logs) };

        let ignore = pick(cli.ignore, file.ignore).unwrap_or_default().into_iter().collect();

        let wait_timeout = pick(cli.wait_timeout_ms, file.wait_timeout_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_WAIT_TIMEOUT);

        let force = cli.force || file.force.unwrap_or(false);

        let backup_storage = pick(cli.backup_storage, file.backup_storage);
        let bucket_name = pick(cli.bucket_name, file.bucket_name);
        let backup = match (backup_storage, bucket_name) {
            (Some(backup_storage), Some(bucket_name)) => Some(BackupStorageConfig { backup_storage, bucket_name }),
            (None, None) => None,
            _ => return Err(ConfigError::Missing("backup_storage and bucket_name must be set together")),
        };

        let worker = WorkerOptions {
            version,
            region,
            limit,
            operation,
            brandings,
            fulltext_url,
            txes,
            migration_operation,
        };

        let mut options = RuntimeOptions::new(db_url, blob_domain);
        options.force = force;
        options.logs_dir = logs_dir;
        options.ignore = ignore;
        options.wait_timeout = wait_timeout;
        options.backup = backup;

        Ok(Self { token, account_url, worker, options })
    }
}

fn load_brandings(path: &Path) -> Result<HashMap<String, Branding>, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadBrandings { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseBrandings { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_cli() -> Cli {
        Cli {
            token: Some("tok".to_string()),
            account_url: Some("https://account.example.test/rpc".to_string()),
            version: Some("1.0.0".to_string()),
            db_url: Some("mongodb://localhost:27017/base".to_string()),
            blob_domain: Some("blobs.example.test".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn resolves_minimal_cli_with_defaults() {
        let config = Config::resolve(minimal_cli()).unwrap();
        assert_eq!(config.token, "tok");
        assert_eq!(config.worker.operation, Operation::All);
        assert_eq!(config.worker.limit.get(), 1);
        assert_eq!(config.options.wait_timeout, DEFAULT_WAIT_TIMEOUT);
    }

    #[test]
    fn missing_required_field_is_reported() {
        let cli = Cli { token: None, ..minimal_cli() };
        let err = Config::resolve(cli).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("token")));
    }

    #[test]
    fn console_flag_disables_logs_dir() {
        let cli = Cli { console: true, logs: Some(PathBuf::from("/tmp/wlw-logs")), ..minimal_cli() };
        let config = Config::resolve(cli).unwrap();
        assert!(config.options.logs_dir.is_none());
    }

    #[test]
    fn file_config_is_overridden_by_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wlw.toml");
        std::fs::write(&path, "region = \"file-region\"\nlimit = 9\n").unwrap();

        let cli = Cli { config: Some(path), region: Some("cli-region".to_string()), ..minimal_cli() };
        let config = Config::resolve(cli).unwrap();
        assert_eq!(config.worker.region, "cli-region");
        assert_eq!(config.worker.limit.get(), 9, "limit came only from the file");
    }

    #[test]
    fn backup_requires_both_fields() {
        let cli = Cli { backup_storage: Some("s3".to_string()), ..minimal_cli() };
        let err = Config::resolve(cli).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }
}
