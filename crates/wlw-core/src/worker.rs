// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker identity: immutable for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU32;

use crate::operation::Operation;
use crate::version::Version;

/// Opaque per-branding passthrough data, forwarded verbatim to the create
/// and upgrade collaborators. The core never interprets its fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branding {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Worker identity, established once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct WorkerOptions {
    pub version: Version,
    pub region: String,
    pub limit: NonZeroU32,
    pub operation: Operation,
    pub brandings: HashMap<String, Branding>,
    pub fulltext_url: Option<url::Url>,
    /// Transaction/model ids forwarded verbatim to the upgrade and backup
    /// collaborators.
    pub txes: Vec<String>,
    /// Declared operation capability for migration-specific jobs, separate
    /// from `operation`. `None` means migration phases are matched using
    /// `operation` like everything else.
    pub migration_operation: Option<Operation>,
}

impl WorkerOptions {
    /// Empty region means "default region".
    pub fn region_or_default(&self) -> &str {
        if self.region.is_empty() {
            "default"
        } else {
            &self.region
        }
    }
}
