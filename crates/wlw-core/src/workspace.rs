// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace snapshot as received from the control-plane.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;
use crate::version::Version;

/// A point-in-time snapshot of a workspace's state. Never mutated locally —
/// every phase handler treats this as read-only input and reports back via
/// the progress reporter rather than rewriting fields here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub workspace: String,
    pub uuid: String,
    #[serde(default)]
    pub branding: Option<String>,
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub disabled: bool,
}

impl WorkspaceInfo {
    /// Mode defaults to `Active` when absent.
    pub fn mode_or_active(&self) -> Mode {
        self.mode.clone().unwrap_or(Mode::Active)
    }

    pub fn progress_or_zero(&self) -> u8 {
        self.progress.unwrap_or(0)
    }
}
