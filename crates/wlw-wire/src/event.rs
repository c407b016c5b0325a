// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event vocabulary sent back to the control-plane in `updateWorkspaceInfo`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Event {
    Ping,
    CreateStarted,
    Progress,
    CreateDone,
    UpgradeStarted,
    UpgradeDone,
    ArchivingBackupStarted,
    ArchivingBackupDone,
    ArchivingCleanStarted,
    ArchivingCleanDone,
    DeleteStarted,
    DeleteDone,
    MigrateBackupStarted,
    MigrateBackupDone,
    MigrateCleanStarted,
    MigrateCleanDone,
    RestoreStarted,
    RestoreDone,
}

impl Event {
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Event::Ping => "ping",
            Event::CreateStarted => "create-started",
            Event::Progress => "progress",
            Event::CreateDone => "create-done",
            Event::UpgradeStarted => "upgrade-started",
            Event::UpgradeDone => "upgrade-done",
            Event::ArchivingBackupStarted => "archiving-backup-started",
            Event::ArchivingBackupDone => "archiving-backup-done",
            Event::ArchivingCleanStarted => "archiving-clean-started",
            Event::ArchivingCleanDone => "archiving-clean-done",
            Event::DeleteStarted => "delete-started",
            Event::DeleteDone => "delete-done",
            Event::MigrateBackupStarted => "migrate-backup-started",
            Event::MigrateBackupDone => "migrate-backup-done",
            Event::MigrateCleanStarted => "migrate-clean-started",
            Event::MigrateCleanDone => "migrate-clean-done",
            Event::RestoreStarted => "restore-started",
            Event::RestoreDone => "restore-done",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}
