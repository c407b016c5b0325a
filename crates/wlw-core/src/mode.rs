// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace lifecycle mode — the durable state observed from the
//! control-plane. Closed set plus an explicit `Unknown` arm so the
//! dispatcher can log the literal wire value instead of failing to parse.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    PendingCreation,
    Creating,
    Upgrading,
    Active,
    ArchivingPendingBackup,
    ArchivingBackup,
    ArchivingPendingClean,
    ArchivingClean,
    MigrationPendingBackup,
    MigrationBackup,
    MigrationPendingClean,
    MigrationClean,
    PendingRestore,
    Restoring,
    PendingDeletion,
    Deleting,
    /// Any wire value outside the closed set above. `serde(other)` collapses
    /// the original string, so callers that need it for the "Unknown
    /// workspace mode" log line should log the workspace's raw JSON instead.
    #[serde(other)]
    Unknown,
}

impl Mode {
    /// Wire representation: the kebab-case strings the control-plane uses.
    pub fn as_wire_str(&self) -> &str {
        match self {
            Mode::PendingCreation => "pending-creation",
            Mode::Creating => "creating",
            Mode::Upgrading => "upgrading",
            Mode::Active => "active",
            Mode::ArchivingPendingBackup => "archiving-pending-backup",
            Mode::ArchivingBackup => "archiving-backup",
            Mode::ArchivingPendingClean => "archiving-pending-clean",
            Mode::ArchivingClean => "archiving-clean",
            Mode::MigrationPendingBackup => "migration-pending-backup",
            Mode::MigrationBackup => "migration-backup",
            Mode::MigrationPendingClean => "migration-pending-clean",
            Mode::MigrationClean => "migration-clean",
            Mode::PendingRestore => "pending-restore",
            Mode::Restoring => "restoring",
            Mode::PendingDeletion => "pending-deletion",
            Mode::Deleting => "deleting",
            Mode::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognised_wire_value_becomes_unknown() {
        let mode: Mode = serde_json::from_str("\"some-future-mode\"").unwrap();
        assert_eq!(mode, Mode::Unknown);
    }

    #[test]
    fn known_values_round_trip() {
        let mode: Mode = serde_json::from_str("\"archiving-pending-backup\"").unwrap();
        assert_eq!(mode, Mode::ArchivingPendingBackup);
    }
}
