// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle dispatcher (C6, spec §4.7): pure routing from an observed
//! workspace `mode` to the phase handler responsible for it. All side
//! effects live in the handlers (`crate::handlers`); this module only
//! decides *which* handler runs.

use wlw_core::Mode;

/// One lifecycle phase. Carries `destructive` so callers know whether to
/// invoke the transactor maintenance call (C8) first (spec §4.7 table).
/// `MigrateClean`'s destructiveness is conditional on the `MIGRATION_CLEANUP`
/// environment gate and is therefore resolved by the handler itself, not
/// here — the dispatcher only knows the phase, not the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Create,
    Upgrade,
    ArchiveBackup,
    ArchiveClean,
    MigrateBackup,
    MigrateClean,
    Restore,
    Delete,
}

impl PhaseKind {
    /// Whether this phase unconditionally force-closes transactor sessions
    /// before running (spec §4.7: "Destructive phases must first invoke
    /// C8"). `MigrateClean` is handled separately since it depends on an
    /// environment variable at execution time.
    pub fn unconditionally_destructive(self) -> bool {
        matches!(self, PhaseKind::ArchiveClean | PhaseKind::Delete)
    }
}

/// Maps an observed workspace `mode` to its handler (spec §4.7 table).
/// `mode` defaults to `Active` upstream (see
/// [`wlw_core::WorkspaceInfo::mode_or_active`]) before being passed here.
/// Returns `None` for [`Mode::Unknown`] — the caller logs "Unknown
/// workspace mode" and skips the workspace (spec §3, §7 taxonomy item 4).
pub fn dispatch(mode: &Mode) -> Option<PhaseKind> {
    match mode {
        Mode::PendingCreation | Mode::Creating => Some(PhaseKind::Create),
        Mode::Upgrading | Mode::Active => Some(PhaseKind::Upgrade),
        Mode::ArchivingPendingBackup | Mode::ArchivingBackup => Some(PhaseKind::ArchiveBackup),
        Mode::ArchivingPendingClean | Mode::ArchivingClean => Some(PhaseKind::ArchiveClean),
        Mode::MigrationPendingBackup | Mode::MigrationBackup => Some(PhaseKind::MigrateBackup),
        Mode::MigrationPendingClean | Mode::MigrationClean => Some(PhaseKind::MigrateClean),
        Mode::PendingRestore | Mode::Restoring => Some(PhaseKind::Restore),
        Mode::PendingDeletion | Mode::Deleting => Some(PhaseKind::Delete),
        Mode::Unknown => None,
    }
}
