// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress callback seam shared between `wlw-adapters` and `wlw-engine`.
//!
//! The external collaborators in `wlw-adapters` (create, upgrade, backup,
//! restore) need to stream progress back to the control-plane while they
//! run, but they must not depend on `wlw-engine` (which depends on them).
//! This trait is the seam: `wlw-engine::ProgressReporter` implements it,
//! adapters only see the trait object.

/// Receives progress updates (0-100) from a long-running external operation.
///
/// Implementations are expected to debounce and round; callers may report
/// the same or a decreasing value without needing to track state
/// themselves.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8);
}

/// A sink that discards every report. Used by adapter unit tests and by
/// callers that don't care about intermediate progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn report(&self, _percent: u8) {}
}
