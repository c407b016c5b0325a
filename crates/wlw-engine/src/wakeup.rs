// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Idle sleep with wake-up (spec §4.5): a one-shot, cancellable rendezvous
//! that lets a freed concurrency slot shorten the poller's idle wait.
//!
//! Realised with [`tokio::sync::Notify`] rather than a mutable handle swap:
//! `Notify` coalesces permits and a fresh call to `notified()` is
//! automatically "reset to a no-op" after the previous wait resolved, which
//! is exactly the behaviour spec §4.5 asks for ("after resolution, `wakeup`
//! is reset to a no-op default") without needing to model it explicitly.

use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Clone, Default)]
pub struct Wakeup {
    notify: Arc<Notify>,
}

impl Wakeup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the wake-up. Coalesces with any other pending `notify()` calls;
    /// safe to call with no waiter present (§4.5: firing when idle is a
    /// no-op until the next `idle_sleep` call arms a waiter).
    pub fn notify(&self) {
        self.notify.notify_one();
    }

    /// Await the next notification. Each call is independent: once it
    /// resolves, the signal is consumed (spec's "reset to no-op").
    pub fn notified_future(&self) -> impl std::future::Future<Output = ()> + '_ {
        self.notify.notified()
    }
}

/// Sleep for `duration`, or until cancelled, or until `wakeup` fires —
/// whichever happens first (spec §4.4 step (d), §4.5).
pub async fn idle_sleep(duration: std::time::Duration, wakeup: &Wakeup, cancel: &tokio_util::sync::CancellationToken) {
    tokio::select! {
        _ = tokio::time::sleep(duration) => {}
        _ = wakeup.notified_future() => {}
        _ = cancel.cancelled() => {}
    }
}
