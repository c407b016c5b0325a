// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrency gate (C5, spec §4.6): caps in-flight jobs at `limit`. A
//! thin wrapper around [`tokio::sync::Semaphore`] whose RAII permit fires
//! the idle-sleep wake-up ([`crate::wakeup::Wakeup`]) on release, per spec
//! §4.5 ("an implementation MAY invoke wakeup when runningTasks drops below
//! limit to reduce latency").

use std::num::NonZeroU32;
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::wakeup::Wakeup;

#[derive(Clone)]
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    limit: u32,
    wakeup: Wakeup,
}

/// RAII handle for one occupied slot. Dropping it (on any exit path —
/// success, error, or panic unwind) releases the slot and notifies the
/// poller's idle sleep.
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
    wakeup: Wakeup,
}

impl Drop for GatePermit {
    fn drop(&mut self) {
        self.wakeup.notify();
    }
}

impl ConcurrencyGate {
    pub fn new(limit: NonZeroU32, wakeup: Wakeup) -> Self {
        Self { semaphore: Arc::new(Semaphore::new(limit.get() as usize)), limit: limit.get(), wakeup }
    }

    /// Blocks until a slot is free, matching spec §4.6: "`acquire()` returns
    /// immediately if `runningTasks < limit`, else suspends until a slot is
    /// released."
    pub async fn acquire(&self) -> GatePermit {
        // The semaphore is never closed, so `acquire_owned` cannot fail.
        #[allow(clippy::unwrap_used)]
        let permit = self.semaphore.clone().acquire_owned().await.unwrap();
        GatePermit { _permit: permit, wakeup: self.wakeup.clone() }
    }

    /// `limit - available_permits`, i.e. the number of jobs currently in
    /// flight. Exposed for tests and invariant assertions (spec §8).
    pub fn running_tasks(&self) -> u32 {
        self.limit - self.semaphore.available_permits() as u32
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;
    use std::time::Duration;

    #[tokio::test]
    async fn limit_one_forces_serialisation() {
        let gate = ConcurrencyGate::new(NonZeroU32::new(1).unwrap(), Wakeup::new());
        let permit = gate.acquire().await;
        assert_eq!(gate.running_tasks(), 1);

        let gate2 = gate.clone();
        let acquired_second = tokio::spawn(async move {
            let _p = gate2.acquire().await;
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!acquired_second.is_finished());

        drop(permit);
        acquired_second.await.unwrap();
        assert_eq!(gate.running_tasks(), 0);
    }

    #[tokio::test]
    async fn release_never_drops_running_tasks_below_zero() {
        let gate = ConcurrencyGate::new(NonZeroU32::new(2).unwrap(), Wakeup::new());
        let p1 = gate.acquire().await;
        let p2 = gate.acquire().await;
        assert_eq!(gate.running_tasks(), 2);
        drop(p1);
        drop(p2);
        assert_eq!(gate.running_tasks(), 0);
    }

    #[tokio::test]
    async fn release_notifies_idle_sleep_wakeup() {
        let wakeup = Wakeup::new();
        let gate = ConcurrencyGate::new(NonZeroU32::new(1).unwrap(), wakeup.clone());
        let permit = gate.acquire().await;
        let notified = wakeup.notified_future();
        drop(permit);
        tokio::time::timeout(Duration::from_millis(100), notified).await.expect("wakeup should fire on release");
    }
}
