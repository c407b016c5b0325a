// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress reporter (C2, spec §4.2): debounced monotonic progress updates
//! plus a periodic keepalive ping during long jobs.
//!
//! Every report, marker, and keepalive tick for a given `(workspace, phase)`
//! funnels through a single-consumer channel into one background task, so
//! updates reach the control-plane in the order they were produced (spec §5
//! "Ordering guarantees") even though each individual send is itself async
//! and retried.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use wlw_core::{ProgressSink, Version};
use wlw_wire::{AccountClient, Event};

const KEEPALIVE_INTERVAL: Duration = Duration::from_secs(5);
const PROGRESS_UPDATE_TIMEOUT: Duration = Duration::from_secs(5);

enum Cmd {
    Report(u8),
    Marker(Event, u8, oneshot::Sender<()>),
    Tick,
}

/// Shared, cloneable reporter for a single `(workspace, phase)` execution.
/// Owns the fields a bare callback chain would otherwise close over (spec §9
/// design note: "a small reporter value that owns those fields").
#[derive(Clone)]
pub struct ProgressReporter {
    inner: Arc<Inner>,
}

struct Inner {
    tx: mpsc::UnboundedSender<Cmd>,
    cancel: CancellationToken,
    worker: JoinHandle<()>,
    keepalive: Mutex<Option<JoinHandle<()>>>,
}

impl ProgressReporter {
    pub fn new(
        account: Arc<dyn AccountClient>,
        token: impl Into<String>,
        workspace: impl Into<String>,
        version: Option<Version>,
        cancel: CancellationToken,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(Self::run_worker(account, token.into(), workspace.into(), version, cancel.clone(), rx));
        Self {
            inner: Arc::new(Inner { tx, cancel, worker, keepalive: Mutex::new(None) }),
        }
    }

    async fn run_worker(
        account: Arc<dyn AccountClient>,
        token: String,
        workspace: String,
        version: Option<Version>,
        cancel: CancellationToken,
        mut rx: mpsc::UnboundedReceiver<Cmd>,
    ) {
        let mut last_emitted: Option<u8> = None;
        while let Some(cmd) = rx.recv().await {
            match cmd {
                Cmd::Report(percent) => {
                    if last_emitted == Some(percent) {
                        continue;
                    }
                    last_emitted = Some(percent);
                    Self::send(&account, &token, &workspace, version, &cancel, Event::Progress, percent).await;
                }
                Cmd::Marker(event, percent, ack) => {
                    last_emitted = Some(percent);
                    Self::send(&account, &token, &workspace, version, &cancel, event, percent).await;
                    let _ = ack.send(());
                }
                Cmd::Tick => {
                    let percent = last_emitted.unwrap_or(0);
                    Self::send(&account, &token, &workspace, version, &cancel, Event::Ping, percent).await;
                }
            }
        }
    }

    async fn send(
        account: &Arc<dyn AccountClient>,
        token: &str,
        workspace: &str,
        version: Option<Version>,
        cancel: &CancellationToken,
        event: Event,
        percent: u8,
    ) {
        let result =
            crate::retry::until_timeout(event.as_wire_str(), PROGRESS_UPDATE_TIMEOUT, cancel, || {
                account.update_workspace_info(token, workspace, event, version, percent, None)
            })
            .await;
        if let Err(err) = result {
            tracing::warn!(workspace, event = event.as_wire_str(), error = %err, "progress update failed after retry budget; superseded by next event");
        }
    }

    /// Emit a named phase marker (`<phase>-started`, `<phase>-done`, ...) at
    /// a specific progress value, bypassing debouncing — markers are always
    /// sent (spec §4.2 point 3). Awaits delivery so callers can rely on the
    /// marker having been attempted before proceeding.
    pub async fn marker(&self, event: Event, percent: u8) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.inner.tx.send(Cmd::Marker(event, percent, ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }

    /// Start the 5s keepalive ping loop. Idempotent: calling this twice
    /// replaces the previous handle (aborting it first) rather than
    /// spawning a second ping loop.
    pub fn start_keepalive(&self) {
        self.stop_keepalive();
        let tx = self.inner.tx.clone();
        let cancel = self.inner.cancel.clone();
        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(KEEPALIVE_INTERVAL) => {}
                    _ = cancel.cancelled() => return,
                }
                if tx.send(Cmd::Tick).is_err() {
                    return;
                }
            }
        });
        *self.inner.keepalive.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(handle);
    }

    /// Cancel the keepalive task. Safe to call multiple times; called on
    /// every exit path of a phase handler (spec §4.2 point 4) and from
    /// `Drop` as a backstop.
    pub fn stop_keepalive(&self) {
        if let Some(handle) = self.inner.keepalive.lock().unwrap_or_else(std::sync::PoisonError::into_inner).take() {
            handle.abort();
        }
    }
}

impl ProgressSink for ProgressReporter {
    /// Report a raw (already 0-100) progress value. A report is only sent
    /// over the wire when the rounded value differs from the last emitted
    /// one (spec §4.2 point 2). Fire-and-forget: ordering relative to other
    /// reports/markers is preserved by the single-consumer worker task, not
    /// by waiting here.
    fn report(&self, percent: u8) {
        let _ = self.inner.tx.send(Cmd::Report(percent));
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.keepalive.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
        self.worker.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wlw_core::{Operation, WorkspaceInfo};
    use wlw_wire::WireError;

    #[derive(Default)]
    struct CountingAccount {
        update_calls: AtomicUsize,
        events: Mutex<Vec<(Event, u8)>>,
    }

    #[async_trait]
    impl AccountClient for CountingAccount {
        async fn worker_handshake(&self, _token: &str, _region: &str, _version: wlw_core::Version, _operation: Operation) -> Result<(), WireError> {
            Ok(())
        }

        async fn get_pending_workspace(&self, _token: &str, _region: &str, _version: wlw_core::Version, _operation: Operation) -> Result<Option<WorkspaceInfo>, WireError> {
            Ok(None)
        }

        async fn update_workspace_info(&self, _token: &str, _workspace: &str, event: Event, _version: Option<wlw_core::Version>, progress: u8, _message: Option<&str>) -> Result<(), WireError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            self.events.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push((event, progress));
            Ok(())
        }

        async fn get_transactor_endpoint(&self, _token: &str) -> Result<url::Url, WireError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn reporting_the_same_percent_twice_emits_once() {
        let account = Arc::new(CountingAccount::default());
        let reporter = ProgressReporter::new(account.clone(), "tok", "ws1", None, CancellationToken::new());
        reporter.report(50);
        reporter.report(50);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(account.update_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reporting_a_different_percent_emits_again() {
        let account = Arc::new(CountingAccount::default());
        let reporter = ProgressReporter::new(account.clone(), "tok", "ws1", None, CancellationToken::new());
        reporter.report(10);
        reporter.report(20);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(account.update_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn markers_and_reports_are_emitted_in_order() {
        let account = Arc::new(CountingAccount::default());
        let reporter = ProgressReporter::new(account.clone(), "tok", "ws1", None, CancellationToken::new());
        reporter.marker(Event::CreateStarted, 0).await;
        reporter.report(30);
        reporter.report(60);
        reporter.marker(Event::CreateDone, 100).await;
        let events = account.events.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone();
        assert_eq!(events, vec![(Event::CreateStarted, 0), (Event::Progress, 30), (Event::Progress, 60), (Event::CreateDone, 100)]);
    }

    #[tokio::test]
    async fn keepalive_can_be_started_and_stopped_without_leaking() {
        let account = Arc::new(CountingAccount::default());
        let reporter = ProgressReporter::new(account, "tok", "ws1", None, CancellationToken::new());
        reporter.start_keepalive();
        reporter.stop_keepalive();
        // Calling stop again must not panic.
        reporter.stop_keepalive();
    }
}
