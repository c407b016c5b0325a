// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry wrappers (C1, spec §4.1): `until_success` retries forever with
//! bounded backoff; `until_timeout` retries until a cumulative time budget
//! is exhausted. Both poll a [`CancellationToken`] between attempts and
//! propagate cancellation rather than swallowing it.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(30);
const BACKOFF_MULTIPLIER: f64 = 2.0;
const JITTER_FRACTION: f64 = 0.2;

/// Returned by [`until_success`]/[`until_timeout`] when the caller's
/// [`CancellationToken`] fires mid-retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("retry cancelled")]
pub struct Cancelled;

/// Doubles `current` (capped at [`MAX_BACKOFF`]) and applies ±20% jitter.
fn next_backoff(current: Duration) -> Duration {
    let doubled = current.mul_f64(BACKOFF_MULTIPLIER).min(MAX_BACKOFF);
    let jitter = rand::thread_rng().gen_range(1.0 - JITTER_FRACTION..=1.0 + JITTER_FRACTION);
    doubled.mul_f64(jitter).min(MAX_BACKOFF)
}

/// Retry `f` forever on failure, with bounded exponential backoff (1s .. 30s,
/// ±20% jitter). Used where there is no meaningful user-facing timeout:
/// handshake and job pickup (spec §4.1).
///
/// Returns `Err(Cancelled)` if `cancel` fires while waiting between retries.
pub async fn until_success<T, E, F, Fut>(
    label: &str,
    cancel: &CancellationToken,
    mut f: F,
) -> Result<T, Cancelled>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut backoff = INITIAL_BACKOFF;
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        match f().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::warn!(label, attempt, error = %err, backoff_ms = backoff.as_millis() as u64, "retrying after transient failure");
                tokio::select! {
                    _ = tokio::time::sleep(backoff) => {}
                    _ = cancel.cancelled() => return Err(Cancelled),
                }
                backoff = next_backoff(backoff);
            }
        }
    }
}

/// Retry `f` with the same backoff policy as [`until_success`], but give up
/// once cumulative elapsed time exceeds `timeout`, returning the last error.
/// Used for progress/ping updates (spec §4.1, t = 5s) so a dead
/// control-plane does not stall a running job permanently.
pub async fn until_timeout<T, E, F, Fut>(
    label: &str,
    timeout: Duration,
    cancel: &CancellationToken,
    mut f: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let started = tokio::time::Instant::now();
    let mut backoff = INITIAL_BACKOFF;
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        match f().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                let elapsed = started.elapsed();
                if elapsed >= timeout {
                    tracing::warn!(label, attempt, elapsed_ms = elapsed.as_millis() as u64, error = %err, "giving up after timeout budget exhausted");
                    return Err(err);
                }
                tracing::warn!(label, attempt, elapsed_ms = elapsed.as_millis() as u64, error = %err, "retrying after transient failure");
                let remaining = timeout.saturating_sub(elapsed);
                tokio::select! {
                    _ = tokio::time::sleep(backoff.min(remaining)) => {}
                    _ = cancel.cancelled() => return Err(err),
                }
                backoff = next_backoff(backoff);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn until_success_returns_first_success() {
        let cancel = CancellationToken::new();
        let attempts = AtomicU32::new(0);
        let result = until_success("test", &cancel, || async {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            if n < 2 { Err("transient") } else { Ok(42) }
        })
        .await;
        assert_eq!(result, Ok(42));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn until_success_stops_on_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result: Result<i32, Cancelled> = until_success("test", &cancel, || async { Err::<i32, &str>("always fails") }).await;
        assert_eq!(result, Err(Cancelled));
    }

    #[tokio::test]
    async fn until_timeout_gives_up_after_budget() {
        let cancel = CancellationToken::new();
        let attempts = AtomicU32::new(0);
        let result = until_timeout("test", Duration::from_millis(50), &cancel, || async {
            attempts.fetch_add(1, Ordering::SeqCst);
            Err::<i32, &str>("always fails")
        })
        .await;
        assert!(result.is_err());
        assert!(attempts.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn until_timeout_returns_success_before_budget() {
        let cancel = CancellationToken::new();
        let result = until_timeout("test", Duration::from_secs(5), &cancel, || async { Ok::<_, &str>(7) }).await;
        assert_eq!(result, Ok(7));
    }
}
