// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handshake client: announce worker capability to the control-plane and
//! block until accepted before polling for work.

use tokio_util::sync::CancellationToken;
use wlw_core::{Operation, Version};
use wlw_wire::AccountClient;

use crate::retry::{until_success, Cancelled};

/// Blocks (retrying indefinitely under [`until_success`]) until the
/// control-plane acknowledges this worker's `(region, version, operation)`.
/// A successful handshake only means the control-plane is aware of this
/// worker's capabilities — it does not imply any work is available.
pub async fn handshake(
    account: &dyn AccountClient,
    token: &str,
    region: &str,
    version: Version,
    operation: Operation,
    cancel: &CancellationToken,
) -> Result<(), Cancelled> {
    until_success("handshake", cancel, || account.worker_handshake(token, region, version, operation)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use wlw_core::WorkspaceInfo;
    use wlw_wire::{Event, WireError};

    struct FlakyAccount {
        failures_remaining: AtomicU32,
    }

    #[async_trait]
    impl AccountClient for FlakyAccount {
        async fn worker_handshake(&self, _token: &str, _region: &str, _version: Version, _operation: Operation) -> Result<(), WireError> {
            if self.failures_remaining.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1)).is_ok() {
                return Err(WireError::Status { status: 503, endpoint: "handshake".into() });
            }
            Ok(())
        }

        async fn get_pending_workspace(&self, _token: &str, _region: &str, _version: Version, _operation: Operation) -> Result<Option<WorkspaceInfo>, WireError> {
            Ok(None)
        }

        async fn update_workspace_info(&self, _token: &str, _workspace: &str, _event: Event, _version: Option<Version>, _progress: u8, _message: Option<&str>) -> Result<(), WireError> {
            Ok(())
        }

        async fn get_transactor_endpoint(&self, _token: &str) -> Result<url::Url, WireError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn retries_until_accepted() {
        let account = FlakyAccount { failures_remaining: AtomicU32::new(2) };
        let cancel = CancellationToken::new();
        let result = handshake(&account, "tok", "us-east", Version::new(1, 0, 0), Operation::All, &cancel).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn idempotent_repeated_calls_both_succeed() {
        let account = FlakyAccount { failures_remaining: AtomicU32::new(0) };
        let cancel = CancellationToken::new();
        handshake(&account, "tok", "us-east", Version::new(1, 0, 0), Operation::All, &cancel).await.unwrap();
        handshake(&account, "tok", "us-east", Version::new(1, 0, 0), Operation::All, &cancel).await.unwrap();
    }
}
