// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transactor maintenance (C8, spec §4.9): force-close live sessions to a
//! workspace before a destructive phase runs. Best-effort — the transactor
//! may already be down, and the destructive action proceeds regardless.

use wlw_wire::{AccountClient, TransactorClient};

/// Fetch the transactor endpoint and issue a force-close, logging and
/// discarding any failure. Never returns an error: callers invoke this and
/// move straight on to the destructive action (spec §4.9).
pub async fn force_close(account: &dyn AccountClient, transactor: &TransactorClient, token: &str, workspace: &str) {
    let endpoint = match account.get_transactor_endpoint(token).await {
        Ok(endpoint) => endpoint,
        Err(err) => {
            tracing::warn!(workspace, error = %err, "could not resolve transactor endpoint; proceeding without force-close");
            return;
        }
    };
    if let Err(err) = transactor.force_close(&endpoint, token).await {
        tracing::warn!(workspace, error = %err, endpoint = %endpoint, "transactor force-close failed; proceeding anyway");
    }
}
