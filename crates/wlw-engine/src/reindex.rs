// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reindex caller (C9, spec §4.10): notify the full-text service that a
//! workspace's index should be rebuilt (or just dropped) after restore or
//! cleanup. Non-2xx is logged and swallowed — the lifecycle event is still
//! reported successful, since reindexing can be retried out-of-band.

use url::Url;
use wlw_wire::FulltextClient;

pub async fn reindex(client: &FulltextClient, fulltext_url: Option<&Url>, token: &str, only_drop: bool, workspace: &str) {
    let Some(fulltext_url) = fulltext_url else {
        return;
    };
    if let Err(err) = client.reindex(fulltext_url, token, only_drop).await {
        tracing::warn!(workspace, only_drop, error = %err, "full-text reindex request failed; workspace transition still reported successful");
    }
}
