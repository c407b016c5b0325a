// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport-level errors. These are the "transient I/O" category that C1's
//! retry wrappers are built to absorb.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("non-success status {status} from {endpoint}")]
    Status { status: u16, endpoint: String },
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl WireError {
    /// Whether this failure is transient and worth a retry. All current
    /// variants are transient by construction (request/transport failures
    /// and server-side statuses); kept as a method so future variants that
    /// represent a permanent client-side misconfiguration can opt out.
    pub fn is_transient(&self) -> bool {
        true
    }
}
