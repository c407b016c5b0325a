// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregated engine error: wraps core/wire/adapter failures plus a
//! phase-level failure and an unknown-mode case. Never escapes a dispatched
//! job's task boundary — see `crate::handlers::dispatch_one`.

use thiserror::Error;
use wlw_adapters::AdapterError;
use wlw_core::CoreError;
use wlw_wire::WireError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Wire(#[from] WireError),
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error("unknown workspace mode: {0}")]
    UnknownMode(String),
    #[error("phase failed for workspace '{workspace}': {source}")]
    PhaseFailed { workspace: String, #[source] source: AdapterError },
}
