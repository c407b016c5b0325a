// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from the external collaborators this crate only defines trait
//! seams for: the actual schema migration, backup/restore byte-pumping,
//! and storage/destroy adapters. `wlw-engine` treats every variant as a
//! phase-level failure; none of these are retried, since retrying a
//! half-run migration is not safe.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("no storage/destroy adapter registered for scheme '{0}'")]
    UnknownScheme(String),
    #[error("{collaborator} failed for workspace '{workspace}': {message}")]
    OperationFailed { collaborator: &'static str, workspace: String, message: String },
    #[error("{0}")]
    Other(String),
}
