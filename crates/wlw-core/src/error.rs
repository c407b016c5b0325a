// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Domain-level errors: malformed wire values, not transport failures.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid version string: {0}")]
    InvalidVersion(String),
    #[error("invalid operation string: {0}")]
    InvalidOperation(String),
}
