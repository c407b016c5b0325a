// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wlw-adapters: trait seams for the external collaborators this worker
//! depends on but does not implement itself: storage and destroy adapters
//! (selected by DB URL scheme), and the create/upgrade/backup/restore
//! operations themselves. Production implementations live outside this
//! repo; under `test-support` this crate also ships in-memory fakes used
//! by `wlw-engine`'s integration tests.

pub mod backup;
pub mod create;
pub mod destroy;
pub mod error;
pub mod restore;
pub mod storage;
pub mod upgrade;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use backup::{BackupPipeline, BackupStorageConfig};
pub use create::CreateWorkspace;
pub use destroy::{DeleteTarget, DestroyAdapter, DestroyAdapterRegistry, SharedVars};
pub use error::AdapterError;
pub use restore::RestorePipeline;
pub use storage::{StorageAdapter, StorageAdapterFactory, StorageAdapterRegistry};
pub use upgrade::UpgradeWorkspace;
