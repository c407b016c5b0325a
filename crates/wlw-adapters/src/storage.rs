// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage adapter registry: registered at startup for the schemes
//! `mongodb` and `postgresql`, selecting an adapter by inspecting the
//! configured DB URL's scheme.
//!
//! This crate defines only the trait seam and a scheme-keyed registry;
//! production adapters live outside this workspace. `wlw-engine`'s
//! backup/restore handlers hold a `Box<dyn StorageAdapter>` for the
//! duration of a phase and close it on every exit path.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::error::AdapterError;

/// A live handle to a workspace's backing database, opened for the duration
/// of a single phase (backup, restore, or destructive cleanup).
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Release any held connections/handles. Called exactly once, on every
    /// exit path (success, error, or cancellation) of the phase that opened
    /// this adapter.
    async fn close(&self) -> Result<(), AdapterError>;
}

/// Builds a [`StorageAdapter`] for a given DB URL. One factory per scheme
/// (`mongodb`, `postgresql`).
#[async_trait]
pub trait StorageAdapterFactory: Send + Sync {
    /// The URL scheme this factory handles, e.g. `"mongodb"`.
    fn scheme(&self) -> &'static str;

    async fn open(&self, db_url: &Url) -> Result<Arc<dyn StorageAdapter>, AdapterError>;
}

/// Registered once after handshake; read-only thereafter.
#[derive(Default)]
pub struct StorageAdapterRegistry {
    factories: HashMap<&'static str, Arc<dyn StorageAdapterFactory>>,
}

impl StorageAdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, factory: Arc<dyn StorageAdapterFactory>) -> Self {
        self.factories.insert(factory.scheme(), factory);
        self
    }

    pub async fn open(&self, db_url: &Url) -> Result<Arc<dyn StorageAdapter>, AdapterError> {
        let factory = self
            .factories
            .get(db_url.scheme())
            .ok_or_else(|| AdapterError::UnknownScheme(db_url.scheme().to_string()))?;
        factory.open(db_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopAdapter;

    #[async_trait]
    impl StorageAdapter for NoopAdapter {
        async fn close(&self) -> Result<(), AdapterError> {
            Ok(())
        }
    }

    struct NoopFactory(&'static str);

    #[async_trait]
    impl StorageAdapterFactory for NoopFactory {
        fn scheme(&self) -> &'static str {
            self.0
        }

        async fn open(&self, _db_url: &Url) -> Result<Arc<dyn StorageAdapter>, AdapterError> {
            Ok(Arc::new(NoopAdapter))
        }
    }

    #[tokio::test]
    async fn dispatches_by_scheme() {
        let registry = StorageAdapterRegistry::new()
            .register(Arc::new(NoopFactory("mongodb")))
            .register(Arc::new(NoopFactory("postgresql")));

        let url: Url = "mongodb://localhost:27017/ws1".parse().unwrap();
        let adapter = registry.open(&url).await.unwrap();
        adapter.close().await.unwrap();
    }

    #[tokio::test]
    async fn unknown_scheme_is_rejected() {
        let registry = StorageAdapterRegistry::new();
        let url: Url = "redis://localhost:6379".parse().unwrap();
        assert!(matches!(registry.open(&url).await, Err(AdapterError::UnknownScheme(s)) if s == "redis"));
    }
}
