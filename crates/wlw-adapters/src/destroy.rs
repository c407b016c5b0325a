// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Database destroy adapter: resolves a destroy adapter for the configured
//! DB URL and deletes the workspace's database. This crate defines only the
//! trait seam and a scheme-keyed registry, mirroring
//! [`crate::storage::StorageAdapterRegistry`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::AdapterError;

/// Identifies the workspace to destroy.
#[derive(Debug, Clone)]
pub struct DeleteTarget {
    pub name: String,
    pub uuid: String,
}

/// Opaque process-wide variables threaded through to the destroy adapter,
/// e.g. pipeline context vars. The core never inspects their contents.
pub type SharedVars = HashMap<String, Value>;

#[async_trait]
pub trait DestroyAdapter: Send + Sync {
    fn scheme(&self) -> &'static str;

    async fn delete_workspace(
        &self,
        shared: &SharedVars,
        target: &DeleteTarget,
    ) -> Result<(), AdapterError>;
}

#[derive(Default)]
pub struct DestroyAdapterRegistry {
    adapters: HashMap<&'static str, Arc<dyn DestroyAdapter>>,
}

impl DestroyAdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, adapter: Arc<dyn DestroyAdapter>) -> Self {
        self.adapters.insert(adapter.scheme(), adapter);
        self
    }

    pub async fn delete_workspace(
        &self,
        db_url: &Url,
        shared: &SharedVars,
        target: &DeleteTarget,
    ) -> Result<(), AdapterError> {
        let adapter = self
            .adapters
            .get(db_url.scheme())
            .ok_or_else(|| AdapterError::UnknownScheme(db_url.scheme().to_string()))?;
        adapter.delete_workspace(shared, target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopDestroy;

    #[async_trait]
    impl DestroyAdapter for NoopDestroy {
        fn scheme(&self) -> &'static str {
            "mongodb"
        }

        async fn delete_workspace(
            &self,
            _shared: &SharedVars,
            _target: &DeleteTarget,
        ) -> Result<(), AdapterError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn dispatches_by_scheme() {
        let registry = DestroyAdapterRegistry::new().register(Arc::new(NoopDestroy));
        let url: Url = "mongodb://localhost:27017/ws1".parse().unwrap();
        let target = DeleteTarget { name: "ws1".into(), uuid: "u1".into() };
        registry.delete_workspace(&url, &SharedVars::new(), &target).await.unwrap();
    }
}
