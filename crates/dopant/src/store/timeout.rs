//! Per-call deadline for any document store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{DopantError, Result};

use super::document::Document;
use super::filter::{Filter, Projection};
use super::provider::DocumentStore;

/// Wraps a store so every call fails with [`DopantError::Store`] once
/// `timeout` elapses.
pub struct TimeoutStore {
    inner: Arc<dyn DocumentStore>,
    timeout: Duration,
}

impl TimeoutStore {
    /// Wrap `inner` with a per-call deadline.
    pub fn new(inner: Arc<dyn DocumentStore>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T>(
        &self,
        operation: &str,
        fut: impl std::future::Future<Output = Result<T>> + Send,
    ) -> Result<T> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(DopantError::Store(format!(
                "{} on '{}' timed out after {} ms",
                operation,
                self.inner.name(),
                self.timeout.as_millis()
            ))),
        }
    }
}

#[async_trait]
impl DocumentStore for TimeoutStore {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        self.bounded("list_collections", self.inner.list_collections())
            .await
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Document>> {
        self.bounded("find", self.inner.find(collection, filter, projection))
            .await
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        self.bounded("find_one", self.inner.find_one(collection, filter))
            .await
    }
}
