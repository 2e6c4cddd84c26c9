//! In-memory document store.
//!
//! HashMap-backed store used by tests and by `dopant serve --store memory`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;

use super::document::{Document, ID_FIELD};
use super::filter::{Filter, Projection};
use super::provider::DocumentStore;

/// Document store that keeps every collection in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    next_id: AtomicU64,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add documents to a collection before sharing the store.
    pub fn with_collection(
        mut self,
        collection: impl Into<String>,
        docs: impl IntoIterator<Item = Document>,
    ) -> Self {
        let docs: Vec<Document> = docs.into_iter().map(|d| self.assign_id(d)).collect();
        self.collections
            .get_mut()
            .entry(collection.into())
            .or_default()
            .extend(docs);
        self
    }

    /// Insert a document, assigning an `_id` if it has none. Returns the id.
    pub async fn insert(&self, collection: &str, doc: Document) -> String {
        let doc = self.assign_id(doc);
        let id = doc.id().unwrap_or_default();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        id
    }

    /// Remove every document from a collection.
    pub async fn clear(&self, collection: &str) {
        self.collections.write().await.remove(collection);
    }

    fn assign_id(&self, mut doc: Document) -> Document {
        if !doc.contains(ID_FIELD) {
            let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
            doc.insert(ID_FIELD, format!("{:024x}", n));
        }
        doc
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| match projection {
                Some(p) => p.apply(doc),
                None => doc.clone(),
            })
            .collect())
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }
}
