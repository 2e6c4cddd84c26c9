//! Document store trait.

use async_trait::async_trait;

use crate::error::Result;

use super::document::Document;
use super::filter::{Filter, Projection};

/// Trait for document store backends.
///
/// Implementations must be thread-safe (Send + Sync) so a single store can be
/// shared by every request handler. All methods are async; a backend that
/// touches the disk or the network must not block the calling task.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of this backend (for logging and status output).
    fn name(&self) -> &str;

    /// List the names of all collections, sorted.
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// Return every document in `collection` matching `filter`.
    ///
    /// A collection that does not exist yields an empty list, not an error.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Document>>;

    /// Return the first document in `collection` matching `filter`.
    async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        Ok(self.find(collection, filter, None).await?.into_iter().next())
    }
}
