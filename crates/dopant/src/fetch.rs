//! Structure fetch: one point lookup, then replace the display slot.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::display::DisplaySlot;
use crate::error::{DopantError, Result};
use crate::key::{DopantKey, ResolvedQuery};
use crate::store::DocumentStore;
use crate::structure::Structure;

/// Fetches structures from the store and publishes them to a display slot.
///
/// The slot is only written after the store call has returned and the
/// document has been parsed, so a failed fetch never disturbs what the
/// viewer is showing.
#[derive(Clone)]
pub struct StructureFetcher {
    store: Arc<dyn DocumentStore>,
    slot: DisplaySlot,
}

impl StructureFetcher {
    /// Create a fetcher writing to `slot`.
    pub fn new(store: Arc<dyn DocumentStore>, slot: DisplaySlot) -> Self {
        Self { store, slot }
    }

    /// Look up the structure for `query` without touching the slot.
    pub async fn fetch(&self, query: &ResolvedQuery) -> Result<Structure> {
        debug!(
            "find_one {} where {} = {}",
            query.collection_name, query.field_name, query.field_value
        );

        let doc = self
            .store
            .find_one(&query.collection_name, &query.filter())
            .await?
            .ok_or_else(|| DopantError::NotFound {
                collection: query.collection_name.clone(),
                field: query.field_name.clone(),
                value: query.field_value.clone(),
            })?;

        Structure::from_document(&query.collection_name, &doc)
    }

    /// Fetch the structure for `query` and make it the displayed one.
    pub async fn fetch_and_display(&self, query: &ResolvedQuery) -> Result<Arc<Structure>> {
        let structure = match self.fetch(query).await {
            Ok(structure) => Arc::new(structure),
            Err(e) => {
                warn!(
                    "Fetch for {} failed, keeping current structure: {}",
                    query.field_value, e
                );
                return Err(e);
            }
        };

        let revision = self.slot.replace(Arc::clone(&structure));
        info!("Displaying {} (revision {})", query.field_value, revision);
        Ok(structure)
    }

    /// Resolve `key` and display its structure.
    pub async fn select(&self, key: &DopantKey) -> Result<Arc<Structure>> {
        let query = key.resolve()?;
        self.fetch_and_display(&query).await
    }
}
