//! Read-only views over the precomputed collections.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use crate::config::CollectionNames;
use crate::error::{DopantError, Result};
use crate::key::DopantKey;
use crate::store::{Document, DocumentStore, Filter, Projection, StoreSet};

use super::records::{BandGapPrediction, DopantRecord, PredictedFormationEnergy};

/// Result of a store connectivity check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStatus {
    pub status: String,
    pub collections: Vec<String>,
}

/// Lists precomputed dopant data and fetches formation-energy documents.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn DocumentStore>,
    structures: Arc<dyn DocumentStore>,
    collections: CollectionNames,
}

impl Catalog {
    /// Create a catalog reading every collection from `store`.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::from_stores(StoreSet::shared(store))
    }

    /// Create a catalog reading listings from `stores.catalog` and
    /// formation-energy documents from `stores.structures`.
    pub fn from_stores(stores: StoreSet) -> Self {
        Self {
            store: stores.catalog,
            structures: stores.structures,
            collections: CollectionNames::default(),
        }
    }

    /// Use custom listing collection names.
    pub fn with_collections(mut self, collections: CollectionNames) -> Self {
        self.collections = collections;
        self
    }

    /// All dopants with DFT formation energies.
    pub async fn dopants(&self) -> Result<Vec<DopantRecord>> {
        let collection = &self.collections.dopants;
        self.list(collection, &DopantRecord::FIELDS)
            .await?
            .iter()
            .map(|doc| DopantRecord::from_document(collection, doc))
            .collect()
    }

    /// All model-predicted formation energies.
    pub async fn predicted_formation_energies(&self) -> Result<Vec<PredictedFormationEnergy>> {
        let collection = &self.collections.formation;
        self.list(collection, &PredictedFormationEnergy::FIELDS)
            .await?
            .iter()
            .map(|doc| PredictedFormationEnergy::from_document(collection, doc))
            .collect()
    }

    /// All model-predicted band gaps.
    pub async fn band_gaps(&self) -> Result<Vec<BandGapPrediction>> {
        let collection = &self.collections.band_gap;
        self.list(collection, &BandGapPrediction::FIELDS)
            .await?
            .iter()
            .map(|doc| BandGapPrediction::from_document(collection, doc))
            .collect()
    }

    /// The formation-energy document for `key`, returned as stored with a
    /// string `_id`. The display slot is not involved.
    pub async fn formation_energy(&self, key: &DopantKey) -> Result<Document> {
        let query = key.resolve()?;
        self.structures
            .find_one(&query.collection_name, &query.filter())
            .await?
            .map(Document::with_string_id)
            .ok_or(DopantError::NotFound {
                collection: query.collection_name,
                field: query.field_name,
                value: query.field_value,
            })
    }

    /// Check that the listing store answers and list its collections.
    pub async fn check(&self) -> Result<StoreStatus> {
        match self.store.list_collections().await {
            Ok(collections) => Ok(StoreStatus {
                status: "Success".to_string(),
                collections,
            }),
            Err(e) => {
                error!("Store '{}' connectivity check failed: {}", self.store.name(), e);
                Err(DopantError::Store(format!("Database connection failed: {}", e)))
            }
        }
    }

    async fn list(&self, collection: &str, fields: &[&str]) -> Result<Vec<Document>> {
        let projection = Projection::include(fields.iter().copied());
        let docs = self
            .store
            .find(collection, &Filter::all(), Some(&projection))
            .await?;
        debug!("Read {} documents from {}", docs.len(), collection);
        Ok(docs)
    }
}
