//! Directory-of-JSON-files document store.
//!
//! Each collection lives in `<root>/<collection>.json` as a JSON array of
//! documents, which is the layout `mongoexport --jsonArray` produces:
//!
//! ```text
//! vasp_data/
//! ├── CsSnI3.json
//! ├── formation_energy_X_Cs.json
//! └── formation_energy_X_Sn.json
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{DopantError, Result};

use super::document::Document;
use super::filter::{Filter, Projection};
use super::provider::DocumentStore;

const EXTENSION: &str = "json";

/// Document store backed by a directory of JSON array files.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Open a store rooted at `root`. The directory is checked lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collection_path(&self, collection: &str) -> Result<PathBuf> {
        if collection.is_empty()
            || collection.contains(['/', '\\'])
            || collection.starts_with('.')
        {
            return Err(DopantError::InvalidInput(format!(
                "Invalid collection name: '{}'",
                collection
            )));
        }
        Ok(self.root.join(format!("{}.{}", collection, EXTENSION)))
    }

    async fn load(&self, collection: &str) -> Result<Vec<Document>> {
        let path = self.collection_path(collection)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.ensure_root().await?;
                debug!("Collection file {} not found, treating as empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(read_error(&path, e)),
        };

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            DopantError::Store(format!("Cannot parse '{}': {}", path.display(), e))
        })?;
        let Value::Array(items) = value else {
            return Err(DopantError::MalformedDocument {
                collection: collection.to_string(),
                message: "collection file is not a JSON array".to_string(),
            });
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Document::from_value(item).ok_or_else(|| DopantError::MalformedDocument {
                    collection: collection.to_string(),
                    message: format!("entry {} is not a JSON object", index),
                })
            })
            .collect()
    }

    async fn ensure_root(&self) -> Result<()> {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(DopantError::Store(format!(
                "'{}' is not a directory",
                self.root.display()
            ))),
            Err(e) => Err(DopantError::Store(format!(
                "Cannot open store directory '{}': {}",
                self.root.display(),
                e
            ))),
        }
    }
}

fn read_error(path: &Path, err: std::io::Error) -> DopantError {
    DopantError::Store(format!("Cannot read '{}': {}", path.display(), err))
}

#[async_trait]
impl DocumentStore for JsonDirStore {
    fn name(&self) -> &str {
        "json-dir"
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        self.ensure_root().await?;

        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| read_error(&self.root, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| read_error(&self.root, e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == EXTENSION) {
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> Result<Vec<Document>> {
        let docs = self.load(collection).await?;
        Ok(docs
            .into_iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| match projection {
                Some(p) => p.apply(&doc),
                None => doc,
            })
            .collect())
    }
}
