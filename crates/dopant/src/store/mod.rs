//! Document store access.
//!
//! The database engine is an external collaborator, so everything above this
//! module talks to the [`DocumentStore`] trait. Three backends ship with the
//! crate:
//!
//! - [`MongoStore`] for a MongoDB deployment
//! - [`JsonDirStore`] for a directory of exported collections
//! - [`InMemoryStore`] for tests and demos
//!
//! Every backend opened through [`open_stores`] is wrapped in a
//! [`TimeoutStore`].

mod document;
mod filter;
mod json_dir;
mod memory;
mod mongo;
mod provider;
mod timeout;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub use document::{Document, ID_FIELD};
pub use filter::{Filter, Projection};
pub use json_dir::JsonDirStore;
pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use provider::DocumentStore;
pub use timeout::TimeoutStore;

use crate::config::StoreConfig;

const MONGO_SCHEMES: [&str; 2] = ["mongodb://", "mongodb+srv://"];

/// Where the document store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Empty in-memory store.
    Memory,
    /// Directory of `<collection>.json` files.
    Directory(PathBuf),
    /// MongoDB connection string. Credentials come from the string itself.
    Mongo(String),
}

impl FromStr for StoreLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Store location must not be empty".to_string());
        }
        if s.eq_ignore_ascii_case("memory") || s.eq_ignore_ascii_case("mem") {
            return Ok(StoreLocation::Memory);
        }
        if MONGO_SCHEMES.iter().any(|scheme| s.starts_with(scheme)) {
            return Ok(StoreLocation::Mongo(s.to_string()));
        }
        Ok(StoreLocation::Directory(PathBuf::from(
            s.strip_prefix("dir:").unwrap_or(s),
        )))
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreLocation::Memory => write!(f, "memory"),
            StoreLocation::Directory(path) => write!(f, "{}", path.display()),
            StoreLocation::Mongo(uri) => write!(f, "{}", mongo::redact_credentials(uri)),
        }
    }
}

/// Stores for the listing collections and for the structure collections.
///
/// On MongoDB these are two databases on one deployment. The other backends
/// keep every collection together, so both handles point at the same store.
#[derive(Clone)]
pub struct StoreSet {
    pub catalog: Arc<dyn DocumentStore>,
    pub structures: Arc<dyn DocumentStore>,
}

impl StoreSet {
    /// Use one store for everything.
    pub fn shared(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            catalog: Arc::clone(&store),
            structures: store,
        }
    }
}

/// Open the stores at `location`, each bounded by the configured timeout.
pub fn open_stores(location: &StoreLocation, config: &StoreConfig) -> StoreSet {
    let bounded = |inner: Arc<dyn DocumentStore>| -> Arc<dyn DocumentStore> {
        Arc::new(TimeoutStore::new(inner, config.timeout))
    };

    match location {
        StoreLocation::Memory => StoreSet::shared(bounded(Arc::new(InMemoryStore::new()))),
        StoreLocation::Directory(path) => {
            StoreSet::shared(bounded(Arc::new(JsonDirStore::new(path.clone()))))
        }
        StoreLocation::Mongo(uri) => {
            let catalog = MongoStore::new(uri.clone(), config.databases.catalog.clone());
            let structures = catalog.with_database(config.databases.structures.clone());
            StoreSet {
                catalog: bounded(Arc::new(catalog)),
                structures: bounded(Arc::new(structures)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_store_location() {
        assert_eq!("memory".parse::<StoreLocation>().unwrap(), StoreLocation::Memory);
        assert_eq!("MEM".parse::<StoreLocation>().unwrap(), StoreLocation::Memory);
        assert_eq!(
            "dir:/data/vasp".parse::<StoreLocation>().unwrap(),
            StoreLocation::Directory(PathBuf::from("/data/vasp"))
        );
        assert_eq!(
            "./vasp_data".parse::<StoreLocation>().unwrap(),
            StoreLocation::Directory(PathBuf::from("./vasp_data"))
        );
        assert!("  ".parse::<StoreLocation>().is_err());
    }

    #[test]
    fn test_parse_mongo_location() {
        let srv = "mongodb+srv://user:pw@cluster0.example.net/?retryWrites=true";
        assert_eq!(
            srv.parse::<StoreLocation>().unwrap(),
            StoreLocation::Mongo(srv.to_string())
        );
        assert_eq!(
            "mongodb://localhost:27017".parse::<StoreLocation>().unwrap(),
            StoreLocation::Mongo("mongodb://localhost:27017".to_string())
        );
    }

    #[test]
    fn test_mongo_location_display_hides_credentials() {
        let location: StoreLocation = "mongodb+srv://user:pw@cluster0.example.net/"
            .parse()
            .unwrap();
        assert_eq!(location.to_string(), "mongodb+srv://***@cluster0.example.net/");
    }

    #[test]
    fn test_open_stores_names_backend() {
        let stores = open_stores(&StoreLocation::Memory, &StoreConfig::default());
        assert_eq!(stores.catalog.name(), "memory");
        assert!(Arc::ptr_eq(&stores.catalog, &stores.structures));
    }

    #[test]
    fn test_open_stores_splits_mongo_databases() {
        let location = StoreLocation::Mongo("mongodb://localhost:27017".to_string());
        let stores = open_stores(&location, &StoreConfig::default());

        assert_eq!(stores.catalog.name(), "mongodb");
        assert_eq!(stores.structures.name(), "mongodb");
        assert!(!Arc::ptr_eq(&stores.catalog, &stores.structures));
    }
}
