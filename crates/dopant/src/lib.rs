//! dopant: CsSnI3 dopant data and crystal structures for a web front end.
//!
//! The library resolves a dopant species and charge state into a document
//! store query, fetches the matching crystal structure and publishes it to a
//! display slot read by the structure viewer. It also lists the precomputed
//! formation energies and band gaps stored next to the structures.
//!
//! # Key convention
//!
//! - species ending in `Cs` live in `formation_energy_X_Cs`, keyed by `X_Cs`
//! - species ending in `Sn` live in `formation_energy_X_Sn`, keyed by `X_Sn`
//! - charge state 0 appends `-0`, charge state 1 appends `+1`
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use dopant::{DisplaySlot, DopantKey, InMemoryStore, Structure, StructureFetcher};
//!
//! # async fn example() -> dopant::Result<()> {
//! let store = Arc::new(InMemoryStore::new());
//! let slot = DisplaySlot::with_default(Structure::placeholder());
//! let fetcher = StructureFetcher::new(store, slot.clone());
//!
//! fetcher.select(&DopantKey::new("BaSn", 1)).await?;
//! println!("Showing {}", slot.current().unwrap().formula());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod key;
pub mod store;
pub mod structure;

mod fetch;

pub use catalog::{
    BandGapPrediction, Catalog, DopantRecord, PredictedFormationEnergy, StoreStatus,
};
pub use config::{CollectionNames, DatabaseNames, StoreConfig};
pub use display::{DisplaySlot, SlotSnapshot};
pub use error::{DopantError, Result};
pub use fetch::StructureFetcher;
pub use key::{resolve, ChargeState, DopantKey, HostSite, ResolvedQuery};
pub use store::{
    open_stores, Document, DocumentStore, Filter, InMemoryStore, JsonDirStore, MongoStore,
    Projection, StoreLocation, StoreSet,
};
pub use structure::{Lattice, Structure};
