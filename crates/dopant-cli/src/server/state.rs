//! Application state for the web server.

use dopant::{Catalog, DisplaySlot, StoreSet, Structure, StructureFetcher};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Listings and direct formation-energy lookups.
    pub catalog: Catalog,
    /// Fetches structures into the display slot.
    pub fetcher: StructureFetcher,
    /// The structure currently shown by the viewer.
    pub slot: DisplaySlot,
}

impl AppState {
    /// Create new application state. The slot starts with the placeholder structure.
    pub fn new(stores: StoreSet) -> Self {
        Self::with_slot(stores, DisplaySlot::with_default(Structure::placeholder()))
    }

    /// Create application state around an existing slot.
    pub fn with_slot(stores: StoreSet, slot: DisplaySlot) -> Self {
        Self {
            fetcher: StructureFetcher::new(stores.structures.clone(), slot.clone()),
            catalog: Catalog::from_stores(stores),
            slot,
        }
    }
}
