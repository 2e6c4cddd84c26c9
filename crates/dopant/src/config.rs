//! Configuration for store access and catalog collections.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default per-call store deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for store access.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Deadline applied to every store call.
    pub timeout: Duration,
    /// Databases to read from when the store is a database server.
    pub databases: DatabaseNames,
}

impl StoreConfig {
    /// Config with the given timeout in milliseconds.
    pub fn with_timeout_ms(ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(ms),
            ..Self::default()
        }
    }

    /// Replace the database names.
    pub fn with_databases(mut self, databases: DatabaseNames) -> Self {
        self.databases = databases;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            databases: DatabaseNames::default(),
        }
    }
}

/// Database names on a MongoDB server. Listings and structures live in
/// separate databases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseNames {
    /// Holds the listing collections.
    pub catalog: String,
    /// Holds the `formation_energy_X_*` collections.
    pub structures: String,
}

impl Default for DatabaseNames {
    fn default() -> Self {
        Self {
            catalog: "ECD517".to_string(),
            structures: "vasp_data".to_string(),
        }
    }
}

/// Names of the collections the catalog reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionNames {
    /// Computed formation energies and charge transitions per dopant.
    pub dopants: String,
    /// Model-predicted formation energies (GPR/NN/RFR).
    pub formation: String,
    /// Model-predicted band gaps (GPR/NN/RFR).
    pub band_gap: String,
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            dopants: "CsSnI3".to_string(),
            formation: "formationfull".to_string(),
            band_gap: "bandgapfull".to_string(),
        }
    }
}
