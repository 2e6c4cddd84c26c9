//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};

use dopant::{open_stores, DatabaseNames, StoreConfig, StoreLocation, StoreSet};

/// dopant: serve CsSnI3 dopant data and crystal structures
#[derive(Parser)]
#[command(name = "dopant")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server and structure viewer
    Serve {
        #[command(flatten)]
        store: StoreArgs,

        /// Address to bind
        #[arg(long, env = "DOPANT_BIND", default_value = "127.0.0.1")]
        bind: std::net::IpAddr,

        /// Port for web server
        #[arg(short, long, env = "DOPANT_PORT", default_value = "8050")]
        port: u16,

        /// Open the structure viewer in a browser
        #[arg(long)]
        open: bool,
    },

    /// Show the collection and lookup key for a dopant
    Resolve {
        /// Dopant species with host-site suffix, e.g. BaSn or KCs
        #[arg(value_name = "SPECIES")]
        species: String,

        /// Charge state (0 or 1)
        #[arg(value_name = "CHARGE_STATE", allow_negative_numbers = true)]
        charge_state: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the store is reachable and list its collections
    Check {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// List precomputed dopant data
    List {
        /// What to list
        #[arg(value_name = "WHAT", default_value = "dopants")]
        what: ListTarget,

        #[command(flatten)]
        store: StoreArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where to read dopant data from.
#[derive(Args, Clone, Debug)]
pub struct StoreArgs {
    /// Store location: a mongodb:// or mongodb+srv:// URI, a directory of
    /// <collection>.json files, or "memory"
    #[arg(long = "store", env = "DOPANT_STORE", value_name = "URI|DIR|memory")]
    pub location: StoreLocation,

    /// MongoDB database holding the listing collections
    #[arg(long, env = "DOPANT_CATALOG_DB", default_value = "ECD517")]
    pub catalog_db: String,

    /// MongoDB database holding the formation_energy_X_* collections
    #[arg(long, env = "DOPANT_STRUCTURE_DB", default_value = "vasp_data")]
    pub structure_db: String,

    /// Per-call store timeout in milliseconds
    #[arg(long, env = "DOPANT_TIMEOUT_MS", default_value = "10000")]
    pub timeout_ms: u64,
}

impl StoreArgs {
    /// Store access settings.
    pub fn config(&self) -> StoreConfig {
        StoreConfig::with_timeout_ms(self.timeout_ms).with_databases(DatabaseNames {
            catalog: self.catalog_db.clone(),
            structures: self.structure_db.clone(),
        })
    }

    /// Open the configured stores.
    pub fn open(&self) -> StoreSet {
        open_stores(&self.location, &self.config())
    }
}

/// Collection listed by `dopant list`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListTarget {
    /// DFT formation energies and charge transitions
    #[default]
    Dopants,
    /// Model-predicted formation energies
    Ml,
    /// Model-predicted band gaps
    BandGap,
}

impl std::str::FromStr for ListTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "dopants" | "dopant" | "dft" => Ok(ListTarget::Dopants),
            "ml" | "formation" | "predicted" => Ok(ListTarget::Ml),
            "bandgap" | "band_gap" | "gap" => Ok(ListTarget::BandGap),
            _ => Err(format!(
                "Unknown list target: {}. Use: dopants, ml, or bandgap.",
                s
            )),
        }
    }
}

impl std::fmt::Display for ListTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListTarget::Dopants => write!(f, "dopants"),
            ListTarget::Ml => write!(f, "ml"),
            ListTarget::BandGap => write!(f, "bandgap"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_target() {
        assert_eq!("ML".parse::<ListTarget>().unwrap(), ListTarget::Ml);
        assert_eq!("band-gap".parse::<ListTarget>().unwrap(), ListTarget::BandGap);
        assert_eq!("dopants".parse::<ListTarget>().unwrap(), ListTarget::Dopants);
        assert!("energies".parse::<ListTarget>().is_err());
    }

    #[test]
    fn test_parse_resolve_command() {
        let cli = Cli::try_parse_from(["dopant", "resolve", "BaSn", "1", "--json"]).unwrap();
        match cli.command {
            Commands::Resolve {
                species,
                charge_state,
                json,
            } => {
                assert_eq!(species, "BaSn");
                assert_eq!(charge_state, 1);
                assert!(json);
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_parse_serve_command() {
        let cli = Cli::try_parse_from([
            "dopant", "serve", "--store", "memory", "--port", "9000", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve { store, port, .. } => {
                assert_eq!(store.location, StoreLocation::Memory);
                assert_eq!(port, 9000);
                assert_eq!(store.timeout_ms, 10_000);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_mongo_store_args() {
        let cli = Cli::try_parse_from([
            "dopant",
            "check",
            "--store",
            "mongodb://localhost:27017",
            "--catalog-db",
            "dopants_test",
        ])
        .unwrap();
        match cli.command {
            Commands::Check { store } => {
                assert!(matches!(store.location, StoreLocation::Mongo(_)));
                let config = store.config();
                assert_eq!(config.databases.catalog, "dopants_test");
                assert_eq!(config.databases.structures, "vasp_data");
                assert_eq!(store.open().catalog.name(), "mongodb");
            }
            _ => panic!("expected check"),
        }
    }
}
