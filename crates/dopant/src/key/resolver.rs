//! Derive a collection name and field filter from a dopant species and charge state.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::Filter;

use super::species::{ChargeState, HostSite};

/// A dopant species together with the charge state of interest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DopantKey {
    /// Element symbol with host-site suffix, e.g. `"BaSn"`.
    pub species: String,
    /// Integer charge state (0 or 1).
    pub charge_state: i64,
}

impl DopantKey {
    /// Create a new dopant key.
    pub fn new(species: impl Into<String>, charge_state: i64) -> Self {
        Self {
            species: species.into(),
            charge_state,
        }
    }

    /// Resolve this key into a storage query.
    pub fn resolve(&self) -> Result<ResolvedQuery> {
        resolve(&self.species, self.charge_state)
    }
}

/// Storage address of a formation-energy document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedQuery {
    /// Collection to query.
    pub collection_name: String,
    /// Field to match on.
    pub field_name: String,
    /// Value the field must equal.
    pub field_value: String,
}

impl ResolvedQuery {
    /// Field-equality filter for this query.
    pub fn filter(&self) -> Filter {
        Filter::eq(self.field_name.clone(), self.field_value.clone())
    }
}

/// Resolve a species and charge state into a collection name and lookup key.
///
/// The species suffix is validated before the charge state, so `("XAl", 7)`
/// reports the species.
///
/// # Example
///
/// ```
/// let query = dopant::resolve("XSn", 1).unwrap();
/// assert_eq!(query.collection_name, "formation_energy_X_Sn");
/// assert_eq!(query.field_name, "X_Sn");
/// assert_eq!(query.field_value, "XSn+1");
/// ```
pub fn resolve(species: &str, charge_state: i64) -> Result<ResolvedQuery> {
    let site = HostSite::from_species(species)?;
    let charge = ChargeState::try_from(charge_state)?;

    Ok(ResolvedQuery {
        collection_name: site.collection_name().to_string(),
        field_name: site.field_name().to_string(),
        field_value: format!("{}{}", species, charge.suffix()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DopantError;

    #[test]
    fn test_resolve_cs_neutral() {
        let query = resolve("XCs", 0).unwrap();
        assert_eq!(query.collection_name, "formation_energy_X_Cs");
        assert_eq!(query.field_name, "X_Cs");
        assert_eq!(query.field_value, "XCs-0");
    }

    #[test]
    fn test_resolve_sn_positive() {
        let query = resolve("XSn", 1).unwrap();
        assert_eq!(query.collection_name, "formation_energy_X_Sn");
        assert_eq!(query.field_name, "X_Sn");
        assert_eq!(query.field_value, "XSn+1");
    }

    #[test]
    fn test_resolve_unknown_suffix() {
        assert!(matches!(
            resolve("XAl", 0),
            Err(DopantError::InvalidSpecies { .. })
        ));
    }

    #[test]
    fn test_species_checked_before_charge() {
        assert!(matches!(
            resolve("XAl", 5),
            Err(DopantError::InvalidSpecies { .. })
        ));
        assert!(matches!(
            resolve("XCs", 5),
            Err(DopantError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_dopant_key_resolve_and_filter() {
        let key = DopantKey::new("BaSn", 0);
        let query = key.resolve().unwrap();
        let filter = query.filter();
        assert_eq!(filter.clauses().len(), 1);
        assert_eq!(filter.clauses()[0].0, "X_Sn");
    }
}
