//! Host-site and charge-state vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DopantError, Result};

/// Lattice site of CsSnI3 that a dopant substitutes, read from the species suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostSite {
    /// Dopant sits on the Cs site (species ends in "Cs").
    Cs,
    /// Dopant sits on the Sn site (species ends in "Sn").
    Sn,
}

impl HostSite {
    /// All recognized host sites.
    pub const ALL: [HostSite; 2] = [HostSite::Cs, HostSite::Sn];

    /// Detect the host site from a species such as `"BaSn"` or `"KCs"`.
    pub fn from_species(species: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|site| species.ends_with(site.suffix()))
            .ok_or_else(|| DopantError::InvalidSpecies {
                species: species.to_string(),
            })
    }

    /// Species suffix that selects this site.
    pub fn suffix(self) -> &'static str {
        match self {
            HostSite::Cs => "Cs",
            HostSite::Sn => "Sn",
        }
    }

    /// Collection holding formation-energy documents for this site.
    pub fn collection_name(self) -> &'static str {
        match self {
            HostSite::Cs => "formation_energy_X_Cs",
            HostSite::Sn => "formation_energy_X_Sn",
        }
    }

    /// Field keyed by the charged species inside the collection.
    pub fn field_name(self) -> &'static str {
        match self {
            HostSite::Cs => "X_Cs",
            HostSite::Sn => "X_Sn",
        }
    }
}

impl fmt::Display for HostSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Charge state of a stored formation-energy record.
///
/// Only the neutral and singly positive states exist in the data set; other
/// integers are rejected instead of being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeState {
    /// Charge state 0, stored with a `-0` suffix.
    Neutral,
    /// Charge state +1, stored with a `+1` suffix.
    Positive,
}

impl ChargeState {
    /// Suffix appended to the species to build the lookup value.
    pub fn suffix(self) -> &'static str {
        match self {
            ChargeState::Neutral => "-0",
            ChargeState::Positive => "+1",
        }
    }

    /// Integer value of the charge state.
    pub fn value(self) -> i64 {
        match self {
            ChargeState::Neutral => 0,
            ChargeState::Positive => 1,
        }
    }
}

impl TryFrom<i64> for ChargeState {
    type Error = DopantError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(ChargeState::Neutral),
            1 => Ok(ChargeState::Positive),
            other => Err(DopantError::InvalidInput(format!(
                "Unsupported charge state {}: only 0 and 1 are defined",
                other
            ))),
        }
    }
}

impl fmt::Display for ChargeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_site_from_species() {
        assert_eq!(HostSite::from_species("BaSn").unwrap(), HostSite::Sn);
        assert_eq!(HostSite::from_species("KCs").unwrap(), HostSite::Cs);
        assert!(HostSite::from_species("XAl").is_err());
        assert!(HostSite::from_species("").is_err());
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        assert!(HostSite::from_species("Xcs").is_err());
        assert!(HostSite::from_species("XSN").is_err());
    }

    #[test]
    fn test_bare_suffix_is_a_species() {
        // "Sn" alone is tin substituted on its own site; still well formed.
        assert_eq!(HostSite::from_species("Sn").unwrap(), HostSite::Sn);
    }

    #[test]
    fn test_charge_state_conversion() {
        assert_eq!(ChargeState::try_from(0).unwrap(), ChargeState::Neutral);
        assert_eq!(ChargeState::try_from(1).unwrap(), ChargeState::Positive);
        assert!(matches!(
            ChargeState::try_from(2),
            Err(DopantError::InvalidInput(_))
        ));
        assert!(ChargeState::try_from(-1).is_err());
    }

    #[test]
    fn test_charge_state_suffixes() {
        assert_eq!(ChargeState::Neutral.suffix(), "-0");
        assert_eq!(ChargeState::Positive.suffix(), "+1");
        assert_eq!(ChargeState::Positive.to_string(), "1");
    }
}
