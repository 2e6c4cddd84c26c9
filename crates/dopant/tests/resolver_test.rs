//! Integration tests for dopant key resolution.

use dopant::{resolve, ChargeState, DopantError, DopantKey, HostSite};

// =============================================================================
// Documented Scenarios
// =============================================================================

#[test]
fn test_resolve_cs_neutral_scenario() {
    let query = resolve("XCs", 0).unwrap();

    assert_eq!(query.collection_name, "formation_energy_X_Cs");
    assert_eq!(query.field_name, "X_Cs");
    assert_eq!(query.field_value, "XCs-0");
}

#[test]
fn test_resolve_sn_positive_scenario() {
    let query = resolve("XSn", 1).unwrap();

    assert_eq!(query.collection_name, "formation_energy_X_Sn");
    assert_eq!(query.field_name, "X_Sn");
    assert_eq!(query.field_value, "XSn+1");
}

#[test]
fn test_resolve_unrecognized_suffix_scenario() {
    let err = resolve("XAl", 0).unwrap_err();
    assert!(matches!(err, DopantError::InvalidSpecies { ref species } if species == "XAl"));
}

// =============================================================================
// Real Dopants
// =============================================================================

#[test]
fn test_real_dopants_on_both_sites() {
    let cases = [
        ("KCs", 0, "formation_energy_X_Cs", "X_Cs", "KCs-0"),
        ("RbCs", 1, "formation_energy_X_Cs", "X_Cs", "RbCs+1"),
        ("GeSn", 0, "formation_energy_X_Sn", "X_Sn", "GeSn-0"),
        ("BaSn", 1, "formation_energy_X_Sn", "X_Sn", "BaSn+1"),
    ];

    for (species, charge, collection, field, value) in cases {
        let query = resolve(species, charge).unwrap();
        assert_eq!(query.collection_name, collection, "{species}");
        assert_eq!(query.field_name, field, "{species}");
        assert_eq!(query.field_value, value, "{species}");
    }
}

#[test]
fn test_key_method_matches_function() {
    let key = DopantKey::new("SrSn", 1);
    assert_eq!(key.resolve().unwrap(), resolve("SrSn", 1).unwrap());
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_unsupported_charge_states_are_invalid_input() {
    for charge in [-2, -1, 2, 3, i64::MAX] {
        let err = resolve("BaSn", charge).unwrap_err();
        assert!(
            matches!(err, DopantError::InvalidInput(_)),
            "charge {charge} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn test_element_without_host_suffix() {
    for species in ["Ba", "Sn2", "BaSnx", "Cs ", "", "I"] {
        assert!(
            matches!(resolve(species, 0), Err(DopantError::InvalidSpecies { .. })),
            "{species:?} should be rejected"
        );
    }
}

#[test]
fn test_building_blocks_agree_with_resolve() {
    let site = HostSite::from_species("BaSn").unwrap();
    let charge = ChargeState::try_from(1).unwrap();
    let query = resolve("BaSn", 1).unwrap();

    assert_eq!(query.collection_name, site.collection_name());
    assert_eq!(query.field_name, site.field_name());
    assert!(query.field_value.ends_with(charge.suffix()));
}

#[test]
fn test_resolved_query_serializes() {
    let query = resolve("KCs", 1).unwrap();
    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(json["collection_name"], "formation_energy_X_Cs");
    assert_eq!(json["field_name"], "X_Cs");
    assert_eq!(json["field_value"], "KCs+1");
}
