//! Property-based tests for key resolution and the display slot.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p dopant --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p dopant --test property_tests
//! ```

use proptest::prelude::*;

use dopant::{resolve, DisplaySlot, DopantError, Lattice, Structure};

// =============================================================================
// Test Strategies
// =============================================================================

/// Element-like prefixes ("Ba", "K", "Xx").
fn element_like() -> impl Strategy<Value = String> {
    "[A-Z][a-z]?"
}

/// Arbitrary short strings, suffix not controlled.
fn any_species() -> impl Strategy<Value = String> {
    "[A-Za-z0-9+\\-]{0,12}"
}

fn supported_charge() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), Just(1i64)]
}

// =============================================================================
// Resolver Properties
// =============================================================================

proptest! {
    /// Cs-suffixed species always land in the Cs collection.
    #[test]
    fn cs_species_resolve_to_cs_collection(prefix in element_like(), charge in supported_charge()) {
        let species = format!("{}Cs", prefix);
        let query = resolve(&species, charge).unwrap();

        prop_assert_eq!(query.collection_name, "formation_energy_X_Cs");
        prop_assert_eq!(query.field_name, "X_Cs");
        let suffix = if charge == 1 { "+1" } else { "-0" };
        prop_assert_eq!(query.field_value, format!("{}{}", species, suffix));
    }

    /// Sn-suffixed species always land in the Sn collection.
    #[test]
    fn sn_species_resolve_to_sn_collection(prefix in element_like(), charge in supported_charge()) {
        let species = format!("{}Sn", prefix);
        let query = resolve(&species, charge).unwrap();

        prop_assert_eq!(query.collection_name, "formation_energy_X_Sn");
        prop_assert_eq!(query.field_name, "X_Sn");
        let suffix = if charge == 1 { "+1" } else { "-0" };
        prop_assert_eq!(query.field_value, format!("{}{}", species, suffix));
    }

    /// Anything without a recognized suffix is an invalid species.
    #[test]
    fn unsuffixed_species_are_rejected(species in any_species(), charge in any::<i64>()) {
        prop_assume!(!species.ends_with("Cs") && !species.ends_with("Sn"));
        let is_invalid_species = matches!(
            resolve(&species, charge),
            Err(DopantError::InvalidSpecies { .. })
        );
        prop_assert!(is_invalid_species);
    }

    /// Charge states other than 0 and 1 are never formatted.
    #[test]
    fn other_charge_states_are_rejected(prefix in element_like(), charge in any::<i64>()) {
        prop_assume!(charge != 0 && charge != 1);
        let is_invalid_input = matches!(
            resolve(&format!("{}Sn", prefix), charge),
            Err(DopantError::InvalidInput(_))
        );
        prop_assert!(is_invalid_input);
    }

    /// Resolution is a pure function of its inputs.
    #[test]
    fn resolve_is_deterministic(species in any_species(), charge in -2i64..3) {
        let first = resolve(&species, charge).map_err(|e| e.to_string());
        let second = resolve(&species, charge).map_err(|e| e.to_string());
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Display Slot Properties
// =============================================================================

proptest! {
    /// After any sequence of replacements the slot holds the last one and the
    /// revision counts every replacement.
    #[test]
    fn slot_holds_last_replacement(edges in prop::collection::vec(1.0f64..20.0, 1..20)) {
        let slot = DisplaySlot::empty();
        for &a in &edges {
            slot.replace(Structure::new(Lattice::cubic(a), &["Sn"], &[[0.0; 3]]).unwrap());
        }

        let snapshot = slot.snapshot().unwrap();
        prop_assert_eq!(snapshot.revision, edges.len() as u64);
        prop_assert_eq!(snapshot.structure.lattice.matrix[0][0], *edges.last().unwrap());
    }
}
