//! Integration tests for the solar constants registry.
//!
//! These tests ensure that:
//! 1. Every registered key resolves, by name and by alias
//! 2. Substring search never invents names
//! 3. Listing, table and JSON output agree on size and order

use proptest::prelude::*;
use solkit::constants::{solar, ConstantsError, ConstantsRegistry, SOLAR_CONSTANTS};
use solkit::solar_registry;

// ==================== Lookup ====================

#[test]
fn test_all_constants_are_listed() {
    let registry = ConstantsRegistry::solar();
    let names = registry.find(None);
    assert_eq!(names.len(), 34);
    assert_eq!(names.len(), SOLAR_CONSTANTS.len());
    for (name, record) in names.iter().zip(SOLAR_CONSTANTS.iter()) {
        assert_eq!(*name, record.name);
    }
}

#[test]
fn test_get_by_each_key() {
    let registry = solar_registry();
    for record in registry.iter() {
        let by_name = registry.get(record.name).unwrap();
        assert!(
            by_name.name.eq_ignore_ascii_case(record.name)
                || by_name.aliases.iter().any(|a| a.eq_ignore_ascii_case(record.name))
        );
        assert!(!registry.find(Some(record.name)).is_empty());
        assert!(registry.get(&record.name.to_uppercase()).is_ok());
    }
}

#[test]
fn test_missing_constants() {
    let registry = solar_registry();
    for key in ["boo", "crab", "foo"] {
        assert!(registry.find(Some(key)).is_empty());
        let err = registry.get(key).unwrap_err();
        assert!(matches!(err, ConstantsError::NotFound(_)));
        assert!(err.to_string().contains(key));
    }
}

#[test]
fn test_well_known_values() {
    let registry = solar_registry();
    assert_eq!(registry.get("au").unwrap().name, "mean distance");
    assert_eq!(registry.get("GM").unwrap().value, 1.327_124_4e20);
    assert_eq!(registry.get("t_eff").unwrap().unit, "K");
    assert_eq!(registry.get("sfu").unwrap().value, 1e-22);
    assert_eq!(solar::radius().value(), 6.957e8);
    assert_eq!(solar::mean_distance().value(), 1.495_978_707e11);
}

// ==================== Listing ====================

#[test]
fn test_print_all_matches_registry() {
    let registry = solar_registry();
    let table = registry.print_all();
    assert_eq!(table.len(), registry.len());

    let rendered = table.to_string();
    // Header and rule, then one line per constant.
    assert_eq!(rendered.lines().count(), registry.len() + 2);
    for name in registry.find(None) {
        assert!(rendered.contains(name), "{} missing from table", name);
    }
}

#[test]
fn test_json_export_round_trips_names() {
    let registry = solar_registry();
    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&registry.to_json().unwrap()).unwrap();
    let names: Vec<&str> = parsed.iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, registry.find(None));
}

// ==================== Properties ====================

proptest! {
    #[test]
    fn prop_find_is_subset_of_all(substring in ".{0,12}") {
        let registry = solar_registry();
        let all = registry.find(None);
        for name in registry.find(Some(&substring)) {
            prop_assert!(all.contains(&name));
        }
    }

    #[test]
    fn prop_find_ignores_case(substring in "[a-zA-Z_ ]{1,6}") {
        let registry = solar_registry();
        prop_assert_eq!(
            registry.find(Some(&substring.to_lowercase())),
            registry.find(Some(&substring.to_uppercase()))
        );
    }

    #[test]
    fn prop_found_names_resolve(substring in "[a-z]{1,3}") {
        let registry = solar_registry();
        for name in registry.find(Some(&substring)) {
            prop_assert!(registry.get(name).is_ok());
        }
    }
}
