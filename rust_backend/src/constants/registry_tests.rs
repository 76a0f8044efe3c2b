#[cfg(test)]
mod tests {
    use crate::constants::data::{ALPHA_0, MASS, RADIUS};
    use crate::constants::{ConstantRecord, ConstantsError, ConstantsRegistry, solar_registry};

    fn registry() -> ConstantsRegistry {
        ConstantsRegistry::solar()
    }

    #[test]
    fn test_registry_size() {
        let registry = registry();
        assert_eq!(registry.len(), 34);
        assert_eq!(registry.find(None).len(), 34);
        assert_eq!(registry.print_all().len(), 34);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_every_key_resolves() {
        let registry = registry();
        for name in registry.find(None) {
            let record = registry.get(name).unwrap();
            assert!(record.matches(name));
            assert!(!registry.find(Some(name)).is_empty(), "find({}) is empty", name);
        }
    }

    #[test]
    fn test_aliases_resolve_to_their_record() {
        let registry = registry();
        for record in &registry {
            for alias in record.aliases {
                assert_eq!(registry.get(alias).unwrap().name, record.name);
                assert_eq!(
                    registry.get(&alias.to_uppercase()).unwrap().name,
                    record.name
                );
            }
        }
    }

    #[test]
    fn test_unknown_keys_are_not_found() {
        let registry = registry();
        for key in ["boo", "crab", "foo"] {
            assert!(registry.find(Some(key)).is_empty());
            match registry.get(key) {
                Err(ConstantsError::NotFound(missing)) => assert_eq!(missing, key),
                other => panic!("expected NotFound for {}, got {:?}", key, other),
            }
            assert!(!registry.contains(key));
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let registry = registry();
        assert_eq!(registry.find(Some("R_SUN")), vec!["radius"]);
        assert_eq!(
            registry.find(Some("RADIUS")),
            vec!["radius", "average angular size"]
        );
        assert_eq!(registry.find(Some("m_sun")), vec!["mass"]);
        assert_eq!(
            registry.find(Some("_0")),
            vec!["W_0", "alpha_0", "delta_0"]
        );
    }

    #[test]
    fn test_find_empty_substring_lists_everything() {
        let registry = registry();
        assert_eq!(registry.find(Some("")), registry.find(None));
    }

    #[test]
    fn test_registration_order() {
        let names = registry().find(None);
        assert_eq!(names.first(), Some(&"mass"));
        assert_eq!(names.last(), Some(&"delta_0"));
        assert_eq!(
            names.iter().position(|n| *n == "GM"),
            names.iter().position(|n| *n == "W_0").map(|p| p - 1)
        );
    }

    #[test]
    fn test_duplicate_keys_keep_first_record() {
        let shadow = ConstantRecord {
            name: "Radius",
            aliases: &["M_sun"],
            ..ALPHA_0
        };
        let registry = ConstantsRegistry::from_records([MASS, RADIUS, shadow]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("radius").unwrap().value, RADIUS.value);
        assert_eq!(registry.get("m_sun").unwrap().name, "mass");
    }

    #[test]
    fn test_to_json_lists_all_records() {
        let json = registry().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 34);
        assert_eq!(array[0]["name"], "mass");
        assert_eq!(array[33]["name"], "delta_0");
        assert!(array[4]["uncertainty"].is_null());
    }

    #[test]
    fn test_shared_registry() {
        let shared = solar_registry();
        assert_eq!(shared.len(), 34);
        assert!(std::ptr::eq(shared, solar_registry()));
    }
}
