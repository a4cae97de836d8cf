//! Property tests for the display name guard.

use std::collections::HashSet;

use proptest::prelude::*;

use bundlemap::domain::entities::NameRegistry;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: registered names are unique ignoring case, however many
    /// duplicates are requested.
    #[test]
    fn property_registered_names_are_unique(
        names in proptest::collection::vec("[A-Za-z]{1,3}", 1..40)
    ) {
        let mut registry = NameRegistry::new();
        let mut seen = HashSet::new();

        for (index, name) in names.iter().enumerate() {
            let registered = registry.register(name, &format!("Assets/{}", index));
            prop_assert!(seen.insert(registered.to_lowercase()), "duplicate {}", registered);
        }
        prop_assert_eq!(registry.len(), names.len());
    }

    /// PROPERTY: the first request for a name always gets it unchanged, and
    /// every rename is recorded exactly once.
    #[test]
    fn property_first_request_wins(
        names in proptest::collection::vec("[A-Za-z]{1,3}", 1..40)
    ) {
        let mut registry = NameRegistry::new();
        let mut first = HashSet::new();
        let mut renames = 0;

        for name in &names {
            let registered = registry.register(name, "Assets/x");
            if first.insert(name.to_lowercase()) {
                prop_assert_eq!(&registered, name);
            } else {
                let prefix = format!("{}_", name);
                prop_assert!(registered.starts_with(&prefix));
                renames += 1;
            }
        }
        prop_assert_eq!(registry.collisions().len(), renames);
    }
}
