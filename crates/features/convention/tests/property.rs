use conwire_convention::{ConventionSettings, derive_namespaces, is_within};
use conwire_domain::TypeDescriptor;
use proptest::prelude::*;

fn qualified_name() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-D][a-c]{0,2}", 1..5).prop_map(|segments| segments.join("."))
}

fn type_list() -> impl Strategy<Value = Vec<TypeDescriptor>> {
    proptest::collection::vec(qualified_name(), 1..24)
        .prop_map(|names| names.into_iter().map(TypeDescriptor::class).collect())
}

proptest! {
    #[test]
    fn root_only_returns_distinct_single_segments(types in type_list()) {
        let roots = derive_namespaces(&types, true).unwrap();

        for root in &roots {
            prop_assert!(!root.contains('.'));
        }

        let mut deduped = roots.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), roots.len());
    }

    #[test]
    fn full_derivation_never_keeps_ancestor_and_descendant(types in type_list()) {
        let covering = derive_namespaces(&types, false).unwrap();

        for (i, a) in covering.iter().enumerate() {
            for (j, b) in covering.iter().enumerate() {
                if i != j {
                    prop_assert!(!is_within(a, b), "{} lies within {}", a, b);
                }
            }
        }
    }

    #[test]
    fn full_derivation_covers_every_namespace(types in type_list()) {
        let covering = derive_namespaces(&types, false).unwrap();

        for ns in types.iter().filter_map(|t| t.namespace.as_deref()) {
            prop_assert!(covering.iter().any(|root| is_within(ns, root)), "{} is not covered", ns);
        }
    }

    #[test]
    fn validate_fails_iff_a_required_list_is_empty(
        roots in proptest::collection::vec("[A-Za-z ]{0,6}", 0..3),
        suffixes in proptest::collection::vec("[A-Za-z ]{0,6}", 0..3),
    ) {
        let mut settings = ConventionSettings::default();
        settings.set_root_namespaces(&roots);
        settings.set_interface_suffixes(&suffixes);

        let expected_ok = !settings.root_namespaces.is_empty() && !settings.interface_suffixes.is_empty();
        prop_assert_eq!(settings.validate().is_ok(), expected_ok);
    }
}
