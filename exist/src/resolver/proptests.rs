//! Property-based tests for the path operations.
//!
//! Trees and paths draw keys from the same small alphabet so that a good
//! share of generated paths resolve, partially resolve, or hit `Null`.

use super::{Detection, Resolver};
use crate::config::IntermediateStyle;
use crate::path::Path;
use crate::value::{Map, Value};
use proptest::prelude::*;

const KEYS: &[&str] = &["a", "b", "c", "0", "1", "2"];

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(KEYS).prop_map(str::to_string)
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-3i64..3).prop_map(Value::from),
        "[a-z]{0,3}".prop_map(Value::from),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(key_strategy(), inner, 0..4)
                .prop_map(|map: Map| Value::Map(map)),
        ]
    })
}

fn path_strategy() -> impl Strategy<Value = Path> {
    prop::collection::vec(key_strategy(), 1..5).prop_map(Path::from_keys)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // exist, detect and get agree on whether a path resolves
    #[test]
    fn exist_detect_get_agree(root in value_strategy(), path in path_strategy()) {
        let resolver = Resolver::new();
        let exists = resolver.exist(&root, &path);
        prop_assert_eq!(exists, resolver.detect(&root, &path).is_found());
        prop_assert_eq!(exists, resolver.get(&root, &path).is_some());
    }

    // The default is returned exactly when the path does not resolve
    #[test]
    fn get_or_uses_default_only_when_missing(root in value_strategy(), path in path_strategy()) {
        let resolver = Resolver::new();
        let default = Value::from("__default__");
        let got = resolver.get_or(&root, &path, &default);
        match resolver.get(&root, &path) {
            Some(found) => prop_assert!(std::ptr::eq(got, found)),
            None => prop_assert!(std::ptr::eq(got, &default)),
        }
    }

    // A missing path is a prefix of the input ending at an unresolvable key
    #[test]
    fn detect_reports_broken_link(root in value_strategy(), path in path_strategy()) {
        let resolver = Resolver::new();
        if let Detection::Missing(missing) = resolver.detect(&root, &path) {
            prop_assert!(!missing.is_empty());
            prop_assert_eq!(missing.keys(), &path.keys()[..missing.len()]);
            let parent = path.prefix(missing.len() - 1);
            prop_assert!(resolver.exist(&root, &parent));
            prop_assert!(!resolver.exist(&root, &missing));
        }
    }

    // A successful set is observable through get
    #[test]
    fn set_then_get(mut root in value_strategy(), path in path_strategy(), create in any::<bool>()) {
        let resolver = Resolver::new().with_create_missing(create);
        let marker = Value::from("__marker__");
        if resolver.set(&mut root, &path, marker.clone()) {
            prop_assert_eq!(resolver.get(&root, &path), Some(&marker));
        }
    }

    // Without creation, set succeeds iff the parent resolves to a container
    // that accepts the last key, and failure leaves the root untouched
    #[test]
    fn set_without_create_is_all_or_nothing(mut root in value_strategy(), path in path_strategy()) {
        let before = root.clone();
        let resolver = Resolver::new();
        let parent = path.prefix(path.len() - 1);
        let parent_resolves = resolver.exist(&root, &parent);
        if resolver.set(&mut root, &path, Value::from(1)) {
            prop_assert!(parent_resolves);
        } else {
            prop_assert_eq!(root, before);
        }
    }

    // A failed set with creation leaves the root untouched
    #[test]
    fn set_with_create_fails_cleanly(mut root in value_strategy(), path in path_strategy()) {
        let before = root.clone();
        let resolver = Resolver::new().with_create_missing(true);
        if !resolver.set(&mut root, &path, Value::from(1)) {
            prop_assert_eq!(root, before);
        }
    }

    // With creation from an empty map, every path of plain keys succeeds
    #[test]
    fn set_with_create_builds_missing_containers(path in path_strategy(), maps_only in any::<bool>()) {
        let style = if maps_only { IntermediateStyle::Map } else { IntermediateStyle::ByKey };
        let resolver = Resolver::new().with_create_missing(true).with_intermediates(style);
        let mut root = Value::map();
        prop_assert!(resolver.set(&mut root, &path, Value::from(true)));
        prop_assert_eq!(resolver.get(&root, &path), Some(&Value::from(true)));
    }

    // invoke is a no-op for trees that hold no functions
    #[test]
    fn invoke_without_functions_is_noop(root in value_strategy(), path in path_strategy()) {
        let invocation = Resolver::new().invoke(&root, &path);
        prop_assert!(invocation.is_noop());
        prop_assert_eq!(invocation.call(&[]), Value::Null);
    }
}
