//! Property-based tests for path parsing.

use super::parse::tokenize;
use super::Path;
use proptest::prelude::*;

// Keys that survive a trip through the string grammar unchanged
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_$][a-zA-Z0-9_$]{0,12}"
}

fn index_strategy() -> impl Strategy<Value = String> {
    (0usize..10_000).prop_map(|i| i.to_string())
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![identifier_strategy(), index_strategy()]
}

fn path_strategy() -> impl Strategy<Value = Path> {
    prop::collection::vec(key_strategy(), 0..8).prop_map(Path::from_keys)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Display then parse gives back the same keys
    #[test]
    fn display_parse_round_trip(path in path_strategy()) {
        let rendered = path.to_string();
        prop_assert_eq!(Path::parse(&rendered), path);
    }

    // Parsing never panics and never yields empty keys
    #[test]
    fn tokenize_total_and_non_empty(input in ".{0,64}") {
        let keys = tokenize(&input);
        prop_assert!(keys.iter().all(|k| !k.is_empty()));
    }

    // Bracket and dot spellings of an index are interchangeable
    #[test]
    fn bracket_and_dot_index_agree(name in identifier_strategy(), index in 0usize..1000) {
        let bracketed = Path::parse(&format!("{name}[{index}]"));
        let dotted = Path::parse(&format!("{name}.{index}"));
        prop_assert_eq!(bracketed, dotted);
    }

    // Only canonical decimal strings are indices, and they parse back to themselves
    #[test]
    fn index_keys_are_canonical(key in "[0-9+-]{1,6}") {
        if let Some(index) = Path::as_index(&key) {
            prop_assert_eq!(index.to_string(), key);
        }
    }

    // A prefix is exactly the head of the key list
    #[test]
    fn prefix_is_head(path in path_strategy(), len in 0usize..10) {
        let prefix = path.prefix(len);
        prop_assert_eq!(prefix.len(), len.min(path.len()));
        prop_assert_eq!(prefix.keys(), &path.keys()[..prefix.len()]);
    }
}
