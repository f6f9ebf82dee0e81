//! Property-based tests for mapping parsing and branch naming.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::mapping::{parse_mappings, PathMapping};
    use crate::namespace::BranchNamespace;
    use crate::path::{clean_path, is_root};
    use proptest::prelude::*;

    // ============================================================================
    // clean_path property tests
    // ============================================================================

    proptest! {
        /// Property: cleaning an already clean path changes nothing
        #[test]
        fn clean_path_is_idempotent(input in "[a-z./]{0,24}") {
            let once = clean_path(&input);
            let twice = clean_path(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: a cleaned path is empty, root, or relative without dot segments
        #[test]
        fn clean_path_is_root_or_relative(input in "[a-z./]{1,24}") {
            let cleaned = clean_path(&input);
            if !is_root(&cleaned) {
                prop_assert!(!cleaned.starts_with('/'));
                prop_assert!(!cleaned.ends_with('/'));
                for segment in cleaned.split('/') {
                    prop_assert!(!segment.is_empty());
                    prop_assert!(segment != "." && segment != "..");
                }
            }
        }
    }

    // ============================================================================
    // mapping parser property tests
    // ============================================================================

    proptest! {
        /// Property: non-empty input keeps one mapping per raw mapping
        #[test]
        fn parse_mappings_preserves_count(raws in prop::collection::vec("[a-z/:.]{0,12}", 1..8)) {
            prop_assert_eq!(parse_mappings(&raws).len(), raws.len());
        }

        /// Property: a mapping without a colon has an empty destination
        #[test]
        fn no_colon_means_empty_destination(raw in "[a-z/.]{0,16}") {
            prop_assert_eq!(PathMapping::parse(&raw).to, "");
        }

        /// Property: the split happens at the first colon only
        #[test]
        fn split_at_first_colon(
            from in "[a-z]{1,8}",
            to in "[a-z]{1,8}",
            rest in "[a-z]{1,8}",
        ) {
            let m = PathMapping::parse(&format!("{}:{}:{}", from, to, rest));
            prop_assert_eq!(m.from, from);
            prop_assert_eq!(m.to, format!("{}:{}", to, rest));
        }
    }

    // ============================================================================
    // branch namespace property tests
    // ============================================================================

    proptest! {
        /// Property: names differ across build ids
        #[test]
        fn branch_names_differ_across_builds(
            a in "[0-9a-f]{4}",
            b in "[0-9a-f]{4}",
            index in 0usize..64,
        ) {
            prop_assume!(a != b);
            let ns = BranchNamespace::default();
            prop_assert_ne!(ns.destination(&a), ns.destination(&b));
            prop_assert_ne!(ns.base(&a), ns.base(&b));
            prop_assert_ne!(ns.map_branch(&a, index), ns.map_branch(&b, index));
        }

        /// Property: within one build, every role and index gets its own name
        #[test]
        fn branch_names_differ_within_build(id in "[0-9a-f]{4}", count in 1usize..32) {
            let ns = BranchNamespace::default();
            let mut names = vec![ns.destination(&id), ns.base(&id)];
            names.extend((0..count).map(|i| ns.map_branch(&id, i)));
            let unique: std::collections::HashSet<_> = names.iter().collect();
            prop_assert_eq!(unique.len(), names.len());
        }

        /// Property: naming is deterministic
        #[test]
        fn branch_names_are_stable(id in "[0-9a-f]{4}", index in 0usize..64) {
            let ns = BranchNamespace::default();
            prop_assert_eq!(ns.map_branch(&id, index), ns.map_branch(&id, index));
        }
    }
}
