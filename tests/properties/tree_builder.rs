//! Property tests for tree building.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use zotero_collection::domain::entities::{forest_len, preorder};
use zotero_collection::{build_tree, CollectionNode};

use super::strategies::records;

fn keys(forest: &[CollectionNode]) -> BTreeSet<String> {
    preorder(forest).into_iter().map(|n| n.key.clone()).collect()
}

fn siblings_sorted(nodes: &[CollectionNode]) -> bool {
    nodes.windows(2).all(|w| {
        w[0].name.to_lowercase() <= w[1].name.to_lowercase()
    }) && nodes.iter().all(|n| siblings_sorted(&n.children))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every record appears exactly once, cycles included.
    #[test]
    fn property_every_record_appears_once(input in records()) {
        let forest = build_tree(input.clone());

        prop_assert_eq!(forest_len(&forest), input.len());
        let expected: BTreeSet<String> = input.iter().map(|r| r.key.clone()).collect();
        prop_assert_eq!(keys(&forest), expected);
    }

    /// PROPERTY: a record whose parent is missing or empty is a root.
    #[test]
    fn property_orphans_are_roots(input in records()) {
        let forest = build_tree(input.clone());
        let present: BTreeSet<&str> = input.iter().map(|r| r.key.as_str()).collect();
        let roots: BTreeSet<&str> = forest.iter().map(|n| n.key.as_str()).collect();

        for record in &input {
            let dangling = match record.parent() {
                None => true,
                Some(parent) => !present.contains(parent),
            };
            if dangling {
                prop_assert!(roots.contains(record.key.as_str()), "{} should be a root", record.key);
            }
        }
    }

    /// PROPERTY: siblings are ordered by case-insensitive name at every level.
    #[test]
    fn property_siblings_sorted(input in records()) {
        prop_assert!(siblings_sorted(&build_tree(input)));
    }

    /// PROPERTY: the forest does not depend on input order.
    #[test]
    fn property_permutation_invariant(
        (input, shuffled) in records()
            .prop_flat_map(|input| (Just(input.clone()), Just(input).prop_shuffle()))
    ) {
        prop_assert_eq!(build_tree(input), build_tree(shuffled));
    }

    /// PROPERTY: a root whose parent key resolves sits on a parent cycle.
    #[test]
    fn property_resolving_parents_are_kept(input in records()) {
        let forest = build_tree(input.clone());
        let parent_of: HashMap<&str, &str> = input
            .iter()
            .filter_map(|r| r.parent().map(|p| (r.key.as_str(), p)))
            .collect();

        for root in &forest {
            if let Some(parent) = root.parent_key.as_deref() {
                if input.iter().any(|r| r.key == parent) {
                    prop_assert!(
                        on_cycle(&root.key, &parent_of),
                        "{} was detached from {}",
                        root.key,
                        parent
                    );
                }
            }
        }
    }
}

fn on_cycle(key: &str, parent_of: &HashMap<&str, &str>) -> bool {
    let mut current = parent_of.get(key).copied();
    for _ in 0..=parent_of.len() {
        match current {
            Some(k) if k == key => return true,
            Some(k) => current = parent_of.get(k).copied(),
            None => return false,
        }
    }
    false
}
