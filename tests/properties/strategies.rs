//! Shared generators.

use proptest::prelude::*;
use zotero_collection::CollectionRecord;

/// Records with unique keys `K0..Kn`; each parent is absent, empty, an
/// existing key, or a key that exists nowhere (orphan).
pub fn records() -> impl Strategy<Value = Vec<CollectionRecord>> {
    (0usize..24).prop_flat_map(|n| {
        proptest::collection::vec(
            (
                proptest::option::of("[A-Za-z]{0,6}"),
                prop_oneof![
                    Just(None),
                    Just(Some(String::new())),
                    (0..n.max(1)).prop_map(|i| Some(format!("K{}", i))),
                    Just(Some("MISSING".to_string())),
                ],
            ),
            n,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, parent_key))| CollectionRecord {
                    key: format!("K{}", i),
                    name,
                    parent_key,
                })
                .collect()
        })
    })
}
