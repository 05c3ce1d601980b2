//! Property tests for flattening and position addressing.

use proptest::prelude::*;
use zotero_collection::application::parse_position;
use zotero_collection::domain::entities::{preorder, ItemKind};
use zotero_collection::domain::services::{finder_input, DisplayIndex};
use zotero_collection::{build_tree, flatten, render_tree, Library};

use super::strategies::records;

fn libraries() -> impl Strategy<Value = Vec<Library>> {
    proptest::collection::vec(records(), 1..4).prop_map(|per_library| {
        per_library
            .into_iter()
            .enumerate()
            .map(|(i, records)| {
                let tree = build_tree(records);
                if i == 0 {
                    Library::personal(tree)
                } else {
                    Library::group(100 + i as i64, format!("Group {}", i), tree)
                }
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one root item per library plus one item per collection.
    #[test]
    fn property_flattened_count(libs in libraries()) {
        let items = flatten(&libs);
        let collections: usize = libs.iter().map(Library::collection_count).sum();

        prop_assert_eq!(items.len(), libs.len() + collections);
        let roots = items.iter().filter(|i| i.kind == ItemKind::LibraryRoot).count();
        prop_assert_eq!(roots, libs.len());
    }

    /// PROPERTY: every finder line maps back to its own item.
    #[test]
    fn property_finder_lines_round_trip(libs in libraries()) {
        let items = flatten(&libs);
        let input = finder_input(&items);

        for (position, line) in input.lines().enumerate() {
            prop_assert_eq!(parse_position(line, items.len()), Some(position));
        }
        prop_assert_eq!(input.lines().count(), items.len());
    }

    /// PROPERTY: each library segment of the flattened list is its root
    /// followed by the pre-order of its forest.
    #[test]
    fn property_segments_follow_preorder(libs in libraries()) {
        let items = flatten(&libs);

        let mut start = 0;
        for lib in &libs {
            prop_assert_eq!(items[start].kind, ItemKind::LibraryRoot);
            prop_assert_eq!(items[start].library_id, lib.id);

            let order = preorder(&lib.collections);
            for (i, node) in order.iter().enumerate() {
                let item = &items[start + 1 + i];
                prop_assert_eq!(item.key.as_deref(), Some(node.key.as_str()));
                prop_assert_eq!(item.library_id, lib.id);
            }
            start += 1 + order.len();
        }
        prop_assert_eq!(start, items.len());
    }

    /// PROPERTY: numbered display index `n` and flattened position `n - 1`
    /// name the same library root or collection.
    #[test]
    fn property_display_index_matches_position(libs in libraries()) {
        let items = flatten(&libs);

        let mut next = DisplayIndex::FIRST;
        for lib in &libs {
            let root = &items[next.get() - 1];
            prop_assert!(root.is_library_root());
            prop_assert_eq!(root.library_id, lib.id);
            next = next.next();

            let rendered = render_tree(&lib.collections, "", next);
            for (index, node) in &rendered.visited {
                let item = &items[index.get() - 1];
                prop_assert_eq!(item.key.as_deref(), Some(node.key.as_str()));
                prop_assert_eq!(item.library_id, lib.id);
            }
            next = rendered.next_index;
        }
        prop_assert_eq!(next.get() - 1, items.len());
    }
}
