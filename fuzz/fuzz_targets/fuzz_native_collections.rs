#![no_main]

use std::collections::{HashMap, HashSet};

use libfuzzer_sys::fuzz_target;
use zotero_collection::domain::services::DisplayIndex;
use zotero_collection::infrastructure::http::parse_collections;
use zotero_collection::{build_tree, flatten, render_tree, Library};

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        // Whatever the server sends, every decoded record must survive tree building
        if let Ok(records) = parse_collections(body) {
            // A repeated key keeps only its last record.
            let mut parent_of: HashMap<String, Option<String>> = HashMap::new();
            for record in &records {
                parent_of.insert(record.key.clone(), record.parent().map(str::to_string));
            }
            let keys: HashSet<&str> = parent_of.keys().map(String::as_str).collect();

            let forest = build_tree(records.clone());
            let rendered = render_tree(&forest, "", DisplayIndex::FIRST);
            assert_eq!(rendered.visited.len(), keys.len());

            // A root keeps a resolvable parent only when it was promoted off a cycle.
            for root in &forest {
                if let Some(parent) = root.parent_key.as_deref() {
                    if keys.contains(parent) {
                        assert!(on_cycle(&root.key, &parent_of), "{} detached", root.key);
                    }
                }
            }

            let library = Library::personal(forest);
            let items = flatten(std::slice::from_ref(&library));
            assert_eq!(items.len(), keys.len() + 1);
        }
    }
});

fn on_cycle(key: &str, parent_of: &HashMap<String, Option<String>>) -> bool {
    let mut current = parent_of.get(key).cloned().flatten();
    for _ in 0..=parent_of.len() {
        match current {
            Some(k) if k == key => return true,
            Some(k) => current = parent_of.get(&k).cloned().flatten(),
            None => return false,
        }
    }
    false
}
