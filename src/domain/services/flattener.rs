//! Flattener
//!
//! Turns libraries into the single ordered list of selectable items. For
//! each library (in the order given): one library-root item, then one item
//! per collection in pre-order.
//!
//! The 0-based position of an item in this list is the address used by
//! every selection front-end, so the order here is a contract.

use crate::domain::entities::{CollectionNode, Library, SelectableItem};

pub fn flatten(libraries: &[Library]) -> Vec<SelectableItem> {
    let mut items = Vec::new();
    for library in libraries {
        items.push(SelectableItem::library_root(library.id, &library.name));
        push_collections(&library.collections, library, &mut items);
    }
    items
}

/// Pre-order with an explicit stack of `(node, depth)`.
fn push_collections(
    nodes: &[CollectionNode],
    library: &Library,
    items: &mut Vec<SelectableItem>,
) {
    let mut stack: Vec<(&CollectionNode, usize)> = nodes.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        items.push(SelectableItem::collection(
            library.id,
            &library.name,
            &node.key,
            &node.name,
            depth,
        ));
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
}

/// Newline-joined `"<position>:<display>"` records fed to a fuzzy finder.
pub fn finder_input(items: &[SelectableItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| format!("{}:{}", position, item.display))
        .collect::<Vec<_>>()
        .join("\n")
}
