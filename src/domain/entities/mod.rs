//! Domain Entities
//!
//! - `Library` / `CollectionNode` - the collection hierarchy
//! - `CollectionRecord` - flat input record from a listing
//! - `SelectableItem` - one addressable entry of the flattened list

mod collection;
mod selectable;

pub use collection::{
    forest_len, preorder, CollectionNode, CollectionRecord, Library, LibraryKind,
    PERSONAL_LIBRARY_ID, PLACEHOLDER_NAME,
};
pub use selectable::{ItemKind, SelectableItem};
