//! Selectable item entity
//!
//! A flattened, displayable unit offered to the selector. Its position in
//! the flattened list is the only address used during selection.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    LibraryRoot,
    Collection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectableItem {
    pub kind: ItemKind,
    pub library_id: i64,
    /// Collection key; `None` for a library root.
    pub key: Option<String>,
    pub name: String,
    pub display: String,
}

impl SelectableItem {
    pub fn library_root(library_id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: ItemKind::LibraryRoot,
            library_id,
            key: None,
            display: format!("{} (root)", name),
            name,
        }
    }

    pub fn collection(
        library_id: i64,
        library_name: &str,
        key: impl Into<String>,
        name: impl Into<String>,
        depth: usize,
    ) -> Self {
        let name = name.into();
        Self {
            kind: ItemKind::Collection,
            library_id,
            key: Some(key.into()),
            display: format!("{} > {}{}", library_name, "  ".repeat(depth), name),
            name,
        }
    }

    pub fn is_library_root(&self) -> bool {
        self.kind == ItemKind::LibraryRoot
    }
}
