//! Collection entities
//!
//! A `Library` owns an ordered forest of `CollectionNode`s. Both are built
//! fresh from a listing response and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Name shown for a collection whose record has no usable name.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// Library id of the user's personal library.
pub const PERSONAL_LIBRARY_ID: i64 = 1;

/// Flat collection record as delivered by a listing collaborator.
///
/// Only knows its own parent. The tree builder turns a set of these into
/// a forest of [`CollectionNode`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRecord {
    pub key: String,
    pub name: Option<String>,
    pub parent_key: Option<String>,
}

impl CollectionRecord {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: Some(name.into()),
            parent_key: None,
        }
    }

    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    /// Name to display, substituting the placeholder for missing/empty names.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => PLACEHOLDER_NAME,
        }
    }

    /// Parent key, treating an empty string as "no parent".
    pub fn parent(&self) -> Option<&str> {
        self.parent_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// One collection within a library, owning its (sorted) children.
///
/// Building, rendering, flattening, counting and dropping walk the tree
/// with an explicit stack, so nesting depth is bounded by memory only.
/// The derived `Clone`, `PartialEq` and serde impls still recurse once
/// per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNode {
    pub key: String,
    pub name: String,
    pub parent_key: Option<String>,
    pub children: Vec<CollectionNode>,
}

impl CollectionNode {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            parent_key: None,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + forest_len(&self.children)
    }
}

impl Drop for CollectionNode {
    fn drop(&mut self) {
        // Detach descendants first so each node drops with no children.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Count every node in a forest.
pub fn forest_len(nodes: &[CollectionNode]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&CollectionNode> = nodes.iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children.iter());
    }
    count
}

/// Pre-order traversal of a forest.
pub fn preorder(nodes: &[CollectionNode]) -> Vec<&CollectionNode> {
    let mut out = Vec::new();
    let mut stack: Vec<&CollectionNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children.iter().rev());
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryKind {
    #[serde(rename = "user")]
    Personal,
    #[serde(rename = "group")]
    Group,
}

/// A personal or group library with its collection forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LibraryKind,
    pub collections: Vec<CollectionNode>,
}

impl Library {
    pub fn personal(collections: Vec<CollectionNode>) -> Self {
        Self {
            id: PERSONAL_LIBRARY_ID,
            name: "My Library".to_string(),
            kind: LibraryKind::Personal,
            collections,
        }
    }

    pub fn group(id: i64, name: impl Into<String>, collections: Vec<CollectionNode>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: LibraryKind::Group,
            collections,
        }
    }

    pub fn collection_count(&self) -> usize {
        forest_len(&self.collections)
    }
}
