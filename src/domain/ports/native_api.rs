//! Native Listing Port
//!
//! Read-only access to Zotero's built-in local API: personal collections,
//! group list, and per-group collections.

use crate::domain::entities::CollectionRecord;
use crate::error::ZoteroResult;

/// A group library as listed by the native API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub id: i64,
    pub name: Option<String>,
}

impl GroupRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Group {}", self.id),
        }
    }
}

pub trait NativeApi {
    /// `GET /users/0/collections`
    fn personal_collections(&self) -> ZoteroResult<Vec<CollectionRecord>>;

    /// `GET /users/0/groups`
    fn groups(&self) -> ZoteroResult<Vec<GroupRecord>>;

    /// `GET /groups/{id}/collections`
    fn group_collections(&self, group_id: i64) -> ZoteroResult<Vec<CollectionRecord>>;
}
