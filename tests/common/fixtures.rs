//! Canned Zotero responses.

use super::server::{FakeZotero, FakeZoteroBuilder};

/// Personal library: Zeta, Alpha > Sub. Roots use `parentCollection: false`.
pub const PERSONAL_COLLECTIONS: &str = r#"[
  {"key": "ZETA0001", "data": {"name": "Zeta", "parentCollection": false}},
  {"key": "ALPHA001", "data": {"name": "Alpha", "parentCollection": false}},
  {"key": "SUB00001", "data": {"name": "Sub", "parentCollection": "ALPHA001"}}
]"#;

pub const GROUPS: &str = r#"[{"id": 42, "data": {"name": "Lab"}}]"#;

pub const GROUP_COLLECTIONS: &str = r#"[
  {"key": "SHARED01", "data": {"name": "Shared", "parentCollection": false}}
]"#;

pub const CURRENT_COLLECTION: &str = r#"{
  "libraryID": 1,
  "libraryName": "My Library",
  "collection": {"name": "Papers", "key": "PAPERS01"}
}"#;

pub const CURRENT_ROOT: &str = r#"{"libraryID": 42, "libraryName": "Lab", "collection": null}"#;

pub const SELECT_OK: &str = r#"{
  "success": true,
  "selected": {"libraryID": 1, "collectionKey": "SUB00001", "collectionName": "Sub"}
}"#;

pub const SELECT_ROOT_OK: &str =
    r#"{"success": true, "selected": {"libraryID": 42, "collectionKey": null}}"#;

pub const SELECT_REJECTED: &str = r#"{"success": false, "error": "Library not found"}"#;

pub const CREATE_OK: &str =
    r#"{"success": true, "collection": {"name": "Reading", "key": "NEWKEY01"}}"#;

/// Native listing for one personal library and one group.
pub fn with_libraries(builder: FakeZoteroBuilder) -> FakeZoteroBuilder {
    builder
        .get("/api/users/0/collections", PERSONAL_COLLECTIONS)
        .get("/api/users/0/groups", GROUPS)
        .get("/api/groups/42/collections", GROUP_COLLECTIONS)
}

pub fn zotero_with_libraries() -> FakeZotero {
    with_libraries(FakeZotero::builder()).start()
}
