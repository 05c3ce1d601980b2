//! Native API adapter
//!
//! Zotero's built-in local API under `/api`. Collections come back as
//! `{"key": ..., "data": {"name": ..., "parentCollection": ...}}` where a
//! root collection has `parentCollection: false`.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use super::client::JsonClient;
use crate::domain::entities::CollectionRecord;
use crate::domain::ports::{GroupRecord, NativeApi};
use crate::error::ZoteroResult;

pub const NATIVE_BASE_PATH: &str = "/api";
pub const NATIVE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct NativeCollection {
    #[serde(default)]
    key: String,
    #[serde(default)]
    data: NativeCollectionData,
}

#[derive(Debug, Default, Deserialize)]
struct NativeCollectionData {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "parentCollection", default)]
    parent_collection: Value,
}

impl From<NativeCollection> for CollectionRecord {
    fn from(raw: NativeCollection) -> Self {
        // false, null, and "" all mean "no parent"
        let parent_key = match raw.data.parent_collection {
            Value::String(key) if !key.is_empty() => Some(key),
            _ => None,
        };
        CollectionRecord {
            key: raw.key,
            name: raw.data.name,
            parent_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct NativeGroup {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    data: Option<NativeGroupData>,
}

#[derive(Debug, Deserialize)]
struct NativeGroupData {
    #[serde(default)]
    name: Option<String>,
}

impl From<NativeGroup> for GroupRecord {
    fn from(raw: NativeGroup) -> Self {
        let name = raw
            .data
            .and_then(|d| d.name)
            .filter(|n| !n.is_empty())
            .or(raw.name);
        GroupRecord { id: raw.id, name }
    }
}

/// Decode a native collections response body.
pub fn parse_collections(body: &str) -> serde_json::Result<Vec<CollectionRecord>> {
    let raw: Vec<NativeCollection> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(CollectionRecord::from).collect())
}

/// Decode a native groups response body.
pub fn parse_groups(body: &str) -> serde_json::Result<Vec<GroupRecord>> {
    let raw: Vec<NativeGroup> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(GroupRecord::from).collect())
}

pub struct NativeHttpApi {
    client: JsonClient,
}

impl NativeHttpApi {
    pub fn new(port: u16) -> ZoteroResult<Self> {
        Ok(Self {
            client: JsonClient::new(port, NATIVE_BASE_PATH, NATIVE_TIMEOUT)?,
        })
    }

    fn collections(&self, endpoint: &str) -> ZoteroResult<Vec<CollectionRecord>> {
        let raw: Vec<NativeCollection> = self.client.get(endpoint)?;
        Ok(raw.into_iter().map(CollectionRecord::from).collect())
    }
}

impl NativeApi for NativeHttpApi {
    fn personal_collections(&self) -> ZoteroResult<Vec<CollectionRecord>> {
        self.collections("/users/0/collections")
    }

    fn groups(&self) -> ZoteroResult<Vec<GroupRecord>> {
        let raw: Vec<NativeGroup> = self.client.get("/users/0/groups")?;
        Ok(raw.into_iter().map(GroupRecord::from).collect())
    }

    fn group_collections(&self, group_id: i64) -> ZoteroResult<Vec<CollectionRecord>> {
        self.collections(&format!("/groups/{}/collections", group_id))
    }
}
