//! Plugin messages
//!
//! Request and response bodies exchanged with the selection plugin. Unknown
//! response fields are kept in `extra` so `--json` output stays faithful.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A response field that may be absent, explicitly `null`, or set.
///
/// Keeping the three apart lets a response be echoed back exactly as the
/// plugin sent it: absent stays absent, `null` stays `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Value(value) => Some(value),
            Field::Absent | Field::Null => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }
}

impl Field<String> {
    pub fn as_deref(&self) -> Option<&str> {
        self.get().map(String::as_str)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Absent, Field::Value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(value) => serializer.serialize_some(value),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    // Only called for a key that is present; absent keys take `Default`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Field::Null, Field::Value))
    }
}

/// A collection reference as reported by the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
    pub name: String,
    pub key: String,
}

/// `GET /collection/current`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentSelection {
    #[serde(rename = "libraryID", default, skip_serializing_if = "Field::is_absent")]
    pub library_id: Field<i64>,
    #[serde(rename = "libraryName", default, skip_serializing_if = "Field::is_absent")]
    pub library_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub collection: Field<CollectionRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `POST /collection/select` body. `collectionKey: null` selects the library root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectRequest {
    #[serde(rename = "libraryID")]
    pub library_id: i64,
    #[serde(rename = "collectionKey")]
    pub collection_key: Option<String>,
}

impl SelectRequest {
    pub fn new(library_id: i64, collection_key: Option<String>) -> Self {
        Self {
            library_id,
            collection_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectedTarget {
    #[serde(rename = "libraryID", default, skip_serializing_if = "Field::is_absent")]
    pub library_id: Field<i64>,
    #[serde(rename = "collectionKey", default, skip_serializing_if = "Field::is_absent")]
    pub collection_key: Field<String>,
    #[serde(rename = "collectionName", default, skip_serializing_if = "Field::is_absent")]
    pub collection_name: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub selected: Field<SelectedTarget>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub error: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `POST /collection/create` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRequest {
    #[serde(rename = "libraryID")]
    pub library_id: i64,
    pub name: String,
    #[serde(rename = "parentKey", skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
}

impl CreateRequest {
    pub fn new(library_id: i64, name: impl Into<String>, parent_key: Option<String>) -> Self {
        Self {
            library_id,
            name: name.into(),
            parent_key: parent_key.filter(|k| !k.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub collection: Field<CollectionRef>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub error: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
