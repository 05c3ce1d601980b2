//! Selection Plugin Port
//!
//! Reads and changes the library/collection selected in Zotero's UI, and
//! creates collections. Implemented over HTTP by the export-org plugin.

use crate::domain::value_objects::{
    CreateRequest, CreateResponse, CurrentSelection, SelectRequest, SelectResponse,
};
use crate::error::ZoteroResult;

pub trait PluginApi {
    /// `GET /collection/current`
    fn current(&self) -> ZoteroResult<CurrentSelection>;

    /// `POST /collection/select`
    ///
    /// Returns the plugin's answer as-is; `success: false` is not an `Err`.
    fn select(&self, request: &SelectRequest) -> ZoteroResult<SelectResponse>;

    /// `POST /collection/create`
    fn create(&self, request: &CreateRequest) -> ZoteroResult<CreateResponse>;
}
