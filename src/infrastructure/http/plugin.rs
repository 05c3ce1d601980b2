//! Selection plugin adapter
//!
//! The export-org plugin under `/export-org`. It reports the current
//! selection, changes it, and creates collections.

use std::time::Duration;

use super::client::JsonClient;
use crate::domain::ports::PluginApi;
use crate::domain::value_objects::{
    CreateRequest, CreateResponse, CurrentSelection, SelectRequest, SelectResponse,
};
use crate::error::ZoteroResult;

pub const PLUGIN_BASE_PATH: &str = "/export-org";
pub const PLUGIN_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PluginHttpApi {
    client: JsonClient,
}

impl PluginHttpApi {
    pub fn new(port: u16) -> ZoteroResult<Self> {
        Ok(Self {
            client: JsonClient::new(port, PLUGIN_BASE_PATH, PLUGIN_TIMEOUT)?,
        })
    }
}

impl PluginApi for PluginHttpApi {
    fn current(&self) -> ZoteroResult<CurrentSelection> {
        self.client.get("/collection/current")
    }

    fn select(&self, request: &SelectRequest) -> ZoteroResult<SelectResponse> {
        self.client.post("/collection/select", request)
    }

    fn create(&self, request: &CreateRequest) -> ZoteroResult<CreateResponse> {
        self.client.post("/collection/create", request)
    }
}
