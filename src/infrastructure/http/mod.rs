//! HTTP adapters for Zotero's local server
//!
//! - `client` - JSON over blocking reqwest with error mapping
//! - `native` - [`NativeHttpApi`], Zotero's built-in read-only API
//! - `plugin` - [`PluginHttpApi`], the export-org selection plugin

pub mod client;
pub mod native;
pub mod plugin;

pub use client::{JsonClient, DEFAULT_HOST, DEFAULT_PORT};
pub use native::{parse_collections, parse_groups, NativeHttpApi};
pub use plugin::PluginHttpApi;
