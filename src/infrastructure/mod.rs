//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer handles all I/O.
//!
//! ## Structure
//!
//! - `http/` - Zotero native API and selection plugin over HTTP
//! - `finder/` - external fuzzy finder subprocess

pub mod finder;
pub mod http;

pub use finder::ExternalFinder;
pub use http::{NativeHttpApi, PluginHttpApi};
