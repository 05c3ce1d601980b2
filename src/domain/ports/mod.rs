//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod fuzzy_finder;
pub mod native_api;
pub mod plugin_api;

pub use fuzzy_finder::{FinderError, FuzzyFinder, UnavailableFinder};
pub use native_api::{GroupRecord, NativeApi};
pub use plugin_api::PluginApi;
