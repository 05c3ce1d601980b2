//! zotero-collection - browse, select, and create Zotero collections
//!
//! Talks to a running Zotero desktop app over its local HTTP server: the
//! built-in native API for listing, and the export-org plugin for reading
//! and changing the selection and for creating collections.
//!
//! ## Layers
//!
//! - [`domain`] - collection trees, selectable items, ports (no I/O)
//! - [`application`] - listing, selector front-end, session driver
//! - [`infrastructure`] - HTTP adapters and the external fuzzy finder
//! - [`presentation`] - CLI definition and dependency wiring
//! - [`config`] - user configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CollectionSession, Selector};
pub use config::Config;
pub use domain::entities::{CollectionNode, CollectionRecord, Library, LibraryKind, SelectableItem};
pub use domain::services::{build_tree, flatten, render_tree};
pub use error::{ZoteroError, ZoteroResult};
