//! Domain Layer
//!
//! The collection hierarchy and its transformations, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Libraries, collection nodes, selectable items
//! - `value_objects/` - Plugin request/response messages
//! - `services/` - Tree builder, tree renderer, flattener
//! - `ports/` - Interfaces for the collaborators (HTTP APIs, fuzzy finder)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
