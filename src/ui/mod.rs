//! Terminal output for the CLI
//!
//! - `terminal` - what stdout/stderr can display
//! - `context` - per-invocation color/unicode/JSON decisions
//! - `views` - text for each command's result

pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
