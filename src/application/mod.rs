//! Application Layer
//!
//! Use cases composed from domain services and ports.
//!
//! - `listing` - build every library's forest from the native API
//! - `selector` - fuzzy/numbered selection front-end
//! - `session` - one entry point per command mode

pub mod listing;
pub mod selector;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use listing::list_libraries;
pub use selector::{parse_position, Selector};
pub use session::{CollectionSession, InteractiveOutcome};
