//! Fuzzy finder adapters

pub mod external;

pub use external::{ExternalFinder, DEFAULT_FINDER_ARGS, DEFAULT_FINDER_PROGRAM};
