//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap) and mode resolution
//! - Creating the session with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - flags and [`Mode`]
//! - `factory` - wires HTTP adapters and the fuzzy finder (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Mode};
pub use factory::{create_selector, create_session, HttpSession};
