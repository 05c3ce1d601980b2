//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ZOTERO_*)
//! 3. User config (`<config_dir>/zotero-collection/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{config_path, with_env_overrides, ConfigWarning, CONFIG_PATH_ENV};
pub use types::{CliOverrides, ColorMode, Config, ConnectionConfig, OutputConfig, SelectorConfig};
