//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ZoteroResult;
use crate::infrastructure::finder::{DEFAULT_FINDER_ARGS, DEFAULT_FINDER_PROGRAM};
use crate::infrastructure::http::DEFAULT_PORT;

use super::loader::{self, ConfigWarning};

/// Connection to Zotero's local server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Selector front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Prefer the fuzzy finder over the numbered prompt
    #[serde(default = "default_true")]
    pub fuzzy: bool,

    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            fuzzy: true,
            program: default_program(),
            args: default_args(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_program() -> String {
    DEFAULT_FINDER_PROGRAM.to_string()
}

fn default_args() -> Vec<String> {
    DEFAULT_FINDER_ARGS.iter().map(|a| a.to_string()).collect()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Values given on the command line; `None`/`false` leaves config alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub no_fuzzy: bool,
    pub color: Option<ColorMode>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ZoteroResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the user config file (or defaults), then apply environment.
    pub fn load_or_default() -> Self {
        loader::load_or_default()
    }

    pub fn with_cli_overrides(mut self, cli: &CliOverrides) -> Self {
        if let Some(port) = cli.port {
            self.connection.port = port;
        }
        if cli.no_fuzzy {
            self.selector.fuzzy = false;
        }
        if let Some(color) = cli.color {
            self.output.color = color;
        }
        self
    }
}
