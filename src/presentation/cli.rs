//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - There are no subcommands; flags pick one of five modes
//! - Mode precedence: current, list, create, select, interactive

use clap::Parser;

use crate::config::{CliOverrides, ColorMode};
use crate::error::{ZoteroError, ZoteroResult};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// List and select Zotero collections
#[derive(Parser, Debug)]
#[command(name = "zotero-collection")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  zotero-collection                                   # Interactive selection
  zotero-collection --current                         # Show current selection
  zotero-collection --list                            # List all collections (JSON)
  zotero-collection --list --tree                     # List as tree
  zotero-collection --library 1 --select KEY          # Select specific collection
  zotero-collection --library 1                       # Select library root
  zotero-collection --library 1 --create \"New\"        # Create collection
  zotero-collection --library 1 --create \"Sub\" --parent KEY")]
pub struct Cli {
    /// Zotero port (default: 23119)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Show currently selected collection
    #[arg(short, long)]
    pub current: bool,

    /// List all libraries and collections
    #[arg(short, long)]
    pub list: bool,

    /// Display list as tree (with --list)
    #[arg(short, long)]
    pub tree: bool,

    /// Library ID for selection
    #[arg(long, value_name = "ID")]
    pub library: Option<i64>,

    /// Collection key to select (use with --library)
    #[arg(short, long, value_name = "KEY", requires = "library")]
    pub select: Option<String>,

    /// Create a new collection with this name (use with --library)
    #[arg(long, value_name = "NAME", requires = "library")]
    pub create: Option<String>,

    /// Parent collection key for creating subcollections (use with --create)
    #[arg(long, value_name = "KEY")]
    pub parent: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Use numbered list instead of fuzzy finder
    #[arg(long)]
    pub no_fzf: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What one invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Current,
    List {
        tree: bool,
    },
    Create {
        library_id: i64,
        name: String,
        parent_key: Option<String>,
    },
    /// `key: None` selects the library root.
    Select {
        library_id: i64,
        key: Option<String>,
    },
    Interactive,
}

impl Cli {
    pub fn mode(&self) -> ZoteroResult<Mode> {
        if self.current {
            return Ok(Mode::Current);
        }
        if self.list {
            return Ok(Mode::List { tree: self.tree });
        }
        // clap guarantees `--library` whenever `--create` or `--select` is given.
        if let (Some(name), Some(library_id)) = (&self.create, self.library) {
            if name.trim().is_empty() {
                return Err(ZoteroError::InvalidArgument(
                    "collection name must not be empty".to_string(),
                ));
            }
            return Ok(Mode::Create {
                library_id,
                name: name.clone(),
                parent_key: self.parent.clone().filter(|p| !p.is_empty()),
            });
        }
        if let Some(library_id) = self.library {
            return Ok(Mode::Select {
                library_id,
                key: self.select.clone().filter(|k| !k.is_empty()),
            });
        }
        Ok(Mode::Interactive)
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            no_fuzzy: self.no_fzf,
            color: self.color.map(ColorMode::from),
        }
    }
}
