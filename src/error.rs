//! Error types for zotero-collection
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for zotero-collection operations
pub type ZoteroResult<T> = Result<T, ZoteroError>;

/// Main error type for zotero-collection operations
#[derive(Error, Debug)]
pub enum ZoteroError {
    /// Zotero is not listening on the configured port
    #[error("Cannot connect to Zotero on port {port}")]
    Connect { port: u16 },

    /// A request exceeded the fixed per-call timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Non-2xx HTTP response
    #[error("{status} for url: {url}")]
    Http { status: u16, url: String },

    /// Any other transport failure
    #[error("request failed: {0}")]
    Request(String),

    /// Response body was not the JSON we expected
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The plugin answered `{"success": false, "error": ...}`
    #[error("{message}")]
    Rejected { message: String },

    /// Listing returned no libraries at all
    #[error("No libraries found.")]
    NoLibraries,

    /// The user cancelled or gave input that selects nothing
    #[error("no collection selected")]
    SelectionCancelled,

    /// Argument combination that clap cannot express
    #[error("{0}")]
    InvalidArgument(String),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ZoteroError {
    /// Build a `Rejected` error from an optional plugin error message.
    pub fn rejected(message: Option<&str>) -> Self {
        ZoteroError::Rejected {
            message: message.unwrap_or("Unknown error").to_string(),
        }
    }

    /// Whether the failure should be reported to the user.
    ///
    /// Cancelling a selection exits non-zero but prints nothing.
    pub fn is_silent(&self) -> bool {
        matches!(self, ZoteroError::SelectionCancelled)
    }
}
