//! Fuzzy Finder Port
//!
//! An external fuzzy-match program receives newline-delimited
//! `position:label` records and returns the chosen line.
//!
//! Implementations:
//! - `ExternalFinder` (infrastructure): spawns a program such as `fzf`
//! - [`UnavailableFinder`]: no finder on this system

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FinderError {
    #[error("fuzzy finder is not available")]
    Unavailable,

    #[error("failed to run fuzzy finder: {0}")]
    Spawn(String),

    #[error("fuzzy finder exited with status {0:?}")]
    Exited(Option<i32>),

    #[error("fuzzy finder returned no selection")]
    EmptyOutput,
}

pub trait FuzzyFinder {
    /// Short program name used in user-facing notices.
    fn name(&self) -> &str;

    /// Whether the finder can be run at all.
    fn is_available(&self) -> bool;

    /// Offer `input` and return the chosen line (without trailing newline).
    fn pick(&self, input: &str) -> Result<String, FinderError>;
}

/// Finder used when no fuzzy program exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableFinder;

impl FuzzyFinder for UnavailableFinder {
    fn name(&self) -> &str {
        "fzf"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn pick(&self, _input: &str) -> Result<String, FinderError> {
        Err(FinderError::Unavailable)
    }
}

impl<F: FuzzyFinder + ?Sized> FuzzyFinder for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn pick(&self, input: &str) -> Result<String, FinderError> {
        (**self).pick(input)
    }
}
