//! Common test utilities for CLI tests.
//!
//! This module provides:
//! - `FakeZotero`: an in-process HTTP server standing in for Zotero
//! - `TestEnv`: isolated config + helpers to run the CLI binary
//! - Fixtures: canned native/plugin JSON bodies

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod server;

pub use env::*;
pub use fixtures::*;
pub use server::*;
