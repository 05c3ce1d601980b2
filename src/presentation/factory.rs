//! Session Factory
//!
//! Creates the session and selector with infrastructure dependencies wired
//! up. This is the dependency injection point for the application.

use crate::application::{CollectionSession, Selector};
use crate::config::Config;
use crate::error::ZoteroResult;
use crate::infrastructure::{ExternalFinder, NativeHttpApi, PluginHttpApi};

/// Type alias for the session talking to a live Zotero
pub type HttpSession = CollectionSession<NativeHttpApi, PluginHttpApi>;

/// Create a session for the configured port
pub fn create_session(config: &Config) -> ZoteroResult<HttpSession> {
    let port = config.connection.port;
    tracing::debug!(port, "creating HTTP session");
    Ok(CollectionSession::new(
        NativeHttpApi::new(port)?,
        PluginHttpApi::new(port)?,
    ))
}

/// Create the selector for the configured finder program
pub fn create_selector(config: &Config) -> Selector<ExternalFinder> {
    let finder = ExternalFinder::new(
        config.selector.program.clone(),
        config.selector.args.clone(),
    );
    Selector::new(finder, config.selector.fuzzy)
}
