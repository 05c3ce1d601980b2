//! Session Driver
//!
//! Orchestrates one command invocation: show current selection, list,
//! select by key, create, or the interactive list → flatten → select path.

use std::io::{BufRead, Write};

use crate::application::listing::list_libraries;
use crate::application::selector::Selector;
use crate::domain::entities::{Library, SelectableItem};
use crate::domain::ports::{FuzzyFinder, NativeApi, PluginApi};
use crate::domain::services::flatten;
use crate::domain::value_objects::{
    CreateRequest, CreateResponse, CurrentSelection, SelectRequest, SelectResponse,
};
use crate::error::{ZoteroError, ZoteroResult};

/// Result of a successful interactive selection.
#[derive(Debug, Clone)]
pub struct InteractiveOutcome {
    pub item: SelectableItem,
    pub response: SelectResponse,
}

pub struct CollectionSession<N, P> {
    native: N,
    plugin: P,
}

impl<N: NativeApi, P: PluginApi> CollectionSession<N, P> {
    pub fn new(native: N, plugin: P) -> Self {
        Self { native, plugin }
    }

    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    pub fn current(&self) -> ZoteroResult<CurrentSelection> {
        self.plugin.current()
    }

    pub fn list(&self) -> ZoteroResult<Vec<Library>> {
        list_libraries(&self.native)
    }

    /// Select a library root (`key = None`) or a collection directly.
    ///
    /// The plugin's answer is returned even when it reports failure so the
    /// caller can print it verbatim.
    pub fn select(&self, library_id: i64, key: Option<String>) -> ZoteroResult<SelectResponse> {
        let request = SelectRequest::new(library_id, key);
        let response = self.plugin.select(&request)?;
        tracing::info!(
            library_id,
            key = request.collection_key.as_deref().unwrap_or("(root)"),
            success = response.success,
            "select"
        );
        Ok(response)
    }

    pub fn create(
        &self,
        library_id: i64,
        name: &str,
        parent_key: Option<String>,
    ) -> ZoteroResult<CreateResponse> {
        let request = CreateRequest::new(library_id, name, parent_key);
        let response = self.plugin.create(&request)?;
        tracing::info!(library_id, name, success = response.success, "create");
        Ok(response)
    }

    /// List, flatten, let the user pick, then select the pick in Zotero.
    ///
    /// Errors with `SelectionCancelled` when nothing was picked and with
    /// `Rejected` when the plugin refused the selection.
    pub fn interactive<F, R, W>(
        &self,
        selector: &Selector<F>,
        input: &mut R,
        out: &mut W,
    ) -> ZoteroResult<InteractiveOutcome>
    where
        F: FuzzyFinder,
        R: BufRead,
        W: Write,
    {
        let libraries = self.list()?;
        if libraries.is_empty() {
            return Err(ZoteroError::NoLibraries);
        }

        let items = flatten(&libraries);
        let item = selector
            .select(&items, &libraries, input, out)
            .cloned()
            .ok_or(ZoteroError::SelectionCancelled)?;

        let response = self.select(item.library_id, item.key.clone())?;
        if !response.success {
            return Err(ZoteroError::rejected(response.error.as_deref()));
        }

        Ok(InteractiveOutcome { item, response })
    }
}
