use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;
use zotero_collection::application::CollectionSession;
use zotero_collection::domain::entities::Library;
use zotero_collection::domain::ports::{NativeApi, PluginApi};

use crate::ui::context::UiContext;
use crate::ui::json::emit_pretty;
use crate::ui::views::library_tree::render_library_tree;

#[derive(Serialize)]
struct Listing<'a> {
    libraries: &'a [Library],
}

/// JSON unless `tree` is set (and `--json` is not).
pub fn cmd_list<N: NativeApi, P: PluginApi>(
    session: &CollectionSession<N, P>,
    tree: bool,
    ui: &UiContext,
) -> Result<ExitCode> {
    let libraries = session.list()?;

    if ui.json || !tree {
        emit_pretty(&Listing {
            libraries: &libraries,
        })?;
    } else {
        print!(
            "{}",
            render_library_tree(&libraries, &ui.connectors(), ui.color)
        );
    }
    Ok(ExitCode::SUCCESS)
}
