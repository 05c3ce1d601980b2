use std::process::ExitCode;

use anyhow::Result;
use zotero_collection::application::CollectionSession;
use zotero_collection::domain::ports::{NativeApi, PluginApi};
use zotero_collection::ZoteroError;

use crate::ui::context::UiContext;
use crate::ui::json::emit_pretty;
use crate::ui::views::outcome::render_selected;

pub fn cmd_select<N: NativeApi, P: PluginApi>(
    session: &CollectionSession<N, P>,
    library_id: i64,
    key: Option<String>,
    ui: &UiContext,
) -> Result<ExitCode> {
    let response = session.select(library_id, key)?;

    if ui.json {
        emit_pretty(&response)?;
        return Ok(if response.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if !response.success {
        return Err(ZoteroError::rejected(response.error.as_deref()).into());
    }
    println!("{}", render_selected(&response, ui.color));
    Ok(ExitCode::SUCCESS)
}
