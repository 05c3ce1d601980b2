use std::process::ExitCode;

use anyhow::Result;
use zotero_collection::application::CollectionSession;
use zotero_collection::domain::ports::{NativeApi, PluginApi};
use zotero_collection::ZoteroError;

use crate::ui::context::UiContext;
use crate::ui::json::emit_pretty;
use crate::ui::views::outcome::render_created;

pub fn cmd_create<N: NativeApi, P: PluginApi>(
    session: &CollectionSession<N, P>,
    library_id: i64,
    name: &str,
    parent_key: Option<String>,
    ui: &UiContext,
) -> Result<ExitCode> {
    let response = session.create(library_id, name, parent_key.clone())?;

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
    println!(
        "{}",
        render_created(&response, parent_key.as_deref(), ui.color)
    );
    Ok(ExitCode::SUCCESS)
}
