use std::process::ExitCode;

use anyhow::Result;
use zotero_collection::application::CollectionSession;
use zotero_collection::domain::ports::{NativeApi, PluginApi};

use crate::ui::context::UiContext;
use crate::ui::json::emit_pretty;
use crate::ui::views::current::render_current;

pub fn cmd_current<N: NativeApi, P: PluginApi>(
    session: &CollectionSession<N, P>,
    ui: &UiContext,
) -> Result<ExitCode> {
    let current = session.current()?;

    if ui.json {
        emit_pretty(&current)?;
    } else {
        print!("{}", render_current(&current, ui.color));
    }
    Ok(ExitCode::SUCCESS)
}
