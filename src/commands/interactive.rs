use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use zotero_collection::application::{CollectionSession, Selector};
use zotero_collection::domain::ports::{FuzzyFinder, NativeApi, PluginApi};
use zotero_collection::ZoteroError;

use crate::ui::context::UiContext;
use crate::ui::json::emit_pretty;
use crate::ui::views::outcome::{render_pick_failed, render_picked};

/// List, pick one item (fuzzy finder or numbered prompt), select it.
///
/// The prompt and notices go to stdout and the answer is read from stdin.
pub fn cmd_interactive<N, P, F>(
    session: &CollectionSession<N, P>,
    selector: &Selector<F>,
    ui: &UiContext,
) -> Result<ExitCode>
where
    N: NativeApi,
    P: PluginApi,
    F: FuzzyFinder,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    match session.interactive(selector, &mut input, &mut out) {
        Ok(outcome) => {
            if ui.json {
                drop(out);
                emit_pretty(&outcome.response)?;
            } else {
                writeln!(out, "{}", render_picked(&outcome.item, ui.color))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(ZoteroError::Rejected { message }) => {
            writeln!(out, "{}", render_pick_failed(&message, ui.color))?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
