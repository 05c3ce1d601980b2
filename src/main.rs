//! zotero-collection CLI - list, select, and create Zotero collections
//!
//! Usage: zotero-collection [OPTIONS]
//!
//! Modes (first match wins):
//!   --current             Show the collection selected in Zotero
//!   --list [--tree]       List all libraries and collections
//!   --library ID --create NAME [--parent KEY]
//!   --library ID [--select KEY]
//!   (no flags)            Interactive selection

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zotero_collection::config::Config;
use zotero_collection::presentation::{create_selector, create_session, Cli, Mode};
use zotero_collection::ZoteroError;

mod commands;
mod ui;

use ui::context::UiContext;
use ui::primitives::text::ColoredText;

const LOG_ENV: &str = "ZOTERO_COLLECTION_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mode = cli.mode()?;
    let config = Config::load_or_default().with_cli_overrides(&cli.overrides());
    let ui = UiContext::new(cli.json, &config);
    let session = create_session(&config)?;

    tracing::debug!(?mode, port = config.connection.port, "dispatching");

    match mode {
        Mode::Current => commands::cmd_current(&session, &ui),
        Mode::List { tree } => commands::cmd_list(&session, tree, &ui),
        Mode::Create {
            library_id,
            name,
            parent_key,
        } => commands::cmd_create(&session, library_id, &name, parent_key, &ui),
        Mode::Select { library_id, key } => commands::cmd_select(&session, library_id, key, &ui),
        Mode::Interactive => {
            let selector = create_selector(&config).with_connectors(ui.connectors());
            commands::cmd_interactive(&session, &selector, &ui)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report(err: &anyhow::Error) {
    if err
        .downcast_ref::<ZoteroError>()
        .is_some_and(ZoteroError::is_silent)
    {
        return;
    }
    let label = ColoredText::error("Error:").render(ui::terminal::stderr_supports_color());
    eprintln!("{} {}", label, err);
}
