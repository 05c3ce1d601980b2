//! `--list --tree` output

use zotero_collection::domain::entities::Library;
use zotero_collection::domain::services::{render_tree_with, Connectors, DisplayIndex};

use crate::ui::primitives::text::ColoredText;

const TREE_PREFIX: &str = "  ";

/// One header per library, its numbered tree, then a blank line.
///
/// Display indices restart at 1 for every library.
pub fn render_library_tree(
    libraries: &[Library],
    connectors: &Connectors,
    supports_color: bool,
) -> String {
    let mut out = String::new();
    for library in libraries {
        out.push_str(&format!(
            "{} (Library ID: {})\n",
            ColoredText::plain(&library.name).bold().render(supports_color),
            library.id
        ));
        let rendered = render_tree_with(
            &library.collections,
            TREE_PREFIX,
            DisplayIndex::FIRST,
            connectors,
        );
        out.push_str(&rendered.to_text());
        out.push('\n');
    }
    out
}
