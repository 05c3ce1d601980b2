//! `--current` human output

use zotero_collection::domain::value_objects::CurrentSelection;

use crate::ui::primitives::text::ColoredText;

pub fn render_current(current: &CurrentSelection, supports_color: bool) -> String {
    let library_name = current.library_name.as_deref().unwrap_or("Unknown");
    let library_id = current
        .library_id
        .get()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut out = format!(
        "Library: {} (ID: {})\n",
        ColoredText::info(library_name).bold().render(supports_color),
        library_id
    );
    match current.collection.get() {
        Some(collection) => out.push_str(&format!(
            "Collection: {} (Key: {})\n",
            ColoredText::info(&collection.name).render(supports_color),
            ColoredText::dim(&collection.key).render(supports_color)
        )),
        None => out.push_str("Collection: (library root)\n"),
    }
    out
}
