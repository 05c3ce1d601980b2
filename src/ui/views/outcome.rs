//! Results of select, create, and interactive selection

use zotero_collection::domain::entities::SelectableItem;
use zotero_collection::domain::value_objects::{CreateResponse, SelectResponse};

use crate::ui::primitives::text::ColoredText;

/// `--library ID [--select KEY]` after the plugin accepted it.
pub fn render_selected(response: &SelectResponse, supports_color: bool) -> String {
    let selected = response.selected.get();
    let key = selected
        .and_then(|s| s.collection_key.as_deref())
        .filter(|k| !k.is_empty());

    match key {
        Some(key) => {
            let name = selected
                .and_then(|s| s.collection_name.as_deref())
                .unwrap_or("Unknown");
            format!(
                "Selected: {} (Key: {})",
                ColoredText::success(name).render(supports_color),
                key
            )
        }
        None => {
            let library = selected
                .and_then(|s| s.library_id.get())
                .map(|id| id.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            format!(
                "Selected: {}",
                ColoredText::success(format!("Library {} (root)", library)).render(supports_color)
            )
        }
    }
}

/// `--create NAME` after the plugin accepted it.
pub fn render_created(
    response: &CreateResponse,
    parent_key: Option<&str>,
    supports_color: bool,
) -> String {
    let (name, key) = response
        .collection
        .get()
        .map(|c| (c.name.as_str(), c.key.as_str()))
        .unwrap_or(("Unknown", "unknown"));

    let mut out = format!(
        "Created: {} (Key: {})",
        ColoredText::success(name).render(supports_color),
        key
    );
    if let Some(parent) = parent_key {
        out.push_str(&format!("\nParent: {}", parent));
    }
    out
}

/// Interactive mode after the plugin accepted the pick.
pub fn render_picked(item: &SelectableItem, supports_color: bool) -> String {
    let name = ColoredText::success(&item.name).render(supports_color);
    if item.is_library_root() {
        format!("Selected: {} (library root)", name)
    } else {
        format!("Selected: {} in library {}", name, item.library_id)
    }
}

pub fn render_pick_failed(message: &str, supports_color: bool) -> String {
    format!(
        "{} {}",
        ColoredText::error("Failed to select:").render(supports_color),
        message
    )
}
