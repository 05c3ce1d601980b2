//! Domain Services
//!
//! Pure transformations over the collection hierarchy. No I/O.

mod flattener;
mod tree_builder;
mod tree_renderer;

pub use flattener::{finder_input, flatten};
pub use tree_builder::{build_tree, sibling_order};
pub use tree_renderer::{render_tree, render_tree_with, Connectors, DisplayIndex, RenderedTree};
