//! Tree Renderer
//!
//! Draws a collection forest with box-drawing connectors and numbers each
//! visited node with a 1-based [`DisplayIndex`].
//!
//! A display index is a numbered-prompt convenience only. It is not a
//! position in the flattened selection list; see `flattener`.

use std::fmt;

use crate::domain::entities::CollectionNode;

/// 1-based pre-order number shown next to a node, e.g. `[3] Papers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub const FIRST: DisplayIndex = DisplayIndex(1);

    /// Returns `None` for zero.
    pub fn new(value: usize) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for DisplayIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connector glyphs used to draw branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectors {
    pub branch: &'static str,
    pub last: &'static str,
    pub continuation: &'static str,
    pub blank: &'static str,
}

impl Connectors {
    pub const UNICODE: Connectors = Connectors {
        branch: "├── ",
        last: "└── ",
        continuation: "│   ",
        blank: "    ",
    };

    pub const ASCII: Connectors = Connectors {
        branch: "|-- ",
        last: "`-- ",
        continuation: "|   ",
        blank: "    ",
    };

    pub fn for_unicode(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self::UNICODE
        } else {
            Self::ASCII
        }
    }
}

/// Output of a render: printable lines, the visited nodes with their
/// indices, and the next unused index.
#[derive(Debug, Clone)]
pub struct RenderedTree<'a> {
    pub lines: Vec<String>,
    pub visited: Vec<(DisplayIndex, &'a CollectionNode)>,
    pub next_index: DisplayIndex,
}

impl RenderedTree<'_> {
    /// Lines joined with `\n`, each terminated.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Render a forest with unicode connectors.
pub fn render_tree<'a>(
    nodes: &'a [CollectionNode],
    prefix: &str,
    start: DisplayIndex,
) -> RenderedTree<'a> {
    render_tree_with(nodes, prefix, start, &Connectors::UNICODE)
}

/// Render a forest with the given connectors.
pub fn render_tree_with<'a>(
    nodes: &'a [CollectionNode],
    prefix: &str,
    start: DisplayIndex,
    connectors: &Connectors,
) -> RenderedTree<'a> {
    let mut rendered = RenderedTree {
        lines: Vec::new(),
        visited: Vec::new(),
        next_index: start,
    };
    walk(nodes, prefix, connectors, &mut rendered);
    rendered
}

fn walk<'a>(
    nodes: &'a [CollectionNode],
    prefix: &str,
    connectors: &Connectors,
    out: &mut RenderedTree<'a>,
) {
    // (node, prefix drawn before its connector, whether it is the last sibling)
    let mut stack: Vec<(&'a CollectionNode, String, bool)> = Vec::new();
    push_siblings(&mut stack, nodes, prefix);

    while let Some((node, prefix, is_last)) = stack.pop() {
        let (branch, carry) = if is_last {
            (connectors.last, connectors.blank)
        } else {
            (connectors.branch, connectors.continuation)
        };

        let index = out.next_index;
        out.lines
            .push(format!("{}{}[{}] {}", prefix, branch, index, node.name));
        out.visited.push((index, node));
        out.next_index = index.next();

        if !node.children.is_empty() {
            push_siblings(&mut stack, &node.children, &format!("{}{}", prefix, carry));
        }
    }
}

/// Push in reverse so the first sibling is popped first.
fn push_siblings<'a>(
    stack: &mut Vec<(&'a CollectionNode, String, bool)>,
    nodes: &'a [CollectionNode],
    prefix: &str,
) {
    let last = nodes.len().saturating_sub(1);
    for (i, node) in nodes.iter().enumerate().rev() {
        stack.push((node, prefix.to_string(), i == last));
    }
}
