//! Selector Front-End
//!
//! Offers the flattened item list through the fuzzy finder, falling back to
//! a numbered prompt. Returns exactly one item or nothing.
//!
//! Two numbering schemes meet here and must stay apart:
//! - the fuzzy finder is fed 0-based flattened positions
//! - the numbered prompt shows 1-based display indices from the tree renderer

use std::io::{self, BufRead, Write};

use crate::domain::entities::{Library, SelectableItem};
use crate::domain::ports::FuzzyFinder;
use crate::domain::services::{finder_input, render_tree_with, Connectors, DisplayIndex};

const TREE_PREFIX: &str = "    ";

pub struct Selector<F: FuzzyFinder> {
    finder: F,
    use_fuzzy: bool,
    connectors: Connectors,
}

impl<F: FuzzyFinder> Selector<F> {
    /// Draws the numbered list with unicode connectors.
    pub fn new(finder: F, use_fuzzy: bool) -> Self {
        Self {
            finder,
            use_fuzzy,
            connectors: Connectors::UNICODE,
        }
    }

    /// Connectors for the numbered list, e.g. ASCII on a C locale.
    pub fn with_connectors(mut self, connectors: Connectors) -> Self {
        self.connectors = connectors;
        self
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    /// Choose one of `items`, which must be the flattening of `libraries`.
    ///
    /// Never fails: cancellation, bad input, end of input, and finder
    /// failures all end in `None` (finder failures first fall back to the
    /// numbered prompt).
    pub fn select<'i, R: BufRead, W: Write>(
        &self,
        items: &'i [SelectableItem],
        libraries: &[Library],
        input: &mut R,
        out: &mut W,
    ) -> Option<&'i SelectableItem> {
        if self.use_fuzzy {
            if let Some(position) = self.fuzzy_position(items) {
                return items.get(position);
            }
            let _ = writeln!(
                out,
                "({} not found or cancelled, using numbered list)\n",
                self.finder.name()
            );
        }

        match numbered_position(items, libraries, &self.connectors, input, out) {
            Ok(position) => position.and_then(|p| items.get(p)),
            Err(err) => {
                tracing::debug!(error = %err, "numbered selection aborted");
                None
            }
        }
    }

    fn fuzzy_position(&self, items: &[SelectableItem]) -> Option<usize> {
        if !self.finder.is_available() {
            tracing::debug!(finder = self.finder.name(), "fuzzy finder not available");
            return None;
        }

        match self.finder.pick(&finder_input(items)) {
            Ok(line) => {
                let position = parse_position(&line, items.len());
                if position.is_none() {
                    tracing::warn!(line = %line, "could not read position from fuzzy finder output");
                }
                position
            }
            Err(err) => {
                tracing::debug!(error = %err, "fuzzy finder gave no selection");
                None
            }
        }
    }
}

/// Read the leading `<position>` token of a finder output line.
pub fn parse_position(line: &str, len: usize) -> Option<usize> {
    let token = line.trim().split(':').next()?.trim();
    token.parse::<usize>().ok().filter(|&p| p < len)
}

/// Print every library root and its tree with display indices, then read
/// one line and map it to a flattened position.
fn numbered_position<R: BufRead, W: Write>(
    items: &[SelectableItem],
    libraries: &[Library],
    connectors: &Connectors,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<usize>> {
    let mut next = DisplayIndex::FIRST;
    for library in libraries {
        writeln!(out, "[{}] {} (Library root)", next, library.name)?;
        next = next.next();

        let rendered = render_tree_with(&library.collections, TREE_PREFIX, next, connectors);
        write!(out, "{}", rendered.to_text())?;
        next = rendered.next_index;

        writeln!(out)?;
    }
    if next.get() - 1 != items.len() {
        tracing::warn!(
            shown = next.get() - 1,
            items = items.len(),
            "numbered list and selectable items differ in length"
        );
    }

    write!(out, "Select number (or 'q' to quit): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let choice = line.trim();
    if choice.eq_ignore_ascii_case("q") {
        return Ok(None);
    }

    let Ok(number) = choice.parse::<i64>() else {
        return Ok(None);
    };
    if number < 1 || number as u64 > items.len() as u64 {
        writeln!(out, "Invalid selection.")?;
        return Ok(None);
    }

    Ok(Some((number - 1) as usize))
}
