//! Bullet list rendering for extracted headings.

use crate::{Heading, derive_identifier};

/// Indentation added per nesting level below depth 2.
const INDENT: &str = "  ";

/// Renders headings as a nested bullet list of fragment links.
///
/// Each heading becomes `<indent>* [text](#identifier)\n`. Depth 2 sits at
/// the left margin and every deeper level adds one indent step. An empty
/// slice renders as an empty string.
pub fn render_toc(headings: &[Heading]) -> String {
    headings
        .iter()
        .map(|heading| {
            format!(
                "{}* [{}](#{})\n",
                INDENT.repeat(heading.depth.saturating_sub(2)),
                heading.text,
                derive_identifier(&heading.text)
            )
        })
        .collect()
}
