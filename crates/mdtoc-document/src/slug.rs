//! Heading identifier generation.
//!
//! Identifiers match the fragment ids the hosting platform assigns to headings:
//! - Lowercase the text
//! - Replace every run of non-word characters with a single hyphen
//!
//! Leading and trailing hyphens are kept, and duplicates are not numbered.
//! Two headings with the same text link to the same anchor.

/// Derives the link fragment identifier for a heading's text.
///
/// Word characters are letters, digits, and underscore. Every maximal run of
/// anything else collapses to one `-`.
pub fn derive_identifier(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut result = String::with_capacity(lower.len());
    let mut in_run = false;

    for c in lower.chars() {
        if c.is_alphanumeric() || c == '_' {
            result.push(c);
            in_run = false;
        } else if !in_run {
            result.push('-');
            in_run = true;
        }
    }

    result
}
