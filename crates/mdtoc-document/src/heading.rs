//! Heading extraction by line scan.
//!
//! No markdown parser is involved: a heading is any line that starts with at
//! least `min_depth` `#` characters followed by one or more spaces. Fenced
//! code blocks are not tracked, so a `## ` line inside one counts too.

/// Marker character repeated to denote heading depth.
const MARKER: char = '#';

/// Default minimum depth; top-level `#` titles are skipped.
pub const DEFAULT_MIN_DEPTH: usize = 2;

/// A heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of marker characters (2 for `##`, 3 for `###`, ...).
    pub depth: usize,
    /// Heading text exactly as written after the marker and its spaces.
    pub text: String,
}

impl Heading {
    /// Creates a heading.
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }
}

/// Extracts headings of at least `min_depth` markers in document order.
///
/// A `min_depth` of zero is treated as one. Duplicates are kept.
pub fn extract_headings(document: &str, min_depth: usize) -> Vec<Heading> {
    let min_depth = min_depth.max(1);

    document
        .split('\n')
        .filter_map(|line| parse_heading_line(line.strip_suffix('\r').unwrap_or(line)))
        .filter(|heading| heading.depth >= min_depth)
        .collect()
}

/// Parses one line (without its terminator) as a heading.
fn parse_heading_line(line: &str) -> Option<Heading> {
    let rest = line.trim_start_matches(MARKER);
    let depth = line.len() - rest.len();
    if depth == 0 {
        return None;
    }

    let text = rest.trim_start_matches(' ');
    if text.len() == rest.len() {
        return None;
    }

    Some(Heading::new(depth, text))
}
