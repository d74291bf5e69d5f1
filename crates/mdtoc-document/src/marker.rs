//! Region markers and bounded region replacement.
//!
//! A TOC region is the text strictly between the end of a start marker match
//! and the beginning of the next stop marker match. Both markers survive a
//! replacement untouched.

use std::{fmt, ops::Range, str::FromStr, sync::LazyLock};

use regex::{Regex, RegexBuilder};

use crate::TocError;

/// Default start marker: a `TOC:` line, optionally with trailing blanks.
const DEFAULT_START: &str = r"^TOC:[ \t]*\r?\n";

/// Default stop marker: the next line holding nothing but blanks.
const DEFAULT_STOP: &str = r"^[ \t]*\r?\n";

/// Compiled default start marker.
static DEFAULT_START_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(DEFAULT_START).expect("default start marker is valid"));

/// Compiled default stop marker.
static DEFAULT_STOP_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(DEFAULT_STOP).expect("default stop marker is valid"));

/// Compiles a marker pattern with `^` and `$` anchored at line boundaries.
fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).multi_line(true).build()
}

/// One end of a TOC region.
#[derive(Debug, Clone)]
pub enum Marker {
    /// Exact substring.
    Literal(String),
    /// Regular expression, compiled in multi-line mode.
    Pattern(Regex),
}

impl Marker {
    /// Creates a literal marker.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compiles a pattern marker.
    pub fn pattern(pattern: &str) -> Result<Self, TocError> {
        compile(pattern)
            .map(Self::Pattern)
            .map_err(|source| TocError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// The default start marker, a line reading `TOC:`.
    pub fn default_start() -> Self {
        Self::Pattern(DEFAULT_START_RE.clone())
    }

    /// The default stop marker, the next blank line.
    pub fn default_stop() -> Self {
        Self::Pattern(DEFAULT_STOP_RE.clone())
    }

    /// Finds the first match at or after byte offset `start`.
    ///
    /// Line anchors in patterns see the text before `start`, so `^` matches
    /// at `start` only when it begins a line.
    pub fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        match self {
            Self::Literal(text) => haystack
                .get(start..)?
                .find(text.as_str())
                .map(|offset| start + offset..start + offset + text.len()),
            Self::Pattern(regex) => regex.find_at(haystack, start).map(|m| m.range()),
        }
    }
}

impl FromStr for Marker {
    type Err = TocError;

    /// Parses `/regex/` as a pattern and anything else as a literal.
    ///
    /// An empty string is rejected: it matches everywhere, so the region
    /// would never close.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TocError::EmptyMarker);
        }
        match s.strip_prefix('/').and_then(|rest| rest.strip_suffix('/')) {
            Some(pattern) if !pattern.is_empty() => Self::pattern(pattern),
            _ => Ok(Self::literal(s)),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{text:?}"),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// Locates the replaceable span between `start` and the next `stop`.
///
/// Returns `None` if the start marker is absent or no stop marker follows it.
pub fn find_region(document: &str, start: &Marker, stop: &Marker) -> Option<Range<usize>> {
    let boundary = start.find_at(document, 0)?.end;
    let stop_match = stop.find_at(document, boundary)?;
    Some(boundary..stop_match.start)
}

/// Replaces the text between the markers with `replacement`.
///
/// The document comes back unchanged if no region is found.
pub fn replace_region(document: &str, replacement: &str, start: &Marker, stop: &Marker) -> String {
    match find_region(document, start, stop) {
        Some(region) => splice_region(document, region, replacement)
            .unwrap_or_else(|| document.to_string()),
        None => document.to_string(),
    }
}

/// Returns `document` with the byte range `region` swapped for `replacement`.
///
/// Returns `None` if `region` is out of bounds, reversed, or splits a char.
pub fn splice_region(document: &str, region: Range<usize>, replacement: &str) -> Option<String> {
    let before = document.get(..region.start)?;
    let after = document.get(region.end..)?;
    if region.start > region.end {
        return None;
    }

    let mut out = String::with_capacity(before.len() + replacement.len() + after.len());
    out.push_str(before);
    out.push_str(replacement);
    out.push_str(after);
    Some(out)
}
