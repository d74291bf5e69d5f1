//! The table of contents pipeline.
//!
//! headings -> rendered list -> region replacement -> atomic rewrite.

use std::{fs, path::Path};

use crate::{
    DEFAULT_MIN_DEPTH, Marker, TocError, extract_headings, find_region, render_toc, rewrite,
    splice_region,
};

/// Settings for one table of contents update.
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Marker whose match ends just before the TOC region.
    pub start: Marker,
    /// Marker whose match begins just after the TOC region.
    pub stop: Marker,
    /// Shallowest heading depth listed.
    pub min_depth: usize,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            start: Marker::default_start(),
            stop: Marker::default_stop(),
            min_depth: DEFAULT_MIN_DEPTH,
        }
    }
}

/// What an update did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The region was rewritten with a different list.
    Replaced,
    /// The region already held the current list.
    Unchanged,
    /// No start marker, or no stop marker after it.
    NoRegion,
}

/// Result of running the pipeline over a document.
#[derive(Debug, Clone)]
pub struct TocUpdate {
    /// The full document after the update.
    pub content: String,
    /// What happened to the region.
    pub outcome: Outcome,
    /// Number of headings listed.
    pub heading_count: usize,
}

/// Regenerates the table of contents inside `document`.
pub fn update_toc(document: &str, options: &TocOptions) -> TocUpdate {
    let headings = extract_headings(document, options.min_depth);
    log::debug!("found {} headings", headings.len());

    let Some(region) = find_region(document, &options.start, &options.stop) else {
        log::debug!("no region between {} and {}", options.start, options.stop);
        return TocUpdate {
            content: document.to_string(),
            outcome: Outcome::NoRegion,
            heading_count: headings.len(),
        };
    };

    let toc = render_toc(&headings);
    let outcome = if document[region.clone()] == toc {
        Outcome::Unchanged
    } else {
        Outcome::Replaced
    };

    let content = splice_region(document, region, &toc).unwrap_or_else(|| document.to_string());

    TocUpdate {
        content,
        outcome,
        heading_count: headings.len(),
    }
}

/// Reads a file as text, replacing invalid UTF-8 with U+FFFD.
pub fn read_lossy(path: &Path) -> Result<String, TocError> {
    let bytes = fs::read(path).map_err(|source| TocError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Regenerates the table of contents of the file at `path` in place.
///
/// The file is replaced atomically, and only when its list changed; other
/// files keep their original bytes, including any invalid UTF-8.
pub fn update_file(path: &Path, options: &TocOptions) -> Result<Outcome, TocError> {
    let document = read_lossy(path)?;
    let update = update_toc(&document, options);
    if update.outcome == Outcome::Replaced {
        rewrite(path, &update.content)?;
    }

    match update.outcome {
        Outcome::Replaced => log::info!(
            "{}: table of contents updated ({} entries)",
            path.display(),
            update.heading_count
        ),
        Outcome::Unchanged => log::info!("{}: table of contents up to date", path.display()),
        Outcome::NoRegion => log::info!("{}: no table of contents region", path.display()),
    }

    Ok(update.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The end-to-end sample document before any update.
    const DEMO: &str = "# Demo\n\nTOC:\n\n## Alpha\n\ntext\n\n## Bravo\n\ntext\n";

    /// The sample document with its table of contents filled in.
    const DEMO_WITH_TOC: &str =
        "# Demo\n\nTOC:\n* [Alpha](#alpha)\n* [Bravo](#bravo)\n\n## Alpha\n\ntext\n\n## Bravo\n\ntext\n";

    #[test]
    fn test_end_to_end_scenario() {
        let update = update_toc(DEMO, &TocOptions::default());
        assert_eq!(update.content, DEMO_WITH_TOC);
        assert_eq!(update.outcome, Outcome::Replaced);
        assert_eq!(update.heading_count, 2);
    }

    #[test]
    fn test_second_run_unchanged() {
        let update = update_toc(DEMO_WITH_TOC, &TocOptions::default());
        assert_eq!(update.content, DEMO_WITH_TOC);
        assert_eq!(update.outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_no_region() {
        let doc = "# Demo\n\n## Alpha\n";
        let update = update_toc(doc, &TocOptions::default());
        assert_eq!(update.content, doc);
        assert_eq!(update.outcome, Outcome::NoRegion);
    }

    #[test]
    fn test_no_headings_empties_region() {
        let doc = "TOC:\n* [Old](#old)\n\nbody\n";
        let update = update_toc(doc, &TocOptions::default());
        assert_eq!(update.content, "TOC:\n\nbody\n");
        assert_eq!(update.outcome, Outcome::Replaced);
    }

    #[test]
    fn test_nested_headings() {
        let doc = "TOC:\n\n## Setup\n### Install the CLI\n#### On macOS\n## Usage\n";
        let update = update_toc(doc, &TocOptions::default());
        assert_eq!(
            update.content,
            "TOC:\n* [Setup](#setup)\n  * [Install the CLI](#install-the-cli)\n    \
             * [On macOS](#on-macos)\n* [Usage](#usage)\n\n## Setup\n### Install the CLI\n\
             #### On macOS\n## Usage\n"
        );
    }

    #[test]
    fn test_custom_options() {
        let options = TocOptions {
            start: Marker::literal("<!-- toc -->\n"),
            stop: Marker::literal("<!-- /toc -->"),
            min_depth: 3,
        };
        let doc = "<!-- toc -->\n<!-- /toc -->\n## Skipped\n### Kept\n";
        let update = update_toc(doc, &options);
        assert_eq!(
            update.content,
            "<!-- toc -->\n  * [Kept](#kept)\n<!-- /toc -->\n## Skipped\n### Kept\n"
        );
    }

    #[test]
    fn test_update_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, DEMO).unwrap();

        let outcome = update_file(&path, &TocOptions::default()).unwrap();

        assert_eq!(outcome, Outcome::Replaced);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEMO_WITH_TOC);
    }

    #[test]
    fn test_update_file_scrubs_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, b"TOC:\n\n## Caf\xe9\n").unwrap();

        update_file(&path, &TocOptions::default()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "TOC:\n* [Caf\u{fffd}](#caf-)\n\n## Caf\u{fffd}\n"
        );
    }

    #[test]
    fn test_update_file_without_region_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.md");
        let original: &[u8] = b"# Caf\xe9\n\n## Men\xfc\n";
        fs::write(&path, original).unwrap();

        let outcome = update_file(&path, &TocOptions::default()).unwrap();

        assert_eq!(outcome, Outcome::NoRegion);
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_update_file_unchanged_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        let original: &[u8] = b"TOC:\n* [Alpha](#alpha)\n\n## Alpha\n\xff\n";
        fs::write(&path, original).unwrap();

        let outcome = update_file(&path, &TocOptions::default()).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_update_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.md");

        let err = update_file(&path, &TocOptions::default()).unwrap_err();

        assert!(matches!(err, TocError::ReadFile { .. }));
        assert!(!path.exists());
    }
}
