//! Clap argument definitions for the `mdtoc` CLI.

use std::path::PathBuf;

use clap::Parser;
use mdtoc_document::{DEFAULT_MIN_DEPTH, Marker, TocError, TocOptions};

/// Parse a region marker: `/regex/` for a pattern, anything else literally.
fn parse_marker(s: &str) -> Result<Marker, String> {
    s.parse().map_err(|e: TocError| e.to_string())
}

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "mdtoc", version)]
#[command(about = "Insert or refresh a markdown table of contents in place")]
pub struct Cli {
    /// Markdown document to update in place
    pub document: PathBuf,

    /// Text (or /regex/) ending just before the TOC [default: a line reading "TOC:"]
    #[arg(value_parser = parse_marker, allow_hyphen_values = true)]
    pub start: Option<Marker>,

    /// Text (or /regex/) starting just after the TOC [default: the next blank line]
    #[arg(value_parser = parse_marker, allow_hyphen_values = true)]
    pub stop: Option<Marker>,
}

impl Cli {
    /// Builds pipeline options, filling in default markers.
    pub fn options(&self) -> TocOptions {
        TocOptions {
            start: self.start.clone().unwrap_or_else(Marker::default_start),
            stop: self.stop.clone().unwrap_or_else(Marker::default_stop),
            min_depth: DEFAULT_MIN_DEPTH,
        }
    }
}
