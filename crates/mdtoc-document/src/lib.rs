//! Table of contents generation for markdown documents.
//!
//! This crate scans a document for `##`-and-deeper headings and writes a
//! bullet list of links to them between two markers, in place:
//! - Line-based heading extraction (no markdown parser)
//! - Fragment identifiers compatible with the hosting platform's anchors
//! - Bounded replacement between literal or pattern markers
//! - Atomic rewrite through a temporary file and rename

#![warn(missing_docs)]

mod error;
mod heading;
mod marker;
mod render;
mod rewrite;
mod slug;
mod toc;

pub use error::TocError;
pub use heading::{DEFAULT_MIN_DEPTH, Heading, extract_headings};
pub use marker::{Marker, find_region, replace_region, splice_region};
pub use render::render_toc;
pub use rewrite::{rewrite, write_atomic};
pub use slug::derive_identifier;
pub use toc::{Outcome, TocOptions, TocUpdate, read_lossy, update_file, update_toc};
