//! mdtoc: markdown table of contents maintenance
//!
//! Rewrites a markdown document in place so that the bullet list under its
//! `TOC:` line links to every sub-section heading. Documents without a TOC
//! region pass through untouched, so the tool is safe to run over any file.

#![warn(missing_docs)]

pub mod cli;
