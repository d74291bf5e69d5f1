//! CLI support for the `mdtoc` binary.

pub mod args;

use std::process::ExitCode;

pub use args::Cli;
use mdtoc_document::update_file;

/// Updates the document named on the command line.
///
/// A document without a TOC region still counts as success.
pub fn run(cli: &Cli) -> ExitCode {
    match update_file(&cli.document, &cli.options()) {
        Ok(outcome) => {
            log::debug!("{}: {outcome:?}", cli.document.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
