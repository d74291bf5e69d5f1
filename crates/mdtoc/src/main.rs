//! Command-line interface for the `mdtoc` table of contents tool.

use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use mdtoc::cli::{self, Cli};

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    cli::run(&cli)
}
