//! strtohex: print each token's length, then the tokens as a hex list.
mod cli;
mod report;

use std::io;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    strtohex_logging::initialize_stderr(LevelFilter::Warn);

    let stdout = io::stdout();
    report::run(&args.input, &mut stdout.lock()).context("writing report to stdout")
}
