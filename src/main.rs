//! Binary entry point.

use clap::Parser;
use color_eyre::Result;

use tunnelstate::cli::{args::Args, commands};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    commands::run(args)
}
