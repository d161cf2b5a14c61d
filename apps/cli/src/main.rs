//! rates-coverage — builds the reference-rates coverage CSVs.
//!
//! Regenerates the full index coverage list and the factsheet-only list,
//! keeping factsheet links corrected by hand in the previous output.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
