pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gtopclass",
    version,
    about = "IUPHAR/Guide to Pharmacology target classification",
    long_about = "Maps UniProt accessions to IUPHAR classification records (class, subclass, \
                  family chain, descriptive paths) and cleans bulk classification tables by \
                  reconciling alternative-name matches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map a table of UniProt accessions to classification columns
    Map(commands::map::MapArgs),

    /// Deduplicate a bulk classification table
    Dedup(commands::dedup::DedupArgs),
}
