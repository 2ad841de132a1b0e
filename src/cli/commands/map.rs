use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::catalog::{FamilyCatalog, TargetCatalog};
use crate::pipeline::BatchMapper;

#[derive(Args)]
pub struct MapArgs {
    /// IUPHAR target table CSV
    #[arg(long, value_name = "FILE")]
    pub targets: PathBuf,

    /// IUPHAR family table CSV
    #[arg(long, value_name = "FILE")]
    pub families: PathBuf,

    /// Input CSV with a uniprot_id column
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: String,
}

pub fn run(args: MapArgs) -> anyhow::Result<()> {
    let delimiter = super::parse_delimiter(&args.delimiter)?;

    let targets = TargetCatalog::from_csv_path(&args.targets)
        .with_context(|| format!("loading target table {}", args.targets.display()))?;
    let families = FamilyCatalog::from_csv_path(&args.families)
        .with_context(|| format!("loading family table {}", args.families.display()))?;
    info!(
        "catalogs ready: {} targets, {} families",
        targets.len(),
        families.len()
    );

    let mapper = BatchMapper::new(&targets, &families);
    let mapped = mapper
        .map_csv_path(&args.input, &args.output, delimiter)
        .with_context(|| format!("mapping {}", args.input.display()))?;
    info!("wrote {} rows to {}", mapped.len(), args.output.display());
    Ok(())
}
