use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::pipeline::{CuratedKeys, DedupPipeline};

#[derive(Args)]
pub struct DedupArgs {
    /// Input bulk classification CSV
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: String,

    /// JSON file overriding the built-in curated key sets
    #[arg(long, value_name = "FILE")]
    pub curated_keys: Option<PathBuf>,
}

pub fn run(args: DedupArgs) -> anyhow::Result<()> {
    let delimiter = super::parse_delimiter(&args.delimiter)?;

    let curated = match &args.curated_keys {
        Some(path) => CuratedKeys::from_json_path(path)
            .with_context(|| format!("loading curated keys {}", path.display()))?,
        None => CuratedKeys::default(),
    };

    let pipeline = DedupPipeline::new(curated);
    let cleaned = pipeline
        .run_csv_path(&args.input, &args.output, delimiter)
        .with_context(|| format!("deduplicating {}", args.input.display()))?;
    info!("wrote {} rows to {}", cleaned.len(), args.output.display());
    Ok(())
}
