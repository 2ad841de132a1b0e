use clap::Parser;
use gtopclass::cli::{Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // GTOPCLASS_LOG overrides the default level; -v / -vv raise it further
    let log_level = match cli.verbose {
        0 => std::env::var("GTOPCLASS_LOG").unwrap_or_else(|_| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);

        let exit_code = match e.downcast_ref::<gtopclass::GtopError>() {
            Some(gtopclass::GtopError::Config(_)) => 2,
            Some(gtopclass::GtopError::Io(_)) | Some(gtopclass::GtopError::Csv(_)) => 3,
            Some(gtopclass::GtopError::MissingColumns(_))
            | Some(gtopclass::GtopError::Parse(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Map(args) => gtopclass::cli::commands::map::run(args),
        Commands::Dedup(args) => gtopclass::cli::commands::dedup::run(args),
    }
}
