use crate::errors::AppResult;
use clap::Parser;

pub mod commands;

/// Streaming token statistics analyser
#[derive(Parser)]
#[command(name = "corpus-stats")]
#[command(about = "Streaming token statistics analyser for sentinel-delimited text corpora")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub command: commands::analyse::AnalyseCommand,
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();
    cli.command.run()
}
