use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod analyze;
mod export;
mod report;

#[derive(Debug, Parser)]
#[command(name = "ytpulse-cli")]
#[command(about = "YouTube playlist comment sentiment analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch comments, score sentiment, and write the export file
    Analyze {
        /// Analyze these playlist IDs instead of the configured set
        #[arg(long = "playlist", value_name = "PLAYLIST_ID")]
        playlists: Vec<String>,

        /// Write the export to this path instead of the configured one
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ytpulse_core::load_app_config()?;
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Analyze { playlists, output } => {
            analyze::run_analyze(&config, playlists, output).await
        }
    }
}
