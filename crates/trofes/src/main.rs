//! Trofes recipe engine server

use clap::Parser;
use std::path::PathBuf;
use trofes_server::{check, run};

/// Command line interface for the Trofes recipe engine
#[derive(Parser, Debug)]
#[command(name = "trofes")]
#[command(about = "Trofes recipe engine - cluster-aware recipe recommendations")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Load and validate both model bundles, then exit
    #[arg(long)]
    pub check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if cli.check {
        return check(cli.config.as_deref());
    }
    run(cli.config.as_deref()).await
}
