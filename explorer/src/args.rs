use std::path::PathBuf;

use clap::Parser;

/// Exoplanet Explorer
#[derive(Debug, Parser)]
#[command(name = "explorer", about = "Query service for the exoplanet catalog")]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, default_value = "explorer.toml", env = "EXPLORER_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "EXPLORER_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
