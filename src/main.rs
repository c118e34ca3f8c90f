use clap::Parser;

use rideflow::cli::Cli;
use rideflow::config::{Config, ConfigStore};
use rideflow::demo;
use rideflow::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = ConfigStore::open(path)?;
    init_tracing(cli.log_level(&config.get().logging.level));
    tracing::info!(config = %config.path().display(), "Starting");

    demo::run(&cli, &config).await
}
