//! Command-line client for the shopping-list daemon.

use clap::Parser;
use color_eyre::eyre::Result;
use shopping_list_daemon::cli::{run, Cli};
use shopping_list_daemon::logging::init_client_logging;
use shopping_list_daemon::user_config::{load_user_config, UserConfig};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_client_logging(cli.log_level)?;

    let config = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    run(cli, &config).await
}
