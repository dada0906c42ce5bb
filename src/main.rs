use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use flatly::cli::{App, Cli};
use flatly::config::{self, Config};
use flatly::logger::setup_logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = config::config_path();
    let config: Arc<Config> = Arc::new(config::read_config_from(config_path.as_deref())?);

    // Initialize logger
    setup_logger(config.log_level_filter())?;

    match &config_path {
        Some(path) => info!("Loaded configuration from {path}"),
        None => info!("CONFIG_PATH not set, using built-in defaults"),
    }

    let app = App::from_config(config)?;

    if let Err(err) = app.run(cli.command).await {
        error!("Error: {:?}", err)
    }

    Ok(())
}
