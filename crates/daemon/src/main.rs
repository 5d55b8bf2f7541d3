use anyhow::Result;
use clap::Parser;
use inkwell_core::tracing::{config::InstrumentationConfig, init::init_tracing};
use inkwell_daemon::Settings;
use std::path::PathBuf;
use tracing::{error, info};

/// Inkwell - blog front-end page server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = Settings::load(cli.config.as_deref())?;

    let instrumentation_config = InstrumentationConfig {
        log_level: settings.logging.level.clone(),
        json: settings.logging.json,
        ..InstrumentationConfig::default()
    };
    init_tracing(&instrumentation_config)?;

    if let Some(path) = &cli.config {
        info!("Loaded configuration from: {}", path.display());
    }
    info!(
        api = %settings.frontend.api.base_url,
        "Server running at: http://{}/",
        settings.server.bind_addr
    );

    inkwell_daemon::run(&settings, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal");
    })
    .await?;

    Ok(())
}
