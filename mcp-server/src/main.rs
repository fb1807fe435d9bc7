mod config;
mod setup;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use rmcp::{transport::stdio, ServiceExt};
use setup::initialize_app;
use telemetry::{init_telemetry, log_config_validation, log_startup_info};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "todoist-mcp")]
#[command(about = "Todoist MCP Server")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CONFIG_FILE")]
    config: Option<String>,

    /// Todoist API token override
    #[arg(long, env = "TODOIST_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Assets directory override
    #[arg(long, env = "ASSETS_DIR")]
    assets_dir: Option<String>,

    /// Log level override
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(config_file) => Config::from_file(config_file)?,
        None => Config::from_env()?,
    };

    // Apply CLI overrides
    if let Some(ref api_token) = cli.api_token {
        config.todoist.api_token = Some(api_token.clone());
    }

    if let Some(ref assets_dir) = cli.assets_dir {
        config.assets.dir = assets_dir.into();
    }

    if let Some(ref log_level) = cli.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(&cli).context("Failed to load configuration")?;

    // Initialize telemetry/logging system
    init_telemetry(&config.logging).context("Failed to initialize telemetry")?;

    // Log configuration validation
    log_config_validation(&config);

    // Validate configuration (will exit if invalid)
    if let Err(e) = config.validate() {
        error!(error = %e, "Configuration validation failed");
        std::process::exit(1);
    }

    // Log startup information
    log_startup_info(&config);

    // Initialize application (client, service and server)
    info!("Initializing MCP server components");
    let server = initialize_app(&config).context("Failed to initialize application")?;

    info!("Starting Todoist MCP server on stdio");
    let running = match server.serve(stdio()).await {
        Ok(running) => running,
        Err(e) => {
            error!(error = %e, "MCP handshake failed");
            std::process::exit(3);
        }
    };

    // Setup graceful shutdown handling
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    // Spawn a task to handle shutdown signals
    tokio::spawn(async move {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to register SIGTERM handler");
        let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
            .expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT, initiating graceful shutdown");
            }
        }

        let _ = shutdown_tx.send(());
    });

    // Run until the client disconnects or a shutdown signal arrives
    tokio::select! {
        result = running.waiting() => {
            match result {
                Ok(reason) => {
                    info!(?reason, "MCP server shut down cleanly");
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "MCP server error");
                    std::process::exit(3);
                }
            }
        }
        _ = shutdown_rx => {
            info!("Shutdown signal received, stopping server");
            Ok(())
        }
    }
}
