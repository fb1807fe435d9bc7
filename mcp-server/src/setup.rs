use anyhow::{Context, Result};
use mcp_protocol::McpServer;
use std::sync::Arc;
use todo_core::{TaskError, TaskService};
use todoist_client::TodoistClient;
use tracing::{info, warn};

use crate::config::Config;

/// Create the Todoist API client from configuration.
///
/// Fails fast when no API token is configured so a misconfigured server
/// never reaches the protocol handshake.
pub fn create_client(config: &Config) -> Result<Arc<TodoistClient>> {
    info!("Creating Todoist API client");

    let token = config
        .todoist
        .api_token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(TaskError::missing_token)?;

    let client = TodoistClient::with_base_url(token, &config.todoist.api_base_url)
        .context("Failed to create Todoist client")?;

    info!(base_url = %config.todoist.api_base_url, "Todoist API client created");
    Ok(Arc::new(client))
}

/// Create the task service on top of an API client
pub fn create_service(client: Arc<TodoistClient>) -> TaskService<TodoistClient> {
    TaskService::new(client)
}

/// Create and configure the MCP server
pub fn create_server(config: &Config) -> Result<McpServer<TodoistClient>> {
    info!("Creating MCP server");

    let client = create_client(config)?;
    let service = create_service(client);
    let server = McpServer::new(service, config.assets.dir.clone());

    info!("MCP server created successfully");
    Ok(server)
}

/// Initialize the complete application
pub fn initialize_app(config: &Config) -> Result<McpServer<TodoistClient>> {
    info!("Initializing application");

    verify_assets_directory(config);

    let server = create_server(config).context("Failed to create server")?;

    info!("Application initialized successfully");
    Ok(server)
}

/// Warn when the assets directory is missing.
///
/// Resource and prompt reads degrade to diagnostic strings at request
/// time, so a missing directory is an operator warning, not a startup
/// failure.
pub fn verify_assets_directory(config: &Config) {
    let dir = &config.assets.dir;
    if !dir.is_dir() {
        warn!(
            assets_dir = %dir.display(),
            "Assets directory not found; resource and prompt reads will return errors"
        );
    }
}
