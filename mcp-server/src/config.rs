use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub todoist: TodoistConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TodoistConfig {
    /// API token for the Todoist account. Usually supplied via the
    /// TODOIST_API_TOKEN environment variable rather than a file.
    pub api_token: Option<String>,
    /// Base URL of the Todoist REST API
    pub api_base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssetsConfig {
    /// Directory holding resource files and prompt templates
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json, compact)
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl Config {
    /// Load configuration from environment variables and config files
    pub fn from_env() -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        // Start with default configuration
        builder = builder.add_source(File::from_str(
            include_str!("../config/default.toml"),
            FileFormat::Toml,
        ));

        // Add config file if specified
        if let Ok(config_file) = env::var("CONFIG_FILE") {
            builder = builder.add_source(
                File::with_name(&config_file)
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        // Add environment variable overrides with MCP_ prefix
        builder = builder.add_source(
            Environment::with_prefix("MCP")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let mut result: Config = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // Handle standard environment variables (TODOIST_API_TOKEN etc.)
        // This provides compatibility while using the config crate as the primary source
        Self::apply_standard_env_vars(&mut result);

        Ok(result)
    }

    /// Load configuration from a specific file path
    pub fn from_file(path: &str) -> Result<Self> {
        let builder = ConfigBuilder::builder()
            .add_source(File::with_name(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix("MCP")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder
            .build()
            .context("Failed to build configuration from file")?;

        let mut result: Config = config
            .try_deserialize()
            .context("Failed to deserialize configuration from file")?;

        Self::apply_standard_env_vars(&mut result);

        Ok(result)
    }

    /// Apply standard environment variables (TODOIST_API_TOKEN,
    /// TODOIST_API_BASE_URL, LOG_LEVEL). The MCP_ prefixed form cannot
    /// express multi-word field names, so the common deployment variables
    /// are read directly.
    fn apply_standard_env_vars(config: &mut Config) {
        if let Ok(token) = env::var("TODOIST_API_TOKEN") {
            if !token.is_empty() {
                config.todoist.api_token = Some(token);
            }
        }

        if let Ok(base_url) = env::var("TODOIST_API_BASE_URL") {
            config.todoist.api_base_url = base_url;
        }

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.logging.level = log_level;
        }
    }

    /// Merge current configuration with environment variables
    pub fn merge_with_env(mut self) -> Result<Self> {
        Self::apply_standard_env_vars(&mut self);
        Ok(self)
    }

    /// Whether an API token has been configured
    pub fn has_api_token(&self) -> bool {
        self.todoist
            .api_token
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ));
            }
        }

        // Validate API base URL
        if !self.todoist.api_base_url.starts_with("http://")
            && !self.todoist.api_base_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "Todoist API base URL must start with 'http://' or 'https://'. Got: {}",
                self.todoist.api_base_url
            ));
        }

        // Validate assets directory
        if self.assets.dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("Assets directory cannot be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            todoist: TodoistConfig {
                api_token: None,
                api_base_url: todoist_client::DEFAULT_BASE_URL.to_string(),
            },
            assets: AssetsConfig {
                dir: PathBuf::from("assets"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}
