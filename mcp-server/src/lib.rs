//! Todoist MCP Server Library
//!
//! This library provides the supporting pieces for the Todoist MCP
//! server binary: configuration management, telemetry setup, and wiring
//! of the API client, task service and protocol server.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use config::Config;
pub use setup::{create_client, create_server, create_service, initialize_app};
pub use telemetry::init_telemetry;
