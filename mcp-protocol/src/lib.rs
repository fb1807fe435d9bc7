//! MCP protocol layer for the Todoist task server.
//!
//! This crate bridges the core task service onto the Model Context
//! Protocol using the official Rust SDK. It provides:
//!
//! - A tool router covering the seven task operations
//! - A static resource catalog backed by files on disk
//! - A prompt library rendering handlebars templates
//! - Error mapping from core errors to MCP error data
//!
//! # Usage
//!
//! ```no_run
//! use mcp_protocol::McpServer;
//! use mocks::MockTodoistApi;
//! use rmcp::{transport::stdio, ServiceExt};
//! use std::sync::Arc;
//! use todo_core::TaskService;
//!
//! async fn start_server() -> Result<(), Box<dyn std::error::Error>> {
//!     // In real usage the API would be todoist_client::TodoistClient
//!     let api = Arc::new(MockTodoistApi::new());
//!     let server = McpServer::new(TaskService::new(api), "assets");
//!     let running = server.serve(stdio()).await?;
//!     running.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod prompts;
pub mod resources;
pub mod serialization;
pub mod server;

// Re-export key types for easier usage
pub use error::into_mcp_error;
pub use prompts::PromptLibrary;
pub use resources::ResourceCatalog;
pub use server::{
    CompleteTaskRequest, CreateTaskRequest, DeleteTaskRequest, FilterTasksRequest,
    GetTasksRequest, McpServer, UpdateTaskRequest,
};

// Re-export core types for external consumers
pub use todo_core::{
    NewTask, Project, Task, TaskError, TaskService, TaskSummary, TodoistApi, UpdateTask,
};
