//! HTTP client crate for the Todoist MCP server
//!
//! This crate provides the reqwest-backed implementation of the
//! [`TodoistApi`] trait against the Todoist unified API, including
//! wire-format normalization and transport error mapping.
//!
//! # Features
//!
//! - Bearer-token authentication with startup-time credential validation
//! - Cursor pagination with the documented maximum page size
//! - Wire-to-domain conversion (`checked` to `is_completed`, `added_at`
//!   to `created_at`, URL derivation from the task id)
//! - Partial update bodies that omit absent fields instead of nulling them
//!
//! # Usage
//!
//! ```rust,no_run
//! use todoist_client::TodoistClient;
//! use todo_core::TaskService;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TodoistClient::new("your-api-token")?;
//! let service = TaskService::new(Arc::new(client));
//!
//! let tasks = service.list_tasks(None, None).await?;
//! println!("{} active tasks", tasks.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod wire;

pub use client::{TodoistClient, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT};

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    api::TodoistApi,
    error::{Result, TaskError},
    models::{NewTask, Page, Project, Task, TaskSummary, UpdateTask},
};
