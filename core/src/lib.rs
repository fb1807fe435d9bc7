//! Todo Core Library
//!
//! This crate provides the domain models, business logic, and trait interfaces
//! for the Todoist MCP server. All other crates depend on the types and
//! interfaces defined here.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - Core domain records (Task, TaskSummary, Project, etc.)
//! - [`error`] - Error types and result handling
//! - [`api`] - Trait interface to the remote Todoist service
//! - [`service`] - Task operations: validation, pagination, filtering
//! - [`validation`] - Input validation utilities
//!
//! # Example
//!
//! ```rust
//! use todo_core::{models::NewTask, validation::TaskValidator};
//!
//! let new_task = NewTask {
//!     priority: Some(4),
//!     ..NewTask::new("Write the quarterly report")
//! };
//!
//! // Validate the task before sending it anywhere
//! TaskValidator::validate_new_task(&new_task).unwrap();
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod service;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use api::TodoistApi;
pub use error::{Result, TaskError};
pub use models::{
    Deadline, Due, NewTask, Page, Project, Task, TaskSummary, UpdateTask,
};
pub use service::TaskService;
pub use validation::{TaskValidator, PRIORITY_MAX, PRIORITY_MIN};

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
