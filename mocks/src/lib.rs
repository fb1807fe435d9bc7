//! Mock implementations and test utilities for the Todoist MCP server
//!
//! This crate provides comprehensive testing infrastructure including:
//! - A mock implementation of the remote service trait
//! - Realistic test data generators
//! - Custom assertion helpers
//! - Property-based testing strategies
//! - Contract test helpers

pub mod api;
pub mod assertions;
pub mod builders;
pub mod contracts;
pub mod fixtures;
pub mod generators;

pub use api::MockTodoistApi;
pub use assertions::*;
pub use builders::*;
pub use contracts::*;
pub use fixtures::*;
pub use generators::*;
