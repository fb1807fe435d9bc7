//! Rendering of service results into tool reply text.
//!
//! Tools answer with a short labelled sentence wrapping a pretty-printed
//! JSON record, so an assistant reading the reply can both quote it and
//! parse the fields back out. The label wording is part of the tool
//! contract and is asserted in tests.

use rmcp::ErrorData;
use serde::Serialize;
use todo_core::{Project, Task, TaskSummary};

/// Pretty-print a serializable value for embedding in reply text.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, ErrorData> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(format!("Failed to serialize response: {e}"), None))
}

/// Reply for a freshly created task.
pub fn task_created(summary: &TaskSummary) -> Result<String, ErrorData> {
    Ok(format!("Task created: {}", to_pretty_json(summary)?))
}

/// Reply carrying a list of open tasks.
pub fn task_list(tasks: &[Task]) -> Result<String, ErrorData> {
    Ok(format!("Tasks: {}", to_pretty_json(&tasks)?))
}

/// Reply for an updated task.
pub fn task_updated(summary: &TaskSummary) -> Result<String, ErrorData> {
    Ok(format!("Task updated: {}", to_pretty_json(summary)?))
}

/// Reply for a deleted task, echoing its content line.
pub fn task_deleted(content: &str) -> String {
    format!("Deleted: {content}")
}

/// Reply for a completed task, echoing its content line.
pub fn task_completed(content: &str) -> String {
    format!("Completed: {content}")
}

/// Reply for a filter query: the first match, or a fixed miss marker.
pub fn filter_outcome(found: Option<&TaskSummary>) -> Result<String, ErrorData> {
    match found {
        Some(summary) => Ok(format!("Found task(s): {}", to_pretty_json(summary)?)),
        None => Ok("Task not found".to_string()),
    }
}

/// Reply carrying the account's project list.
pub fn project_list(projects: &[Project]) -> Result<String, ErrorData> {
    Ok(format!("Projects: {}", to_pretty_json(&projects)?))
}
