//! Standard test fixtures for consistent testing
//!
//! Provides pre-built test data including:
//! - Standard tasks, active and completed
//! - Projects
//! - Bulk task generators for pagination tests

use crate::builders::{ProjectBuilder, TaskBuilder};
use todo_core::{NewTask, Project, Task, UpdateTask};

/// Create a basic active test task with sensible defaults
pub fn create_test_task() -> Task {
    TaskBuilder::new().build()
}

/// Create task with a specific id
pub fn create_test_task_with_id(id: &str) -> Task {
    TaskBuilder::new().with_id(id).build()
}

/// Create task with a specific priority
pub fn create_test_task_with_priority(priority: u8) -> Task {
    TaskBuilder::new().with_priority(priority).build()
}

/// Create a completed task
pub fn create_completed_task() -> Task {
    TaskBuilder::new()
        .with_id("1000099")
        .with_content("Already done")
        .completed()
        .build()
}

/// Create multiple unique active tasks, priorities cycling 1 through 4
pub fn create_test_tasks(count: usize) -> Vec<Task> {
    (1..=count)
        .map(|i| {
            TaskBuilder::new()
                .with_id(format!("{}", 1_000_000 + i))
                .with_content(format!("Test Task {i}"))
                .with_description(format!("Test task number {i} for bulk testing"))
                .with_priority((i % 4 + 1) as u8)
                .build()
        })
        .collect()
}

/// Create a mixed store: `active` open tasks followed by `completed`
/// closed ones. Useful for verifying completion filtering.
pub fn create_mixed_tasks(active: usize, completed: usize) -> Vec<Task> {
    let mut tasks = create_test_tasks(active);
    tasks.extend((1..=completed).map(|i| {
        TaskBuilder::new()
            .with_id(format!("{}", 1_100_000 + i))
            .with_content(format!("Finished Task {i}"))
            .completed()
            .build()
    }));
    tasks
}

/// Create a standard project
pub fn create_test_project() -> Project {
    ProjectBuilder::new().build()
}

/// Create multiple unique projects
pub fn create_test_projects(count: usize) -> Vec<Project> {
    (1..=count)
        .map(|i| {
            ProjectBuilder::new()
                .with_id(format!("{}", 2_000_000 + i))
                .with_name(format!("Project {i}"))
                .build()
        })
        .collect()
}

/// Create a standard NewTask for testing creation
pub fn create_new_task() -> NewTask {
    NewTask {
        description: Some("A new task for testing creation".to_string()),
        priority: Some(2),
        ..NewTask::new("New Test Task")
    }
}

/// Create NewTask with specific content
pub fn create_new_task_with_content(content: &str) -> NewTask {
    NewTask::new(content)
}

/// Create a standard UpdateTask for testing updates
pub fn create_update_task() -> UpdateTask {
    UpdateTask {
        content: Some("Updated Task Content".to_string()),
        description: Some("Updated task description".to_string()),
        ..UpdateTask::default()
    }
}

/// Create UpdateTask that only renames
pub fn create_update_task_with_content(content: &str) -> UpdateTask {
    UpdateTask {
        content: Some(content.to_string()),
        ..UpdateTask::default()
    }
}
