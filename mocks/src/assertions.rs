//! Custom assertion helpers for testing
//!
//! Provides specialized assertions for:
//! - Task equality with clear error messages
//! - Summary narrowing checks
//! - Collection-based assertions

use todo_core::{Task, TaskSummary};

/// Assert tasks are equal ignoring timestamps
pub fn assert_task_equals(actual: &Task, expected: &Task) {
    assert_eq!(actual.id, expected.id, "Task IDs don't match");
    assert_eq!(actual.content, expected.content, "Task contents don't match");
    assert_eq!(
        actual.description, expected.description,
        "Task descriptions don't match"
    );
    assert_eq!(
        actual.priority, expected.priority,
        "Task priorities don't match"
    );
    assert_eq!(
        actual.project_id, expected.project_id,
        "Task projects don't match"
    );
    assert_eq!(
        actual.is_completed, expected.is_completed,
        "Task completion flags don't match"
    );
    // Note: timestamps are ignored in this assertion
}

/// Assert tasks are equal including exact timestamps
pub fn assert_task_equals_exact(actual: &Task, expected: &Task) {
    assert_eq!(actual, expected, "Tasks are not exactly equal");
}

/// Assert a summary is the faithful narrowing of a full task
pub fn assert_summary_of(summary: &TaskSummary, task: &Task) {
    assert_eq!(summary.id, task.id, "Summary id doesn't match the task");
    assert_eq!(
        summary.content, task.content,
        "Summary content doesn't match the task"
    );
    assert_eq!(
        summary.description, task.description,
        "Summary description doesn't match the task"
    );
    assert_eq!(
        summary.priority, task.priority,
        "Summary priority doesn't match the task"
    );
    assert_eq!(
        summary.project_id, task.project_id,
        "Summary project doesn't match the task"
    );
    assert_eq!(
        summary.is_completed, task.is_completed,
        "Summary completion flag doesn't match the task"
    );
}

/// Assert task list contains a task with a specific id
pub fn assert_contains_task_with_id(tasks: &[Task], id: &str) {
    assert!(
        tasks.iter().any(|t| t.id == id),
        "Expected to find task with id '{}' in task list, but it wasn't found. Available ids: {:?}",
        id,
        tasks.iter().map(|t| &t.id).collect::<Vec<_>>()
    );
}

/// Assert no task in the list is completed
pub fn assert_no_completed_tasks(tasks: &[Task]) {
    let completed: Vec<&str> = tasks
        .iter()
        .filter(|t| t.is_completed)
        .map(|t| t.id.as_str())
        .collect();
    assert!(
        completed.is_empty(),
        "Expected no completed tasks in list, but found: {completed:?}"
    );
}

/// Assert every task in the list carries exactly this priority
pub fn assert_all_priority(tasks: &[Task], priority: u8) {
    for task in tasks {
        assert_eq!(
            task.priority, priority,
            "Task '{}' has priority {} but {} was required",
            task.id, task.priority, priority
        );
    }
}

/// Assert every task URL is derived from its id
pub fn assert_urls_derived(tasks: &[Task]) {
    for task in tasks {
        let expected = format!("https://app.todoist.com/app/task/{}", task.id);
        assert_eq!(
            task.url, expected,
            "Task '{}' URL is not derived from its id",
            task.id
        );
    }
}

/// Assert task matches partial criteria
pub fn assert_task_matches(task: &Task, matcher: &TaskMatcher) {
    if let Some(ref expected_id) = matcher.id {
        assert_eq!(task.id, *expected_id, "Task ID doesn't match expected");
    }
    if let Some(ref expected_content) = matcher.content {
        assert_eq!(
            task.content, *expected_content,
            "Task content doesn't match expected"
        );
    }
    if let Some(expected_priority) = matcher.priority {
        assert_eq!(
            task.priority, expected_priority,
            "Task priority doesn't match expected"
        );
    }
    if let Some(ref expected_project) = matcher.project_id {
        assert_eq!(
            task.project_id.as_deref(),
            Some(expected_project.as_str()),
            "Task project doesn't match expected"
        );
    }
    if let Some(expected_completed) = matcher.is_completed {
        assert_eq!(
            task.is_completed, expected_completed,
            "Task completion flag doesn't match expected"
        );
    }
}

/// Flexible task matcher for partial assertions
#[derive(Debug, Default)]
pub struct TaskMatcher {
    pub id: Option<String>,
    pub content: Option<String>,
    pub priority: Option<u8>,
    pub project_id: Option<String>,
    pub is_completed: Option<bool>,
}

impl TaskMatcher {
    /// Create a new empty matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Match tasks with specific ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Match tasks with specific content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Match tasks with specific priority
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Match tasks in a specific project
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Match tasks by completion flag
    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }
}
