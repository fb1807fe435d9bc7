use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use todo_core::{
    error::TaskError,
    models::{Deadline, Due, NewTask, Task, UpdateTask},
};

/// Task shape as the unified API returns it. The wire spells completion
/// `checked` and the creation stamp `added_at`, and carries no URL; the
/// domain [`Task`] uses `is_completed`/`created_at` and derives the URL
/// from the id.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTask {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    pub priority: u8,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(rename = "checked", default)]
    pub is_completed: bool,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub deadline: Option<Deadline>,
    #[serde(rename = "added_at", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Pagination envelope used by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CursorPage<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Body for task creation. Optional fields are omitted entirely rather
/// than sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreateBody {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Body for task updates. Only fields the caller provided go on the
/// wire; the endpoint leaves absent fields unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct TaskUpdateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl From<NewTask> for TaskCreateBody {
    fn from(task: NewTask) -> Self {
        Self {
            content: task.content,
            description: task.description,
            due_date: task.due_date,
            priority: task.priority,
            project_id: task.project_id,
            labels: task.labels,
        }
    }
}

impl From<UpdateTask> for TaskUpdateBody {
    fn from(updates: UpdateTask) -> Self {
        Self {
            content: updates.content,
            description: updates.description,
            priority: updates.priority,
            due_date: updates.due_date,
        }
    }
}

/// Web-app URL for a task, derived from its id.
pub fn task_url(id: &str) -> String {
    format!("https://app.todoist.com/app/task/{id}")
}

/// Convert a wire task to the domain model.
pub fn api_task_to_task(api: ApiTask) -> Task {
    let url = task_url(&api.id);
    Task {
        id: api.id,
        content: api.content,
        description: api.description,
        priority: api.priority,
        project_id: api.project_id,
        is_completed: api.is_completed,
        labels: api.labels,
        due: api.due,
        deadline: api.deadline,
        created_at: api.created_at,
        updated_at: api.updated_at,
        completed_at: api.completed_at,
        url,
    }
}

/// Convert a transport-level reqwest error to TaskError
pub fn reqwest_error_to_task_error(err: reqwest::Error) -> TaskError {
    if err.is_timeout() {
        TaskError::Network(format!("Request timed out: {err}"))
    } else if err.is_connect() {
        TaskError::Network(format!("Connection failed: {err}"))
    } else if err.is_decode() {
        TaskError::Serialization(format!("Invalid response body: {err}"))
    } else {
        TaskError::Network(format!("HTTP request failed: {err}"))
    }
}
