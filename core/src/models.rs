use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A task as returned by listing operations.
///
/// This is the full record shape: identity and content plus labels, due
/// and deadline information, lifecycle timestamps, and the canonical web
/// URL. Records are never fabricated locally; every instance traces back
/// to a response from the remote service, converted at the client's
/// normalization boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Opaque identifier assigned by the remote service
    pub id: String,
    /// Task title (non-empty)
    pub content: String,
    /// Free-form description, empty when not set
    pub description: String,
    /// Priority from 1 (normal) to 4 (urgent)
    pub priority: u8,
    /// Owning project identifier (the service defaults this to the Inbox)
    pub project_id: Option<String>,
    /// Whether the task has been completed
    pub is_completed: bool,
    /// Label names attached to the task
    pub labels: Vec<String>,
    /// Structured due information, if any
    pub due: Option<Due>,
    /// Hard deadline, if any
    pub deadline: Option<Deadline>,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// Completion timestamp, set once the task is closed
    pub completed_at: Option<DateTime<Utc>>,
    /// Canonical URL of the task in the web app
    pub url: String,
}

/// The minimum task record produced by create, update and filter
/// operations: exactly {id, content, description, priority, project_id,
/// is_completed}.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskSummary {
    /// Opaque identifier assigned by the remote service
    pub id: String,
    /// Task title
    pub content: String,
    /// Free-form description, empty when not set
    pub description: String,
    /// Priority from 1 (normal) to 4 (urgent)
    pub priority: u8,
    /// Owning project identifier
    pub project_id: Option<String>,
    /// Whether the task has been completed
    pub is_completed: bool,
}

/// Due information attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Due {
    /// Due date in the task's timezone
    pub date: NaiveDate,
    /// Human-readable due string as entered ("every friday", "tomorrow")
    #[serde(default)]
    pub string: String,
    /// Language of the due string
    #[serde(default)]
    pub lang: String,
    /// Whether the due date recurs
    #[serde(default)]
    pub is_recurring: bool,
    /// Exact due datetime when the task is time-of-day scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    /// Timezone for the datetime, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Deadline attached to a task, distinct from the due date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deadline {
    /// Deadline date
    pub date: NaiveDate,
    /// Language the deadline was entered in
    #[serde(default)]
    pub lang: String,
}

/// A project with the fixed field set exposed by this server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Opaque identifier assigned by the remote service
    pub id: String,
    /// Project name
    pub name: String,
    /// Whether the project is shared with other users
    pub is_shared: bool,
    /// Whether the project is marked as a favorite
    pub is_favorite: bool,
}

/// Input for creating a task. Only `content` is required; every other
/// field is passed through to the remote service when present and omitted
/// from the request otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    /// Task title (required, non-empty)
    pub content: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Optional priority (1-4)
    pub priority: Option<u8>,
    /// Optional project; the service defaults to the Inbox when absent
    pub project_id: Option<String>,
    /// Optional label names to attach
    pub labels: Option<Vec<String>>,
}

/// Partial update for an existing task. Omitted fields are left untouched
/// by the remote service; an update with every field `None` still issues
/// the remote call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateTask {
    /// New title
    pub content: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New priority (1-4)
    pub priority: Option<u8>,
    /// New due date
    pub due_date: Option<NaiveDate>,
}

/// One page of a cursor-paginated remote response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Items in this page, in remote order
    pub items: Vec<T>,
    /// Cursor for the next page; `None` terminates the walk
    pub next_cursor: Option<String>,
}

impl Task {
    /// Narrow this record to the minimum summary shape.
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            id: self.id.clone(),
            content: self.content.clone(),
            description: self.description.clone(),
            priority: self.priority,
            project_id: self.project_id.clone(),
            is_completed: self.is_completed,
        }
    }
}

impl NewTask {
    /// Create a task input with the given title and nothing else set.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

impl<T> Page<T> {
    /// Create a page with a continuation cursor.
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// Create a terminal page (no continuation).
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }

    /// Whether this page ends the walk.
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: "8485093748".to_string(),
            content: "Buy milk".to_string(),
            description: "2 litres, whole".to_string(),
            priority: 2,
            project_id: Some("2203306141".to_string()),
            is_completed: false,
            labels: vec!["errand".to_string()],
            due: Some(Due {
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                string: "Mar 14".to_string(),
                lang: "en".to_string(),
                is_recurring: false,
                datetime: None,
                timezone: None,
            }),
            deadline: None,
            created_at: Some(Utc::now()),
            updated_at: None,
            completed_at: None,
            url: "https://app.todoist.com/app/task/8485093748".to_string(),
        }
    }

    #[test]
    fn test_summary_narrows_to_fixed_field_set() {
        let task = sample_task();
        let summary = task.summary();

        assert_eq!(summary.id, task.id);
        assert_eq!(summary.content, task.content);
        assert_eq!(summary.description, task.description);
        assert_eq!(summary.priority, task.priority);
        assert_eq!(summary.project_id, task.project_id);
        assert_eq!(summary.is_completed, task.is_completed);

        let json = serde_json::to_value(&summary).unwrap();
        let mut fields: Vec<&str> =
            json.as_object().unwrap().keys().map(String::as_str).collect();
        fields.sort_unstable();
        assert_eq!(
            fields,
            vec![
                "content",
                "description",
                "id",
                "is_completed",
                "priority",
                "project_id"
            ]
        );
    }

    #[test]
    fn test_new_task_defaults() {
        let new_task = NewTask::new("Water the plants");
        assert_eq!(new_task.content, "Water the plants");
        assert!(new_task.description.is_none());
        assert!(new_task.due_date.is_none());
        assert!(new_task.priority.is_none());
        assert!(new_task.project_id.is_none());
        assert!(new_task.labels.is_none());
    }

    #[test]
    fn test_page_termination() {
        let open: Page<i32> = Page::new(vec![1, 2], Some("abc".to_string()));
        assert!(!open.is_last());

        let done: Page<i32> = Page::last(vec![3]);
        assert!(done.is_last());

        let empty_with_cursor: Page<i32> = Page::new(vec![], Some("def".to_string()));
        assert!(!empty_with_cursor.is_last());
    }

    #[test]
    fn test_due_date_serde() {
        let due = Due {
            date: NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(),
            string: "Dec 24".to_string(),
            lang: "en".to_string(),
            is_recurring: false,
            datetime: None,
            timezone: None,
        };
        let json = serde_json::to_value(&due).unwrap();
        assert_eq!(json["date"], "2025-12-24");
        // Absent datetime/timezone are omitted, not serialized as null
        assert!(json.get("datetime").is_none());
        assert!(json.get("timezone").is_none());
    }
}
