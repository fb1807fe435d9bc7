//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for:
//! - Task construction with sensible defaults
//! - NewTask and UpdateTask variants
//! - Project construction

use chrono::{DateTime, NaiveDate, Utc};
use todo_core::{Deadline, Due, NewTask, Project, Task, UpdateTask};

/// Builder for constructing Task instances in tests
pub struct TaskBuilder {
    task: Task,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            task: Task {
                id: "1000001".to_string(),
                content: "Test Task".to_string(),
                description: "A test task".to_string(),
                priority: 1,
                project_id: Some("inbox".to_string()),
                is_completed: false,
                labels: Vec::new(),
                due: None,
                deadline: None,
                created_at: Some(Utc::now()),
                updated_at: None,
                completed_at: None,
                url: "https://app.todoist.com/app/task/1000001".to_string(),
            },
        }
    }

    /// Set task ID (also rewrites the derived URL)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.task.url = format!("https://app.todoist.com/app/task/{id}");
        self.task.id = id;
        self
    }

    /// Set task content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.task.content = content.into();
        self
    }

    /// Set task description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.task.description = description.into();
        self
    }

    /// Set task priority
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.task.priority = priority;
        self
    }

    /// Set owning project
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.task.project_id = Some(project_id.into());
        self
    }

    /// Mark the task completed, stamping completed_at
    pub fn completed(mut self) -> Self {
        self.task.is_completed = true;
        if self.task.completed_at.is_none() {
            self.task.completed_at = Some(Utc::now());
        }
        self
    }

    /// Set label names
    pub fn with_labels(mut self, labels: Vec<&str>) -> Self {
        self.task.labels = labels.into_iter().map(String::from).collect();
        self
    }

    /// Set a plain due date
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.task.due = Some(Due {
            date,
            string: date.to_string(),
            lang: "en".to_string(),
            is_recurring: false,
            datetime: None,
            timezone: None,
        });
        self
    }

    /// Set a deadline date
    pub fn with_deadline(mut self, date: NaiveDate) -> Self {
        self.task.deadline = Some(Deadline {
            date,
            lang: "en".to_string(),
        });
        self
    }

    /// Set creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.task.created_at = Some(created_at);
        self
    }

    /// Build the final Task
    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for constructing NewTask instances in tests
pub struct NewTaskBuilder {
    new_task: NewTask,
}

impl Default for NewTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTaskBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            new_task: NewTask::new("New Test Task"),
        }
    }

    /// Set content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.new_task.content = content.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.new_task.description = Some(description.into());
        self
    }

    /// Set due date
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.new_task.due_date = Some(date);
        self
    }

    /// Set priority
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.new_task.priority = Some(priority);
        self
    }

    /// Set target project
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.new_task.project_id = Some(project_id.into());
        self
    }

    /// Set labels
    pub fn with_labels(mut self, labels: Vec<&str>) -> Self {
        self.new_task.labels = Some(labels.into_iter().map(String::from).collect());
        self
    }

    /// Build the final NewTask
    pub fn build(self) -> NewTask {
        self.new_task
    }
}

/// Builder for constructing UpdateTask instances in tests
pub struct UpdateTaskBuilder {
    update_task: UpdateTask,
}

impl Default for UpdateTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateTaskBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            update_task: UpdateTask::default(),
        }
    }

    /// Set content update
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.update_task.content = Some(content.into());
        self
    }

    /// Set description update
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.update_task.description = Some(description.into());
        self
    }

    /// Set priority update
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.update_task.priority = Some(priority);
        self
    }

    /// Set due date update
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.update_task.due_date = Some(date);
        self
    }

    /// Build the final UpdateTask
    pub fn build(self) -> UpdateTask {
        self.update_task
    }
}

/// Builder for constructing Project instances in tests
pub struct ProjectBuilder {
    project: Project,
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            project: Project {
                id: "2000001".to_string(),
                name: "Test Project".to_string(),
                is_shared: false,
                is_favorite: false,
            },
        }
    }

    /// Set project ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.project.id = id.into();
        self
    }

    /// Set project name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.project.name = name.into();
        self
    }

    /// Mark the project shared
    pub fn shared(mut self) -> Self {
        self.project.is_shared = true;
        self
    }

    /// Mark the project as a favorite
    pub fn favorite(mut self) -> Self {
        self.project.is_favorite = true;
        self
    }

    /// Build the final Project
    pub fn build(self) -> Project {
        self.project
    }
}
