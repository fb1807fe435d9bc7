//! Mock implementation of the TodoistApi trait
//!
//! Provides a thread-safe mock remote service with:
//! - Error injection capabilities
//! - Call tracking for verification
//! - Cursor pagination with a configurable page size
//! - Scripted filter-query results

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc,
};
use todo_core::{NewTask, Page, Project, Result, Task, TaskError, TodoistApi, UpdateTask};

/// Page size used until a test overrides it. Mirrors the remote maximum
/// so single-page behavior is the default.
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// Mock implementation of TodoistApi for testing
///
/// Features:
/// - Thread-safe concurrent access
/// - Error injection for failure testing
/// - Call history tracking for verification
/// - Cursor pagination over the seeded store (cursors are offsets)
///
/// The task store is returned as-is by `get_tasks`: completed tasks are
/// NOT filtered out here, because the real endpoint does not filter them
/// either. Seeding completed tasks is how tests verify that callers
/// apply their own completion predicate.
///
/// Clones share the underlying store, so a test can keep a handle for
/// seeding and assertions while the clone lives inside a server.
#[derive(Debug, Clone)]
pub struct MockTodoistApi {
    tasks: Arc<Mutex<Vec<Task>>>,
    projects: Arc<Mutex<Vec<Project>>>,
    filter_results: Arc<Mutex<HashMap<String, Vec<Task>>>>,
    page_size: Arc<AtomicUsize>,
    next_id: Arc<AtomicU64>,
    error_injection: Arc<Mutex<Option<TaskError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTodoistApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTodoistApi {
    /// Create a new empty mock API
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(Vec::new())),
            projects: Arc::new(Mutex::new(Vec::new())),
            filter_results: Arc::new(Mutex::new(HashMap::new())),
            page_size: Arc::new(AtomicUsize::new(DEFAULT_PAGE_SIZE)),
            next_id: Arc::new(AtomicU64::new(9_000_001)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock API with pre-populated tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mock = Self::new();
        *mock.tasks.lock() = tasks;
        mock
    }

    /// Create a mock API with pre-populated projects
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let mock = Self::new();
        *mock.projects.lock() = projects;
        mock
    }

    /// Seed additional tasks after construction
    pub fn seed_tasks(&self, tasks: Vec<Task>) {
        self.tasks.lock().extend(tasks);
    }

    /// Seed projects after construction
    pub fn seed_projects(&self, projects: Vec<Project>) {
        self.projects.lock().extend(projects);
    }

    /// Script the result set for a filter query
    pub fn set_filter_result(&self, query: &str, tasks: Vec<Task>) {
        self.filter_results.lock().insert(query.to_string(), tasks);
    }

    /// Override the page size so pagination kicks in with small stores
    pub fn set_page_size(&self, size: usize) {
        assert!(size > 0, "page size must be positive");
        self.page_size.store(size, Ordering::SeqCst);
    }

    /// Inject error for next operation
    pub fn inject_error(&self, error: TaskError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Get history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Clear call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Assert method was called
    pub fn assert_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call.contains(method)),
            "Method '{}' was not called. Call history: {:?}",
            method,
            *history
        );
    }

    /// Number of calls whose recorded name contains `method`
    pub fn call_count(&self, method: &str) -> usize {
        self.call_history
            .lock()
            .iter()
            .filter(|call| call.contains(method))
            .count()
    }

    /// Current number of stored tasks
    pub fn task_count(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Look up a stored task by id
    pub fn stored_task(&self, id: &str) -> Option<Task> {
        self.tasks.lock().iter().find(|t| t.id == id).cloned()
    }

    /// Check if an error should be injected, consuming it if so
    fn check_error_injection(&self) -> Result<()> {
        let mut error_opt = self.error_injection.lock();
        if let Some(error) = error_opt.take() {
            return Err(error);
        }
        Ok(())
    }

    /// Record method call with parameters in history
    fn record_call_with_params(&self, method: &str, params: &str) {
        self.call_history.lock().push(format!("{method}({params})"));
    }

    fn next_task_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }

    /// Slice one page out of a result set. Cursors are stringified
    /// offsets into the set, which is stable because the store is
    /// insertion-ordered.
    fn paginate(&self, items: Vec<Task>, cursor: Option<&str>) -> Result<Page<Task>> {
        let offset = parse_cursor(cursor)?;
        let size = self.page_size.load(Ordering::SeqCst);

        let page: Vec<Task> = items.iter().skip(offset).take(size).cloned().collect();
        let next = if offset + size < items.len() {
            Some((offset + size).to_string())
        } else {
            None
        };
        Ok(Page::new(page, next))
    }
}

fn parse_cursor(cursor: Option<&str>) -> Result<usize> {
    match cursor {
        None => Ok(0),
        Some(raw) => raw
            .parse()
            .map_err(|_| TaskError::api(400, format!("Invalid cursor: {raw}"))),
    }
}

#[async_trait]
impl TodoistApi for MockTodoistApi {
    async fn add_task(&self, task: NewTask) -> Result<Task> {
        self.record_call_with_params("add_task", &format!("content={}", task.content));
        self.check_error_injection()?;

        let id = self.next_task_id();
        let created = Task {
            url: format!("https://app.todoist.com/app/task/{id}"),
            id,
            content: task.content,
            description: task.description.unwrap_or_default(),
            priority: task.priority.unwrap_or(1),
            // The remote service files tasks without a project into the Inbox
            project_id: task.project_id.or_else(|| Some("inbox".to_string())),
            is_completed: false,
            labels: task.labels.unwrap_or_default(),
            due: None,
            deadline: None,
            created_at: Some(Utc::now()),
            updated_at: None,
            completed_at: None,
        };

        self.tasks.lock().push(created.clone());
        Ok(created)
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        self.record_call_with_params("get_task", &format!("id={id}"));
        self.check_error_injection()?;

        self.tasks
            .lock()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TaskError::task_not_found(id))
    }

    async fn get_tasks(
        &self,
        project_id: Option<&str>,
        cursor: Option<&str>,
    ) -> Result<Page<Task>> {
        self.record_call_with_params(
            "get_tasks",
            &format!("project_id={project_id:?}, cursor={cursor:?}"),
        );
        self.check_error_injection()?;

        let tasks: Vec<Task> = self
            .tasks
            .lock()
            .iter()
            .filter(|t| match project_id {
                Some(p) => t.project_id.as_deref() == Some(p),
                None => true,
            })
            .cloned()
            .collect();

        self.paginate(tasks, cursor)
    }

    async fn update_task(&self, id: &str, updates: UpdateTask) -> Result<Task> {
        self.record_call_with_params("update_task", &format!("id={id}"));
        self.check_error_injection()?;

        let mut tasks = self.tasks.lock();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::task_not_found(id))?;

        if let Some(content) = updates.content {
            task.content = content;
        }
        if let Some(description) = updates.description {
            task.description = description;
        }
        if let Some(priority) = updates.priority {
            task.priority = priority;
        }
        if let Some(due_date) = updates.due_date {
            task.due = Some(todo_core::Due {
                date: due_date,
                string: due_date.to_string(),
                lang: "en".to_string(),
                is_recurring: false,
                datetime: None,
                timezone: None,
            });
        }
        task.updated_at = Some(Utc::now());

        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        self.record_call_with_params("delete_task", &format!("id={id}"));
        self.check_error_injection()?;

        let mut tasks = self.tasks.lock();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(TaskError::task_not_found(id));
        }
        Ok(())
    }

    async fn close_task(&self, id: &str) -> Result<()> {
        self.record_call_with_params("close_task", &format!("id={id}"));
        self.check_error_injection()?;

        let mut tasks = self.tasks.lock();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::task_not_found(id))?;

        task.is_completed = true;
        task.completed_at = Some(Utc::now());
        Ok(())
    }

    async fn filter_tasks(&self, query: &str, cursor: Option<&str>) -> Result<Page<Task>> {
        self.record_call_with_params(
            "filter_tasks",
            &format!("query={query}, cursor={cursor:?}"),
        );
        self.check_error_injection()?;

        // Unscripted queries match nothing, like a valid query with no hits
        let results = self
            .filter_results
            .lock()
            .get(query)
            .cloned()
            .unwrap_or_default();

        self.paginate(results, cursor)
    }

    async fn get_projects(&self, cursor: Option<&str>) -> Result<Page<Project>> {
        self.record_call_with_params("get_projects", &format!("cursor={cursor:?}"));
        self.check_error_injection()?;

        let projects = self.projects.lock().clone();
        let offset = parse_cursor(cursor)?;
        let size = self.page_size.load(Ordering::SeqCst);

        let page: Vec<Project> = projects.iter().skip(offset).take(size).cloned().collect();
        let next = if offset + size < projects.len() {
            Some((offset + size).to_string())
        } else {
            None
        };
        Ok(Page::new(page, next))
    }
}
