use crate::{
    error::Result,
    models::{NewTask, Page, Project, Task, UpdateTask},
};
use async_trait::async_trait;

/// Remote task-service interface at page granularity.
///
/// This trait mirrors the endpoints of the remote service one-to-one:
/// each paginated operation fetches a single page and hands back the next
/// cursor. Flattening pages into collections, predicate filtering, and the
/// two-call delete/complete choreography live above this seam in
/// [`TaskService`](crate::service::TaskService). Implementations must be
/// thread-safe; the production implementation speaks HTTP, the test
/// implementation is an in-memory store.
#[async_trait]
pub trait TodoistApi: Send + Sync {
    /// Create a new task
    ///
    /// # Arguments
    /// * `task` - The task input; only provided fields are sent
    ///
    /// # Returns
    /// * `Ok(Task)` - The created task with the service-assigned ID
    /// * `Err(TaskError::Api)` - If the service rejects the request
    /// * `Err(TaskError::Network)` - If the call never reaches the service
    async fn add_task(&self, task: NewTask) -> Result<Task>;

    /// Fetch a single task by ID
    ///
    /// # Arguments
    /// * `id` - The opaque task identifier
    ///
    /// # Returns
    /// * `Ok(Task)` - The task
    /// * `Err(TaskError::NotFound)` - If no task exists with that ID
    /// * `Err(TaskError::Api)` - On any other service failure
    async fn get_task(&self, id: &str) -> Result<Task>;

    /// Fetch one page of active tasks
    ///
    /// # Arguments
    /// * `project_id` - Restrict to one project when given
    /// * `cursor` - Continuation cursor from the previous page, if any
    ///
    /// # Returns
    /// * `Ok(Page<Task>)` - Items in remote order plus the next cursor
    /// * `Err(TaskError::Api)` - If the service rejects the request
    async fn get_tasks(&self, project_id: Option<&str>, cursor: Option<&str>)
        -> Result<Page<Task>>;

    /// Apply a partial update to a task
    ///
    /// # Arguments
    /// * `id` - The task to update
    /// * `updates` - Fields to change; `None` fields are not sent
    ///
    /// # Returns
    /// * `Ok(Task)` - The task after the update
    /// * `Err(TaskError::NotFound)` - If the task doesn't exist
    async fn update_task(&self, id: &str, updates: UpdateTask) -> Result<Task>;

    /// Delete a task permanently
    ///
    /// # Returns
    /// * `Ok(())` - The task is gone
    /// * `Err(TaskError::NotFound)` - If the task doesn't exist
    async fn delete_task(&self, id: &str) -> Result<()>;

    /// Mark a task as completed
    ///
    /// # Returns
    /// * `Ok(())` - The task is closed
    /// * `Err(TaskError::NotFound)` - If the task doesn't exist
    async fn close_task(&self, id: &str) -> Result<()>;

    /// Fetch one page of tasks matching a filter query
    ///
    /// The query string is in the remote service's own filter language and
    /// is forwarded verbatim; a malformed query surfaces as
    /// `TaskError::Api`, never as an empty page.
    ///
    /// # Arguments
    /// * `query` - Filter expression, opaque to this system
    /// * `cursor` - Continuation cursor from the previous page, if any
    async fn filter_tasks(&self, query: &str, cursor: Option<&str>) -> Result<Page<Task>>;

    /// Fetch one page of projects
    ///
    /// # Arguments
    /// * `cursor` - Continuation cursor from the previous page, if any
    async fn get_projects(&self, cursor: Option<&str>) -> Result<Page<Project>>;
}
