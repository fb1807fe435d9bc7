use crate::{
    api::TodoistApi,
    error::Result,
    models::{NewTask, Project, Task, TaskSummary, UpdateTask},
    validation::TaskValidator,
};
use std::sync::Arc;
use tracing::debug;

/// Task operations over an injected remote-service handle.
///
/// This layer owns everything between the protocol surface and the remote
/// endpoints: input validation, the cursor walks that flatten paginated
/// responses, the local completion/priority predicates, and the two-call
/// delete/complete choreography. It returns structured records only;
/// turning records into display strings is the protocol layer's job.
///
/// The handle is created once at process start and shared; there is no
/// lazy initialization and no credential refresh.
#[derive(Debug, Clone)]
pub struct TaskService<A> {
    api: Arc<A>,
}

impl<A: TodoistApi> TaskService<A> {
    /// Create a service around a shared remote-service handle.
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Create a task. `content` must be non-empty; all other fields pass
    /// through to the remote service, which assigns the identifier and
    /// defaults the project to the Inbox.
    pub async fn create_task(&self, input: NewTask) -> Result<TaskSummary> {
        TaskValidator::validate_new_task(&input)?;

        debug!(content = %input.content, "creating task");
        let task = self.api.add_task(input).await?;
        Ok(task.summary())
    }

    /// List active tasks, walking every page.
    ///
    /// Completed tasks are excluded unconditionally; when `priority` is
    /// given, only tasks with exactly that priority are kept. `None`
    /// applies no priority filter. Order follows the remote page order.
    pub async fn list_tasks(
        &self,
        project_id: Option<&str>,
        priority: Option<u8>,
    ) -> Result<Vec<Task>> {
        TaskValidator::validate_optional_priority(priority)?;

        let mut tasks = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.api.get_tasks(project_id, cursor.as_deref()).await?;
            pages += 1;

            for task in page.items {
                if task.is_completed {
                    continue;
                }
                if let Some(p) = priority {
                    if task.priority != p {
                        continue;
                    }
                }
                tasks.push(task);
            }

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(pages, count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Apply a partial update. Only provided fields are sent; an update
    /// with no fields still issues the remote call with just the id.
    pub async fn update_task(&self, task_id: &str, updates: UpdateTask) -> Result<TaskSummary> {
        TaskValidator::validate_update(&updates)?;

        debug!(task_id = %task_id, "updating task");
        let task = self.api.update_task(task_id, updates).await?;
        Ok(task.summary())
    }

    /// Delete a task and return its content for the confirmation message.
    ///
    /// Two remote calls: a read to capture the content, then the delete.
    /// Another writer can rename or remove the task between the two, in
    /// which case the returned content reflects the earlier read or the
    /// delete fails with NotFound.
    pub async fn delete_task(&self, task_id: &str) -> Result<String> {
        let task = self.api.get_task(task_id).await?;
        let content = task.content;

        self.api.delete_task(task_id).await?;
        debug!(task_id = %task_id, "deleted task");
        Ok(content)
    }

    /// Complete a task and return its content for the confirmation
    /// message. Same two-call pattern and caveat as [`delete_task`].
    ///
    /// [`delete_task`]: TaskService::delete_task
    pub async fn complete_task(&self, task_id: &str) -> Result<String> {
        let task = self.api.get_task(task_id).await?;
        let content = task.content;

        self.api.close_task(task_id).await?;
        debug!(task_id = %task_id, "completed task");
        Ok(content)
    }

    /// Execute a filter query and return the first matching task, or
    /// `None` when every page comes back empty.
    ///
    /// The query is forwarded verbatim. Pages are walked lazily: the walk
    /// stops at the first non-empty page, so later pages are never
    /// fetched. A malformed query surfaces as an API error, never `None`.
    pub async fn find_first(&self, query: &str) -> Result<Option<TaskSummary>> {
        let mut cursor: Option<String> = None;

        loop {
            let page = self.api.filter_tasks(query, cursor.as_deref()).await?;

            if let Some(task) = page.items.into_iter().next() {
                debug!(query = %query, task_id = %task.id, "filter matched");
                return Ok(Some(task.summary()));
            }

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => {
                    debug!(query = %query, "filter matched nothing");
                    return Ok(None);
                }
            }
        }
    }

    /// List every project, walking all pages. An account with no projects
    /// yields an empty vector.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.api.get_projects(cursor.as_deref()).await?;
            projects.extend(page.items);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(count = projects.len(), "listed projects");
        Ok(projects)
    }
}
