use crate::wire::{
    api_task_to_task, reqwest_error_to_task_error, ApiTask, CursorPage, TaskCreateBody,
    TaskUpdateBody,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use todo_core::{
    api::TodoistApi,
    error::{Result, TaskError},
    models::{NewTask, Page, Project, Task, UpdateTask},
};
use tracing::debug;

/// Production base URL of the unified API.
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/api/v1";

/// Page size requested from every list endpoint (the documented maximum).
pub const DEFAULT_PAGE_LIMIT: u32 = 200;

/// Per-request timeout covering connect plus body transfer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for establishing the TCP/TLS connection alone.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Todoist unified API, implementing [`TodoistApi`].
///
/// Construction validates the token and builds the connection pool;
/// no network traffic happens until the first operation. The client is
/// cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct TodoistClient {
    http: Client,
    base_url: String,
    token: String,
}

impl TodoistClient {
    /// Create a client against the production API.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Configuration` when the token is empty or
    /// whitespace. This is checked here, before any request is made, so
    /// a missing credential fails the process at startup rather than on
    /// the first tool call.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL. Trailing slashes on the
    /// base are ignored.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(TaskError::missing_token());
        }

        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TaskError::Internal(format!("Failed to build HTTP client: {e}")))?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into `TaskError::Api`, carrying the
    /// response body as the message when there is one.
    async fn error_for_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            body
        };
        Err(TaskError::api(status.as_u16(), message))
    }

    /// 404 on an id-addressed task endpoint means the task does not exist.
    fn missing_task(err: TaskError, id: &str) -> TaskError {
        match err {
            TaskError::Api { status: 404, .. } => TaskError::task_not_found(id),
            other => other,
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        response.json().await.map_err(reqwest_error_to_task_error)
    }
}

#[async_trait]
impl TodoistApi for TodoistClient {
    async fn add_task(&self, task: NewTask) -> Result<Task> {
        debug!(content = %task.content, "POST /tasks");
        let body = TaskCreateBody::from(task);

        let response = self
            .http
            .post(self.endpoint("/tasks"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(reqwest_error_to_task_error)?;
        let response = Self::error_for_status(response).await?;

        let api_task: ApiTask = Self::decode(response).await?;
        Ok(api_task_to_task(api_task))
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        debug!(task_id = %id, "GET /tasks/{{id}}");
        let response = self
            .http
            .get(self.endpoint(&format!("/tasks/{id}")))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(reqwest_error_to_task_error)?;
        let response = Self::error_for_status(response)
            .await
            .map_err(|e| Self::missing_task(e, id))?;

        let api_task: ApiTask = Self::decode(response).await?;
        Ok(api_task_to_task(api_task))
    }

    async fn get_tasks(
        &self,
        project_id: Option<&str>,
        cursor: Option<&str>,
    ) -> Result<Page<Task>> {
        let mut query: Vec<(&str, String)> = vec![("limit", DEFAULT_PAGE_LIMIT.to_string())];
        if let Some(project_id) = project_id {
            query.push(("project_id", project_id.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        debug!(?project_id, has_cursor = cursor.is_some(), "GET /tasks");
        let response = self
            .http
            .get(self.endpoint("/tasks"))
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await
            .map_err(reqwest_error_to_task_error)?;
        let response = Self::error_for_status(response).await?;

        let page: CursorPage<ApiTask> = Self::decode(response).await?;
        Ok(Page::new(
            page.results.into_iter().map(api_task_to_task).collect(),
            page.next_cursor,
        ))
    }

    async fn update_task(&self, id: &str, updates: UpdateTask) -> Result<Task> {
        debug!(task_id = %id, "POST /tasks/{{id}}");
        let body = TaskUpdateBody::from(updates);

        let response = self
            .http
            .post(self.endpoint(&format!("/tasks/{id}")))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(reqwest_error_to_task_error)?;
        let response = Self::error_for_status(response)
            .await
            .map_err(|e| Self::missing_task(e, id))?;

        let api_task: ApiTask = Self::decode(response).await?;
        Ok(api_task_to_task(api_task))
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        debug!(task_id = %id, "DELETE /tasks/{{id}}");
        let response = self
            .http
            .delete(self.endpoint(&format!("/tasks/{id}")))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(reqwest_error_to_task_error)?;

        // 204 No Content on success
        Self::error_for_status(response)
            .await
            .map_err(|e| Self::missing_task(e, id))?;
        Ok(())
    }

    async fn close_task(&self, id: &str) -> Result<()> {
        debug!(task_id = %id, "POST /tasks/{{id}}/close");
        let response = self
            .http
            .post(self.endpoint(&format!("/tasks/{id}/close")))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(reqwest_error_to_task_error)?;

        // 204 No Content on success
        Self::error_for_status(response)
            .await
            .map_err(|e| Self::missing_task(e, id))?;
        Ok(())
    }

    async fn filter_tasks(&self, query: &str, cursor: Option<&str>) -> Result<Page<Task>> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.to_string()),
            ("limit", DEFAULT_PAGE_LIMIT.to_string()),
        ];
        if let Some(cursor) = cursor {
            params.push(("cursor", cursor.to_string()));
        }

        debug!(query = %query, has_cursor = cursor.is_some(), "GET /tasks/filter");
        let response = self
            .http
            .get(self.endpoint("/tasks/filter"))
            .bearer_auth(&self.token)
            .query(&params)
            .send()
            .await
            .map_err(reqwest_error_to_task_error)?;
        let response = Self::error_for_status(response).await?;

        let page: CursorPage<ApiTask> = Self::decode(response).await?;
        Ok(Page::new(
            page.results.into_iter().map(api_task_to_task).collect(),
            page.next_cursor,
        ))
    }

    async fn get_projects(&self, cursor: Option<&str>) -> Result<Page<Project>> {
        let mut query: Vec<(&str, String)> = vec![("limit", DEFAULT_PAGE_LIMIT.to_string())];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        debug!(has_cursor = cursor.is_some(), "GET /projects");
        let response = self
            .http
            .get(self.endpoint("/projects"))
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await
            .map_err(reqwest_error_to_task_error)?;
        let response = Self::error_for_status(response).await?;

        // The project wire shape is a superset of the domain record;
        // unknown fields are dropped during deserialization.
        let page: CursorPage<Project> = Self::decode(response).await?;
        Ok(Page::new(page.results, page.next_cursor))
    }
}
