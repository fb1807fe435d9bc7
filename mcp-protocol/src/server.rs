//! MCP server exposing the Todoist task service over stdio.
//!
//! Seven task tools are routed through the SDK's tool router; resources
//! and prompts are answered by the catalog and library in the sibling
//! modules. The server is generic over the API client so tests can run
//! it against an in-memory fake.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::tool::Parameters;
use rmcp::model::{
    CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
    ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult, PaginatedRequestParam,
    ProtocolVersion, ReadResourceRequestParam, ReadResourceResult, ResourceContents,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;

use todo_core::{NewTask, TaskService, TodoistApi, UpdateTask};

use crate::error::into_mcp_error;
use crate::prompts::PromptLibrary;
use crate::resources::ResourceCatalog;
use crate::serialization;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTaskRequest {
    /// Task title (required)
    pub content: String,
    /// Optional task description
    pub description: Option<String>,
    /// Due date in YYYY-MM-DD format
    pub due_date: Option<NaiveDate>,
    /// Priority level 1-4 (1=normal, 4=urgent)
    pub priority: Option<u8>,
    /// Project ID to add task to (default: Inbox)
    pub project_id: Option<String>,
    /// List of label names to attach
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTasksRequest {
    /// Filter by specific project ID
    pub project_id: Option<String>,
    /// Filter by priority level (1-4)
    pub priority: Option<u8>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskRequest {
    /// ID of the task to update
    pub task_id: String,
    /// New task title
    pub content: Option<String>,
    /// New task description
    pub description: Option<String>,
    /// New priority level 1-4 (1=normal, 4=urgent)
    pub priority: Option<u8>,
    /// New due date in YYYY-MM-DD format
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteTaskRequest {
    /// ID of the task to delete
    pub task_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CompleteTaskRequest {
    /// ID of the task to complete
    pub task_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FilterTasksRequest {
    /// Filter query in Todoist syntax, e.g. "today | overdue"
    pub query: String,
}

/// The MCP-facing server, generic over the Todoist API client.
#[derive(Clone, Debug)]
pub struct McpServer<A: TodoistApi + 'static> {
    service: TaskService<A>,
    resources: Arc<ResourceCatalog>,
    prompts: Arc<PromptLibrary>,
    tool_router: ToolRouter<Self>,
}

impl<A: TodoistApi + 'static> McpServer<A> {
    /// Build a server around a task service, with resources and prompt
    /// templates rooted at `assets_dir`.
    pub fn new(service: TaskService<A>, assets_dir: impl Into<PathBuf>) -> Self {
        let assets_dir = assets_dir.into();
        Self {
            service,
            resources: Arc::new(ResourceCatalog::new(assets_dir.clone())),
            prompts: Arc::new(PromptLibrary::new(assets_dir)),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl<A: TodoistApi + 'static> McpServer<A> {
    #[tool(description = "Create a new task in Todoist.")]
    pub async fn create_task(
        &self,
        Parameters(req): Parameters<CreateTaskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let input = NewTask {
            content: req.content,
            description: req.description,
            due_date: req.due_date,
            priority: req.priority,
            project_id: req.project_id,
            labels: req.labels,
        };
        let summary = self
            .service
            .create_task(input)
            .await
            .map_err(into_mcp_error)?;
        let text = serialization::task_created(&summary)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get tasks from Todoist (incomplete tasks only).")]
    pub async fn get_tasks(
        &self,
        Parameters(req): Parameters<GetTasksRequest>,
    ) -> Result<CallToolResult, McpError> {
        let tasks = self
            .service
            .list_tasks(req.project_id.as_deref(), req.priority)
            .await
            .map_err(into_mcp_error)?;
        let text = serialization::task_list(&tasks)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Update an existing task")]
    pub async fn update_task(
        &self,
        Parameters(req): Parameters<UpdateTaskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let updates = UpdateTask {
            content: req.content,
            description: req.description,
            priority: req.priority,
            due_date: req.due_date,
        };
        let summary = self
            .service
            .update_task(&req.task_id, updates)
            .await
            .map_err(into_mcp_error)?;
        let text = serialization::task_updated(&summary)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Delete a task")]
    pub async fn delete_task(
        &self,
        Parameters(req): Parameters<DeleteTaskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let content = self
            .service
            .delete_task(&req.task_id)
            .await
            .map_err(into_mcp_error)?;
        let text = serialization::task_deleted(&content);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Mark task as completed")]
    pub async fn complete_task(
        &self,
        Parameters(req): Parameters<CompleteTaskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let content = self
            .service
            .complete_task(&req.task_id)
            .await
            .map_err(into_mcp_error)?;
        let text = serialization::task_completed(&content);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Find task by writing a todoist query")]
    pub async fn filter_tasks(
        &self,
        Parameters(req): Parameters<FilterTasksRequest>,
    ) -> Result<CallToolResult, McpError> {
        let found = self
            .service
            .find_first(&req.query)
            .await
            .map_err(into_mcp_error)?;
        let text = serialization::filter_outcome(found.as_ref())?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get all projects from Todoist account.")]
    pub async fn get_projects(&self) -> Result<CallToolResult, McpError> {
        let projects = self.service.list_projects().await.map_err(into_mcp_error)?;
        let text = serialization::project_list(&projects)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl<A: TodoistApi + 'static> ServerHandler for McpServer<A> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "This server connects AI assistants to Todoist for task management. \
                 Use create_task, get_tasks, update_task, delete_task, complete_task, \
                 filter_tasks and get_projects to work with tasks; priority runs from \
                 1 (normal) to 4 (urgent) and due dates use YYYY-MM-DD. Resources \
                 expose productivity statistics, a knowledgebase and a filter query \
                 cheatsheet; prompts generate project planning and time optimization \
                 workflows."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self.resources.list(),
            next_cursor: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resources.templates(),
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let text = self.resources.read(&uri).await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: self.prompts.list(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        GetPromptRequestParam { name, arguments }: GetPromptRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.prompts.get(&name, arguments.as_ref()).await
    }
}
