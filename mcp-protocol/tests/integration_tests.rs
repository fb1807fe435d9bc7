//! Tool-level tests for the MCP server.
//!
//! Tools are called directly with typed parameters, backed by the shared
//! in-memory mock so each test can seed state and inspect the store and
//! call history afterwards.

use std::sync::Arc;

use chrono::NaiveDate;
use mcp_protocol::{
    CompleteTaskRequest, CreateTaskRequest, DeleteTaskRequest, FilterTasksRequest,
    GetTasksRequest, McpServer, UpdateTaskRequest,
};
use mocks::{MockTodoistApi, ProjectBuilder, TaskBuilder};
use rmcp::handler::server::tool::Parameters;
use rmcp::model::{CallToolResult, ErrorCode, RawContent};
use todo_core::{Task, TaskError, TaskService};

fn server_backed_by(api: &MockTodoistApi) -> McpServer<MockTodoistApi> {
    McpServer::new(TaskService::new(Arc::new(api.clone())), "assets")
}

fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        other => panic!("expected text content, got {other:?}"),
    }
}

fn tasks_in(reply: &str) -> Vec<Task> {
    let json = reply
        .strip_prefix("Tasks: ")
        .expect("reply should start with the Tasks label");
    serde_json::from_str(json).expect("embedded task list should be valid JSON")
}

#[tokio::test]
async fn test_create_task_reports_created_record() {
    let api = MockTodoistApi::new();
    let server = server_backed_by(&api);

    let result = server
        .create_task(Parameters(CreateTaskRequest {
            content: "Buy milk".to_string(),
            description: Some("Semi-skimmed".to_string()),
            due_date: Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()),
            priority: Some(4),
            project_id: None,
            labels: Some(vec!["errands".to_string()]),
        }))
        .await
        .unwrap();

    let text = text_of(&result);
    assert!(text.starts_with("Task created: {"));
    assert!(text.contains("\"content\": \"Buy milk\""));
    assert!(text.contains("\"priority\": 4"));
    assert_eq!(api.task_count(), 1);
}

#[tokio::test]
async fn test_create_task_rejects_blank_content() {
    let api = MockTodoistApi::new();
    let server = server_backed_by(&api);

    let err = server
        .create_task(Parameters(CreateTaskRequest {
            content: "   ".to_string(),
            description: None,
            due_date: None,
            priority: None,
            project_id: None,
            labels: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    // Validation fails before anything reaches the remote
    assert!(api.call_history().is_empty());
}

#[tokio::test]
async fn test_create_task_rejects_out_of_range_priority() {
    let api = MockTodoistApi::new();
    let server = server_backed_by(&api);

    let err = server
        .create_task(Parameters(CreateTaskRequest {
            content: "Buy milk".to_string(),
            description: None,
            due_date: None,
            priority: Some(7),
            project_id: None,
            labels: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains('7'));
}

#[tokio::test]
async fn test_get_tasks_excludes_completed() {
    let api = MockTodoistApi::new();
    api.seed_tasks(vec![
        TaskBuilder::new().with_id("1").with_content("Active A").build(),
        TaskBuilder::new().with_id("2").with_content("Active B").build(),
        TaskBuilder::new()
            .with_id("3")
            .with_content("Done already")
            .completed()
            .build(),
    ]);
    let server = server_backed_by(&api);

    let result = server
        .get_tasks(Parameters(GetTasksRequest {
            project_id: None,
            priority: None,
        }))
        .await
        .unwrap();

    let tasks = tasks_in(text_of(&result));
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| !t.is_completed));
}

#[tokio::test]
async fn test_get_tasks_filters_by_priority() {
    let api = MockTodoistApi::new();
    api.seed_tasks(vec![
        TaskBuilder::new()
            .with_id("1")
            .with_content("Routine")
            .with_priority(1)
            .build(),
        TaskBuilder::new()
            .with_id("2")
            .with_content("Urgent")
            .with_priority(4)
            .build(),
    ]);
    let server = server_backed_by(&api);

    let result = server
        .get_tasks(Parameters(GetTasksRequest {
            project_id: None,
            priority: Some(4),
        }))
        .await
        .unwrap();

    let tasks = tasks_in(text_of(&result));
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].content, "Urgent");
}

#[tokio::test]
async fn test_get_tasks_rejects_invalid_priority() {
    let api = MockTodoistApi::new();
    let server = server_backed_by(&api);

    let err = server
        .get_tasks(Parameters(GetTasksRequest {
            project_id: None,
            priority: Some(0),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(api.call_history().is_empty());
}

#[tokio::test]
async fn test_update_task_changes_only_given_fields() {
    let api = MockTodoistApi::new();
    api.seed_tasks(vec![TaskBuilder::new()
        .with_id("42")
        .with_content("Write report")
        .with_priority(2)
        .build()]);
    let server = server_backed_by(&api);

    let result = server
        .update_task(Parameters(UpdateTaskRequest {
            task_id: "42".to_string(),
            content: None,
            description: None,
            priority: Some(4),
            due_date: None,
        }))
        .await
        .unwrap();

    let text = text_of(&result);
    assert!(text.starts_with("Task updated: {"));
    assert!(text.contains("\"content\": \"Write report\""));

    let stored = api.stored_task("42").unwrap();
    assert_eq!(stored.priority, 4);
    assert_eq!(stored.content, "Write report");
}

#[tokio::test]
async fn test_delete_task_echoes_content() {
    let api = MockTodoistApi::new();
    api.seed_tasks(vec![TaskBuilder::new()
        .with_id("42")
        .with_content("Water the plants")
        .build()]);
    let server = server_backed_by(&api);

    let result = server
        .delete_task(Parameters(DeleteTaskRequest {
            task_id: "42".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(text_of(&result), "Deleted: Water the plants");
    assert_eq!(api.task_count(), 0);
    // Content is fetched before the delete so the reply can echo it
    assert_eq!(
        api.call_history(),
        vec!["get_task(id=42)", "delete_task(id=42)"]
    );
}

#[tokio::test]
async fn test_complete_task_echoes_content() {
    let api = MockTodoistApi::new();
    api.seed_tasks(vec![TaskBuilder::new()
        .with_id("42")
        .with_content("Water the plants")
        .build()]);
    let server = server_backed_by(&api);

    let result = server
        .complete_task(Parameters(CompleteTaskRequest {
            task_id: "42".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(text_of(&result), "Completed: Water the plants");
    assert!(api.stored_task("42").unwrap().is_completed);
}

#[tokio::test]
async fn test_delete_unknown_task_is_invalid_params() {
    let api = MockTodoistApi::new();
    let server = server_backed_by(&api);

    let err = server
        .delete_task(Parameters(DeleteTaskRequest {
            task_id: "missing".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("missing"));
}

#[tokio::test]
async fn test_filter_tasks_returns_first_match() {
    let api = MockTodoistApi::new();
    api.set_filter_result(
        "today | overdue",
        vec![
            TaskBuilder::new().with_id("1").with_content("Pay rent").build(),
            TaskBuilder::new().with_id("2").with_content("Call dentist").build(),
        ],
    );
    let server = server_backed_by(&api);

    let result = server
        .filter_tasks(Parameters(FilterTasksRequest {
            query: "today | overdue".to_string(),
        }))
        .await
        .unwrap();

    let text = text_of(&result);
    assert!(text.starts_with("Found task(s): {"));
    assert!(text.contains("Pay rent"));
    assert!(!text.contains("Call dentist"));
}

#[tokio::test]
async fn test_filter_tasks_misses_cleanly() {
    let api = MockTodoistApi::new();
    let server = server_backed_by(&api);

    let result = server
        .filter_tasks(Parameters(FilterTasksRequest {
            query: "no such filter".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(text_of(&result), "Task not found");
}

#[tokio::test]
async fn test_get_projects_lists_account_projects() {
    let api = MockTodoistApi::new();
    api.seed_projects(vec![
        ProjectBuilder::new().with_id("1").with_name("Inbox").build(),
        ProjectBuilder::new()
            .with_id("2")
            .with_name("Work")
            .favorite()
            .build(),
    ]);
    let server = server_backed_by(&api);

    let result = server.get_projects().await.unwrap();

    let text = text_of(&result);
    assert!(text.starts_with("Projects: ["));
    assert!(text.contains("\"name\": \"Inbox\""));
    assert!(text.contains("\"name\": \"Work\""));
    assert!(text.contains("\"is_favorite\": true"));
}

#[tokio::test]
async fn test_remote_failure_surfaces_as_internal_error() {
    let api = MockTodoistApi::new();
    api.inject_error(TaskError::api(500, "Todoist is down"));
    let server = server_backed_by(&api);

    let err = server
        .get_tasks(Parameters(GetTasksRequest {
            project_id: None,
            priority: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("Todoist is down"));
}
