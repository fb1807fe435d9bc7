//! Contract test helpers for validating trait implementations
//!
//! Provides standardized tests that any implementation of the remote
//! service trait should pass, ensuring consistent behavior between the
//! mock and a real client pointed at a sandbox account.

use crate::{create_new_task, NewTaskBuilder, UpdateTaskBuilder};
use todo_core::{TaskError, TodoistApi};

/// Upper bound on cursor walks so a broken implementation fails the
/// test instead of hanging it.
const MAX_PAGES: usize = 1000;

/// Test any TodoistApi implementation with comprehensive contract tests
///
/// This function runs a suite of tests that any TodoistApi implementation
/// should pass to be considered compliant with the expected contract.
pub async fn test_api_contract<A: TodoistApi>(api: &A) {
    test_add_task_contract(api).await;
    test_get_task_contract(api).await;
    test_update_contract(api).await;
    test_delete_contract(api).await;
    test_close_contract(api).await;
    test_pagination_contract(api).await;
    test_projects_contract(api).await;
}

/// Test task creation contract
pub async fn test_add_task_contract<A: TodoistApi>(api: &A) {
    let new_task = create_new_task();
    let task = api
        .add_task(new_task.clone())
        .await
        .expect("Add should succeed");

    assert!(!task.id.is_empty(), "Created task should have an id");
    assert_eq!(
        task.content, new_task.content,
        "Created task should preserve content"
    );
    assert_eq!(
        Some(task.priority),
        new_task.priority,
        "Created task should preserve priority"
    );
    assert!(!task.is_completed, "New task should start active");
    assert!(
        task.project_id.is_some(),
        "Service should file the task into a project"
    );
    assert_eq!(
        task.url,
        format!("https://app.todoist.com/app/task/{}", task.id),
        "Task URL should be derived from its id"
    );
}

/// Test task retrieval contract
pub async fn test_get_task_contract<A: TodoistApi>(api: &A) {
    let created = api
        .add_task(NewTaskBuilder::new().with_content("Get contract").build())
        .await
        .expect("Add should succeed");

    let fetched = api
        .get_task(&created.id)
        .await
        .expect("Get should succeed for an existing task");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.content, "Get contract");

    let missing = api.get_task("0").await;
    match missing.expect_err("Get should fail for a non-existent id") {
        TaskError::NotFound(_) => {}
        other => panic!("Expected NotFound error, got: {other:?}"),
    }
}

/// Test task update contract
pub async fn test_update_contract<A: TodoistApi>(api: &A) {
    let created = api
        .add_task(NewTaskBuilder::new().with_content("Update contract").build())
        .await
        .expect("Add should succeed");

    let update = UpdateTaskBuilder::new()
        .with_content("Updated Content")
        .with_priority(4)
        .build();
    let updated = api
        .update_task(&created.id, update)
        .await
        .expect("Update should succeed");

    assert_eq!(updated.content, "Updated Content");
    assert_eq!(updated.priority, 4);
    assert_eq!(updated.id, created.id, "ID should remain unchanged");

    let missing = api.update_task("0", UpdateTaskBuilder::new().build()).await;
    match missing.expect_err("Update should fail for a non-existent id") {
        TaskError::NotFound(_) => {}
        other => panic!("Expected NotFound error, got: {other:?}"),
    }
}

/// Test task deletion contract
pub async fn test_delete_contract<A: TodoistApi>(api: &A) {
    let created = api
        .add_task(NewTaskBuilder::new().with_content("Delete contract").build())
        .await
        .expect("Add should succeed");

    api.delete_task(&created.id)
        .await
        .expect("Delete should succeed");

    let gone = api.get_task(&created.id).await;
    match gone.expect_err("Deleted task should no longer resolve") {
        TaskError::NotFound(_) => {}
        other => panic!("Expected NotFound error, got: {other:?}"),
    }

    let missing = api.delete_task("0").await;
    assert!(
        missing.is_err(),
        "Delete should fail for a non-existent id"
    );
}

/// Test task completion contract
pub async fn test_close_contract<A: TodoistApi>(api: &A) {
    let created = api
        .add_task(NewTaskBuilder::new().with_content("Close contract").build())
        .await
        .expect("Add should succeed");

    api.close_task(&created.id)
        .await
        .expect("Close should succeed");

    let closed = api
        .get_task(&created.id)
        .await
        .expect("Closed task should still resolve by id");
    assert!(closed.is_completed, "Closed task should be completed");
    assert!(
        closed.completed_at.is_some(),
        "Closed task should have a completion timestamp"
    );

    let missing = api.close_task("0").await;
    assert!(missing.is_err(), "Close should fail for a non-existent id");
}

/// Test pagination contract: a full cursor walk terminates and yields
/// every task exactly once
pub async fn test_pagination_contract<A: TodoistApi>(api: &A) {
    let mut seeded = Vec::new();
    for i in 0..5 {
        let task = api
            .add_task(
                NewTaskBuilder::new()
                    .with_content(format!("Pagination contract {i}"))
                    .build(),
            )
            .await
            .expect("Add should succeed");
        seeded.push(task.id);
    }

    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0;
    loop {
        pages += 1;
        assert!(
            pages <= MAX_PAGES,
            "Walk did not terminate within {MAX_PAGES} pages"
        );
        let page = api
            .get_tasks(None, cursor.as_deref())
            .await
            .expect("Page fetch should succeed");
        seen.extend(page.items.into_iter().map(|t| t.id));
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    for id in &seeded {
        let count = seen.iter().filter(|s| *s == id).count();
        assert_eq!(count, 1, "Task '{id}' should appear exactly once across pages");
    }
}

/// Test project listing contract: the walk terminates without error
pub async fn test_projects_contract<A: TodoistApi>(api: &A) {
    let mut cursor: Option<String> = None;
    for _ in 0..MAX_PAGES {
        let page = api
            .get_projects(cursor.as_deref())
            .await
            .expect("Project page fetch should succeed");
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => return,
        }
    }
    panic!("Project walk did not terminate within {MAX_PAGES} pages");
}
