//! Integration tests for the mocks crate
//!
//! Tests the mock implementations and utilities to ensure they work correctly
//! and provide the expected testing capabilities.

use mocks::*;
use todo_core::{TaskError, TodoistApi};

#[tokio::test]
async fn test_mock_api_basic_operations() {
    let api = MockTodoistApi::new();

    // Test creation
    let new_task = create_new_task();
    let task = api.add_task(new_task).await.unwrap();

    assert!(!task.id.is_empty());
    assert_eq!(task.content, "New Test Task");
    assert!(!task.is_completed);
    assert_eq!(task.project_id.as_deref(), Some("inbox"));

    // Verify call tracking
    api.assert_called("add_task");

    // Test retrieval
    let retrieved = api.get_task(&task.id).await.unwrap();
    assert_eq!(retrieved.id, task.id);

    api.assert_called("get_task");
}

#[tokio::test]
async fn test_mock_api_error_injection() {
    let api = MockTodoistApi::with_tasks(vec![create_test_task_with_id("1")]);

    // Inject error
    api.inject_error(TaskError::api(503, "Service Unavailable"));

    // Next operation should fail
    let result = api.get_task("1").await;
    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), TaskError::Api { status: 503, .. }));

    // The injected error is consumed; the next call succeeds
    let result = api.get_task("1").await;
    assert!(result.is_ok());

    // clear_error removes a pending injection before it fires
    api.inject_error(TaskError::Network("boom".to_string()));
    api.clear_error();
    assert!(api.get_task("1").await.is_ok());
}

#[tokio::test]
async fn test_mock_api_close_and_delete() {
    let api = MockTodoistApi::new();
    let task = api.add_task(create_new_task()).await.unwrap();

    // Close marks the stored task completed
    api.close_task(&task.id).await.unwrap();
    let closed = api.get_task(&task.id).await.unwrap();
    assert!(closed.is_completed);
    assert!(closed.completed_at.is_some());

    // Delete removes it entirely
    api.delete_task(&task.id).await.unwrap();
    let gone = api.get_task(&task.id).await;
    assert!(matches!(gone.unwrap_err(), TaskError::NotFound(_)));
}

#[tokio::test]
async fn test_mock_api_pagination() {
    let api = MockTodoistApi::with_tasks(create_test_tasks(5));
    api.set_page_size(2);

    // Page 1
    let page = api.get_tasks(None, None).await.unwrap();
    assert_eq!(page.items.len(), 2);
    let cursor = page.next_cursor.clone().unwrap();

    // Page 2
    let page = api.get_tasks(None, Some(&cursor)).await.unwrap();
    assert_eq!(page.items.len(), 2);
    let cursor = page.next_cursor.clone().unwrap();

    // Page 3 is the last and short
    let page = api.get_tasks(None, Some(&cursor)).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_mock_api_returns_completed_tasks_unfiltered() {
    // The real list endpoint does not hide completed tasks; neither
    // does the mock. Callers own that predicate.
    let api = MockTodoistApi::with_tasks(create_mixed_tasks(2, 3));

    let page = api.get_tasks(None, None).await.unwrap();
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items.iter().filter(|t| t.is_completed).count(), 3);
}

#[tokio::test]
async fn test_mock_api_scripted_filters() {
    let api = MockTodoistApi::new();
    api.set_filter_result("today", vec![create_test_task_with_id("77")]);

    let page = api.filter_tasks("today", None).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "77");

    // Unscripted queries behave like valid queries with no hits
    let page = api.filter_tasks("no due date", None).await.unwrap();
    assert!(page.items.is_empty());
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_fixtures_mixed_tasks() {
    let tasks = create_mixed_tasks(3, 2);

    assert_eq!(tasks.len(), 5);
    assert_eq!(tasks.iter().filter(|t| !t.is_completed).count(), 3);
    assert_eq!(tasks.iter().filter(|t| t.is_completed).count(), 2);

    // Completed fixtures carry a completion timestamp
    for task in tasks.iter().filter(|t| t.is_completed) {
        assert!(task.completed_at.is_some());
    }
}

#[tokio::test]
async fn test_builders_task_builder() {
    let task = TaskBuilder::new()
        .with_id("424242")
        .with_content("Built Task")
        .with_priority(3)
        .with_project("work")
        .with_labels(vec!["urgent", "review"])
        .build();

    assert_eq!(task.id, "424242");
    assert_eq!(task.content, "Built Task");
    assert_eq!(task.priority, 3);
    assert_eq!(task.project_id.as_deref(), Some("work"));
    assert_eq!(task.labels, vec!["urgent", "review"]);
    assert_eq!(task.url, "https://app.todoist.com/app/task/424242");
}

#[tokio::test]
async fn test_assertions_task_equals() {
    let task1 = create_test_task();
    let mut task2 = task1.clone();

    // Should be equal
    assert_task_equals(&task1, &task2);

    // Change a field - should not be equal
    task2.content = "Different Content".to_string();

    let result = std::panic::catch_unwind(|| {
        assert_task_equals(&task1, &task2);
    });
    assert!(result.is_err());
}

#[tokio::test]
async fn test_assertions_no_completed() {
    let active = create_test_tasks(3);
    assert_no_completed_tasks(&active);

    let mixed = create_mixed_tasks(1, 1);
    let result = std::panic::catch_unwind(|| {
        assert_no_completed_tasks(&mixed);
    });
    assert!(result.is_err());
}

#[tokio::test]
async fn test_assertions_matcher_and_summary() {
    let api = MockTodoistApi::new();
    let task = api.add_task(create_new_task()).await.unwrap();

    let copy = task.clone();
    assert_summary_of(&task.summary(), &task);
    assert_urls_derived(std::slice::from_ref(&task));
    assert_task_equals_exact(&copy, &task);
    assert_task_matches(
        &task,
        &TaskMatcher::new()
            .with_id(task.id.clone())
            .with_content("New Test Task")
            .with_priority(2)
            .with_project("inbox")
            .with_completed(false),
    );

    let tasks = create_test_tasks(4);
    assert_contains_task_with_id(&tasks, "1000001");
    assert_all_priority(&create_test_tasks(0), 4);
}

#[tokio::test]
async fn test_generators_realistic_data() {
    let task = generate_random_task();

    // Verify generated data looks realistic
    assert!(!task.id.is_empty());
    assert!(!task.content.is_empty());
    assert!(!task.description.is_empty());
    assert!((1..=4).contains(&task.priority));
    assert!(task.url.ends_with(&task.id));
}

#[tokio::test]
async fn test_generators_task_generator_draws_from_pool() {
    let generator = TaskGenerator::new();

    for _ in 0..20 {
        let task = generator.generate();
        let project = task.project_id.clone().unwrap();
        assert!(generator.project_pool.contains(&project));
        if task.is_completed {
            assert!(task.completed_at.is_some());
        }
    }
}

#[tokio::test]
async fn test_generators_filter_queries_are_scriptable() {
    let api = MockTodoistApi::new();
    let query = generate_filter_query();
    api.set_filter_result(&query, vec![create_test_task_with_id("9")]);

    let page = api.filter_tasks(&query, None).await.unwrap();
    assert_eq!(page.items[0].id, "9");
}

#[tokio::test]
async fn test_generators_pages_of() {
    let tasks = create_test_tasks(5);
    let pages = pages_of(&tasks, 2);

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].items.len(), 2);
    assert_eq!(pages[0].next_cursor.as_deref(), Some("2"));
    assert_eq!(pages[2].items.len(), 1);
    assert!(pages[2].is_last());

    // Empty input still yields one terminal page
    let pages = pages_of(&[], 10);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].items.is_empty());
    assert!(pages[0].is_last());
}

#[tokio::test]
async fn test_mock_api_concurrent_access() {
    use std::sync::Arc;
    use tokio::task::JoinSet;

    let api = Arc::new(MockTodoistApi::new());
    let mut set = JoinSet::new();

    // Spawn multiple concurrent tasks
    for i in 0..10 {
        let api_clone = api.clone();
        set.spawn(async move {
            let new_task = NewTaskBuilder::new()
                .with_content(format!("Concurrent Task {i}"))
                .build();

            api_clone.add_task(new_task).await.unwrap()
        });
    }

    // Wait for all to complete
    let mut tasks = Vec::new();
    while let Some(result) = set.join_next().await {
        tasks.push(result.unwrap());
    }

    // Verify all tasks were created
    assert_eq!(tasks.len(), 10);
    assert_eq!(api.task_count(), 10);

    // Verify unique IDs
    let mut ids: Vec<_> = tasks.iter().map(|t| t.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10); // All IDs should be unique
}

#[tokio::test]
async fn test_contract_tests_with_mock() {
    let api = MockTodoistApi::new();

    // Run the full contract test suite
    test_api_contract(&api).await;

    // Verify the mock was called multiple times
    let history = api.call_history();
    assert!(
        !history.is_empty(),
        "Mock should have recorded method calls"
    );
    assert!(
        history.iter().any(|call| call.contains("add_task")),
        "Should have called add_task"
    );
    assert!(
        history.iter().any(|call| call.contains("get_task")),
        "Should have called get_task"
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use todo_core::Task;

    proptest! {
        #[test]
        fn prop_generated_tasks_respect_domain_rules(task in task_strategy()) {
            prop_assert!(!task.id.is_empty());
            prop_assert!((1..=4).contains(&task.priority));
            prop_assert_eq!(task.completed_at.is_some(), task.is_completed);
            prop_assert!(task.url.ends_with(task.id.as_str()));
        }

        #[test]
        fn prop_generated_projects_are_well_formed(project in project_strategy()) {
            prop_assert!(!project.id.is_empty());
            prop_assert!(!project.name.is_empty());
        }

        #[test]
        fn prop_pages_reassemble_in_order((tasks, size) in paged_tasks_strategy()) {
            let pages = pages_of(&tasks, size);

            // Every page but the last links onward; concatenating the
            // pages restores the original order exactly.
            for page in &pages[..pages.len() - 1] {
                prop_assert!(page.next_cursor.is_some());
            }
            prop_assert!(pages.last().unwrap().next_cursor.is_none());

            let reassembled: Vec<Task> =
                pages.into_iter().flat_map(|p| p.items).collect();
            prop_assert_eq!(reassembled, tasks);
        }
    }
}
