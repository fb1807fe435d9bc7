//! Random test data generators using the fake crate
//!
//! Provides realistic random data including:
//! - Task content and descriptions
//! - Filter query strings from a realistic pool
//! - Property-based testing strategies

use chrono::Utc;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use proptest::prelude::*;
use rand::Rng;
use todo_core::{Page, Project, Task};

/// Generate a realistic task content line
pub fn generate_task_content() -> String {
    Sentence(3..8).fake()
}

/// Generate a realistic task description
pub fn generate_task_description() -> String {
    Paragraph(2..5).fake()
}

/// Generate a realistic filter query
pub fn generate_filter_query() -> String {
    let queries = [
        "today",
        "overdue",
        "p1",
        "p2 & #Work",
        "7 days",
        "@errand",
        "#Inbox & no date",
        "search: milk",
    ];
    queries[rand::thread_rng().gen_range(0..queries.len())].to_string()
}

/// Generate a random active task with realistic data
pub fn generate_random_task() -> Task {
    let id: u32 = (1..99999).fake();
    let id = id.to_string();
    Task {
        url: format!("https://app.todoist.com/app/task/{id}"),
        id,
        content: generate_task_content(),
        description: generate_task_description(),
        priority: rand::thread_rng().gen_range(1..=4),
        project_id: Some("inbox".to_string()),
        is_completed: false,
        labels: Vec::new(),
        due: None,
        deadline: None,
        created_at: Some(Utc::now()),
        updated_at: None,
        completed_at: None,
    }
}

/// Configurable task generator
pub struct TaskGenerator {
    pub project_pool: Vec<String>,
    pub completed_ratio: f64,
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGenerator {
    /// Create new generator with default settings
    pub fn new() -> Self {
        Self {
            project_pool: vec![
                "inbox".to_string(),
                "work".to_string(),
                "home".to_string(),
            ],
            completed_ratio: 0.25,
        }
    }

    /// Generate task with this generator's settings
    pub fn generate(&self) -> Task {
        let mut rng = rand::thread_rng();
        let mut task = generate_random_task();

        task.project_id =
            Some(self.project_pool[rng.gen_range(0..self.project_pool.len())].clone());
        if rng.gen_bool(self.completed_ratio) {
            task.is_completed = true;
            task.completed_at = Some(Utc::now());
        }
        task
    }
}

/// Proptest strategy for generating task ids
pub fn task_id_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{6,9}"
}

/// Proptest strategy for generating valid priorities
pub fn priority_strategy() -> impl Strategy<Value = u8> {
    1u8..=4
}

/// Proptest strategy for generating complete tasks
pub fn task_strategy() -> impl Strategy<Value = Task> {
    (
        task_id_strategy(),
        "[A-Za-z ]{5,50}",
        "[A-Za-z0-9 .,!?]{0,200}",
        priority_strategy(),
        proptest::bool::ANY,
    )
        .prop_map(|(id, content, description, priority, is_completed)| {
            let completed_at = if is_completed { Some(Utc::now()) } else { None };
            Task {
                url: format!("https://app.todoist.com/app/task/{id}"),
                id,
                content,
                description,
                priority,
                project_id: Some("inbox".to_string()),
                is_completed,
                labels: Vec::new(),
                due: None,
                deadline: None,
                created_at: Some(Utc::now()),
                updated_at: None,
                completed_at,
            }
        })
}

/// Proptest strategy for splitting a task list into cursor pages.
///
/// Produces tasks plus a page size in 1..=tasks.len().max(1), which
/// covers the one-page, many-page and empty-store shapes.
pub fn paged_tasks_strategy() -> impl Strategy<Value = (Vec<Task>, usize)> {
    prop::collection::vec(task_strategy(), 0..24).prop_flat_map(|tasks| {
        let max = tasks.len().max(1);
        (Just(tasks), 1..=max)
    })
}

/// Proptest strategy for generating projects
pub fn project_strategy() -> impl Strategy<Value = Project> {
    (
        task_id_strategy(),
        "[A-Za-z ]{3,30}",
        proptest::bool::ANY,
        proptest::bool::ANY,
    )
        .prop_map(|(id, name, is_shared, is_favorite)| Project {
            id,
            name,
            is_shared,
            is_favorite,
        })
}

/// Split a task list into pages of `size`, with offset cursors linking
/// them the way the mock API does.
pub fn pages_of(tasks: &[Task], size: usize) -> Vec<Page<Task>> {
    assert!(size > 0, "page size must be positive");
    if tasks.is_empty() {
        return vec![Page::last(Vec::new())];
    }

    let mut pages = Vec::new();
    let mut offset = 0;
    while offset < tasks.len() {
        let end = (offset + size).min(tasks.len());
        let next = if end < tasks.len() {
            Some(end.to_string())
        } else {
            None
        };
        pages.push(Page::new(tasks[offset..end].to_vec(), next));
        offset = end;
    }
    pages
}
