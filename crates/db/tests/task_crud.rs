//! Integration tests for task CRUD operations.
//!
//! Exercises the repository layer against a fresh SQLite database per test:
//! - Create defaults and timestamps
//! - Partial updates keep omitted fields
//! - Concurrent updates on a file database
//! - Hard delete
//! - Completion filter on list

use sqlx::SqlitePool;
use tasks_db::models::task::{CreateTask, UpdateTask};
use tasks_db::repositories::TaskRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_task(title: &str) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        description: None,
        completed: None,
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_applies_defaults(pool: SqlitePool) {
    let task = TaskRepo::create(&pool, &new_task("Buy milk")).await.unwrap();

    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, None);
    assert!(!task.completed);
    assert_eq!(task.created_at, task.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_assigns_unique_ids(pool: SqlitePool) {
    let a = TaskRepo::create(&pool, &new_task("A")).await.unwrap();
    let b = TaskRepo::create(&pool, &new_task("B")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(TaskRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_with_all_fields(pool: SqlitePool) {
    let input = CreateTask {
        title: "Ship release".to_string(),
        description: Some("tag and publish".to_string()),
        completed: Some(true),
    };
    let task = TaskRepo::create(&pool, &input).await.unwrap();

    let found = TaskRepo::find_by_id(&pool, task.id).await.unwrap().unwrap();
    assert_eq!(found, task);
    assert_eq!(found.description.as_deref(), Some("tag and publish"));
    assert!(found.completed);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: SqlitePool) {
    assert!(TaskRepo::find_by_id(&pool, 4242).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_title_rejected_by_schema(pool: SqlitePool) {
    let result = TaskRepo::create(&pool, &new_task("")).await;

    assert!(result.is_err());
    assert_eq!(TaskRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_only_changes_given_fields(pool: SqlitePool) {
    let input = CreateTask {
        title: "Original".to_string(),
        description: Some("keep me".to_string()),
        completed: None,
    };
    let created = TaskRepo::create(&pool, &input).await.unwrap();

    let update = UpdateTask {
        completed: Some(true),
        ..Default::default()
    };
    let updated = TaskRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Original");
    assert_eq!(updated.description.as_deref(), Some("keep me"));
    assert!(updated.completed);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_update_only_refreshes_timestamp(pool: SqlitePool) {
    let created = TaskRepo::create(&pool, &new_task("Untouched")).await.unwrap();

    let updated = TaskRepo::update(&pool, created.id, &UpdateTask::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.completed, created.completed);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_title_and_description(pool: SqlitePool) {
    let created = TaskRepo::create(&pool, &new_task("Draft")).await.unwrap();

    let update = UpdateTask {
        title: Some("Final".to_string()),
        description: Some("now with notes".to_string()),
        completed: None,
    };
    let updated = TaskRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description.as_deref(), Some("now with notes"));
    assert!(!updated.completed);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_returns_none(pool: SqlitePool) {
    let update = UpdateTask {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };

    assert!(TaskRepo::update(&pool, 999, &update).await.unwrap().is_none());
    assert_eq!(TaskRepo::count(&pool).await.unwrap(), 0);
}

/// Concurrent partial updates against one file-backed database all succeed
/// instead of failing with "database is locked".
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_all_succeed() {
    let path = std::env::temp_dir().join(format!("tasks-concurrent-{}.db", std::process::id()));
    remove_database_files(&path);

    let url = format!("sqlite://{}", path.display());
    let pool = tasks_db::create_pool(&url, 8).await.unwrap();
    tasks_db::run_migrations(&pool).await.unwrap();
    let created = TaskRepo::create(&pool, &new_task("Contended")).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..64 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            let update = UpdateTask {
                completed: Some(i % 2 == 0),
                ..Default::default()
            };
            TaskRepo::update(&pool, created.id, &update).await
        }));
    }

    for handle in handles {
        let updated = handle.await.unwrap().unwrap();
        let updated = updated.expect("task should still exist");
        assert_eq!(updated.title, "Contended");
        assert_eq!(updated.created_at, created.created_at);
    }

    assert_eq!(TaskRepo::count(&pool).await.unwrap(), 1);
    pool.close().await;
    remove_database_files(&path);
}

fn remove_database_files(path: &std::path::Path) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_owned();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_removes_row(pool: SqlitePool) {
    let created = TaskRepo::create(&pool, &new_task("Delete me")).await.unwrap();

    assert!(TaskRepo::delete(&pool, created.id).await.unwrap());
    assert!(TaskRepo::find_by_id(&pool, created.id).await.unwrap().is_none());

    // Second delete finds nothing.
    assert!(!TaskRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_orders_newest_first(pool: SqlitePool) {
    let first = TaskRepo::create(&pool, &new_task("first")).await.unwrap();
    let second = TaskRepo::create(&pool, &new_task("second")).await.unwrap();

    let tasks = TaskRepo::list(&pool, None).await.unwrap();
    let ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filter_partitions_tasks(pool: SqlitePool) {
    for (title, completed) in [("a", true), ("b", false), ("c", true), ("d", false)] {
        let input = CreateTask {
            title: title.to_string(),
            description: None,
            completed: Some(completed),
        };
        TaskRepo::create(&pool, &input).await.unwrap();
    }

    let all = TaskRepo::list(&pool, None).await.unwrap();
    let done = TaskRepo::list(&pool, Some(true)).await.unwrap();
    let open = TaskRepo::list(&pool, Some(false)).await.unwrap();

    assert!(done.iter().all(|t| t.completed));
    assert!(open.iter().all(|t| !t.completed));
    assert_eq!(done.len() + open.len(), all.len());

    let mut union: Vec<_> = done.iter().chain(open.iter()).map(|t| t.id).collect();
    union.sort_unstable();
    let mut every: Vec<_> = all.iter().map(|t| t.id).collect();
    every.sort_unstable();
    assert_eq!(union, every);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_empty_table(pool: SqlitePool) {
    assert!(TaskRepo::list(&pool, None).await.unwrap().is_empty());
}
