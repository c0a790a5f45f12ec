//! Repository for the `tasks` table.

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tasks_core::task::completed_to_db;
use tasks_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskRow, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List tasks, newest first.
    ///
    /// When `completed` is given only tasks with that completion flag are returned.
    pub async fn list(pool: &SqlitePool, completed: Option<bool>) -> Result<Vec<Task>, sqlx::Error> {
        let rows = match completed {
            Some(flag) => {
                let query =
                    format!("SELECT {COLUMNS} FROM tasks WHERE completed = ?1 ORDER BY id DESC");
                sqlx::query_as::<_, TaskRow>(&query)
                    .bind(completed_to_db(flag))
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id DESC");
                sqlx::query_as::<_, TaskRow>(&query).fetch_all(pool).await?
            }
        };
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Find a task by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Task::from))
    }

    /// Insert a new task, returning the created row.
    ///
    /// `created_at` and `updated_at` are set to the same instant.
    pub async fn create(pool: &SqlitePool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO tasks (title, description, completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(completed_to_db(input.completed.unwrap_or(false)))
            .bind(now)
            .fetch_one(pool)
            .await?;

        tracing::debug!(task_id = row.id, "Task created");
        Ok(row.into())
    }

    /// Update a task. Only non-`None` fields in `input` replace stored values;
    /// `updated_at` is always refreshed.
    ///
    /// Runs as one `UPDATE ... RETURNING` whose SET list holds only the
    /// provided fields, so concurrent writers queue on the busy timeout.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE tasks SET ");
        {
            let mut set = query.separated(", ");
            if let Some(title) = &input.title {
                set.push("title = ").push_bind_unseparated(title.clone());
            }
            if let Some(description) = &input.description {
                set.push("description = ")
                    .push_bind_unseparated(description.clone());
            }
            if let Some(flag) = input.completed {
                set.push("completed = ")
                    .push_bind_unseparated(completed_to_db(flag));
            }
            set.push("updated_at = ").push_bind_unseparated(Utc::now());
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(format!(" RETURNING {COLUMNS}"));

        let row = query
            .build_query_as::<TaskRow>()
            .fetch_optional(pool)
            .await?;

        if row.is_some() {
            tracing::debug!(task_id = id, "Task updated");
        }
        Ok(row.map(Task::from))
    }

    /// Permanently delete a task by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(task_id = id, "Task deleted");
        }
        Ok(deleted)
    }

    /// Count all stored tasks.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
