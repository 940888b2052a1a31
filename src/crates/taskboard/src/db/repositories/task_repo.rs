//! Task repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::Task;
use chrono::Utc;

/// Task repository for managing task database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Create a new task in the database
    ///
    /// New tasks start at status `todo` with no analysis payload.
    ///
    /// # Returns
    /// The created row, or a database error
    pub async fn create(
        pool: &DatabasePool,
        task_id: String,
        title: String,
        description: String,
        priority: String,
        due_date: Option<String>,
    ) -> Result<Task, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (task_id, title, description, priority, status, due_date, created_at, modified_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&task_id)
        .bind(&title)
        .bind(&description)
        .bind(&priority)
        .bind("todo")
        .bind(&due_date)
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Get a task by its external key
    pub async fn get_by_task_id(
        pool: &DatabasePool,
        task_id: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE task_id = ?")
            .bind(task_id)
            .fetch_optional(pool)
            .await
    }

    /// Get all tasks, newest first (descending storage key)
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY id DESC")
            .fetch_all(pool)
            .await
    }

    /// Rewrite a task's mutable columns and refresh `modified_at`
    ///
    /// Writes the state carried by `task`, keyed by its external key.
    ///
    /// # Returns
    /// The post-write row, or a database error
    pub async fn update(pool: &DatabasePool, task: &Task) -> Result<Task, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET title = ?, description = ?, priority = ?, status = ?, due_date = ?, modified_at = ?
             WHERE task_id = ?
             RETURNING *",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.priority)
        .bind(&task.status)
        .bind(&task.due_date)
        .bind(&now)
        .bind(&task.task_id)
        .fetch_one(pool)
        .await
    }

    /// Attach an analysis payload if none exists yet
    ///
    /// Single conditional write: succeeds only while `ai_analysis` is
    /// NULL, also refreshing `modified_at`. Payload presence is
    /// monotonic; this is the compare-and-set that closes the
    /// double-enrichment race.
    ///
    /// # Returns
    /// The post-write row, or None when the payload was already set
    pub async fn attach_analysis(
        pool: &DatabasePool,
        task_id: &str,
        analysis_json: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET ai_analysis = ?, modified_at = ?
             WHERE task_id = ? AND ai_analysis IS NULL
             RETURNING *",
        )
        .bind(analysis_json)
        .bind(&now)
        .bind(task_id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a task by its external key
    ///
    /// # Returns
    /// Number of rows deleted (0 when the key is unknown)
    pub async fn delete(pool: &DatabasePool, task_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE task_id = ?")
            .bind(task_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single connection: each pooled connection to sqlite::memory:
    // would otherwise get its own database.
    async fn setup_pool() -> DatabasePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task_id TEXT NOT NULL UNIQUE,
                title TEXT NOT NULL,
                description TEXT,
                priority TEXT NOT NULL DEFAULT 'medium',
                status TEXT NOT NULL DEFAULT 'todo',
                due_date TEXT,
                ai_analysis TEXT,
                created_at TEXT NOT NULL,
                modified_at TEXT NOT NULL,
                CHECK (priority IN ('low', 'medium', 'high')),
                CHECK (status IN ('todo', 'in-progress', 'completed'))
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_create_task() {
        let pool = setup_pool().await;

        let task = TaskRepository::create(
            &pool,
            "task-1".to_string(),
            "Test Task".to_string(),
            "A test".to_string(),
            "low".to_string(),
            None,
        )
        .await
        .unwrap();

        assert_eq!(task.task_id, "task-1");
        assert_eq!(task.title, "Test Task");
        assert_eq!(task.status, "todo");
        assert!(task.ai_analysis.is_none());
    }

    #[tokio::test]
    async fn test_get_by_task_id() {
        let pool = setup_pool().await;

        let created = TaskRepository::create(
            &pool,
            "task-1".to_string(),
            "Test Task".to_string(),
            "A test".to_string(),
            "medium".to_string(),
            None,
        )
        .await
        .unwrap();

        let fetched = TaskRepository::get_by_task_id(&pool, "task-1").await.unwrap();
        assert_eq!(fetched.map(|t| t.id), Some(created.id));

        let missing = TaskRepository::get_by_task_id(&pool, "nope").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_descending_key() {
        let pool = setup_pool().await;

        for i in 1..=3 {
            TaskRepository::create(
                &pool,
                format!("task-{i}"),
                format!("Task {i}"),
                "desc".to_string(),
                "medium".to_string(),
                None,
            )
            .await
            .unwrap();
        }

        let tasks = TaskRepository::list(&pool).await.unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].task_id, "task-3");
        assert_eq!(tasks[2].task_id, "task-1");
    }

    #[tokio::test]
    async fn test_update_rewrites_columns() {
        let pool = setup_pool().await;

        let mut task = TaskRepository::create(
            &pool,
            "task-1".to_string(),
            "Old title".to_string(),
            "desc".to_string(),
            "low".to_string(),
            None,
        )
        .await
        .unwrap();

        task.title = "New title".to_string();
        task.status = "in-progress".to_string();
        task.due_date = Some("2026-09-01T00:00:00Z".to_string());

        let updated = TaskRepository::update(&pool, &task).await.unwrap();
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.status, "in-progress");
        assert_eq!(updated.due_date.as_deref(), Some("2026-09-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn test_attach_analysis_only_once() {
        let pool = setup_pool().await;

        TaskRepository::create(
            &pool,
            "task-1".to_string(),
            "Task".to_string(),
            "desc".to_string(),
            "high".to_string(),
            None,
        )
        .await
        .unwrap();

        let payload = r#"{"urgency":7,"importance":8,"estimatedMinutes":90,"reasoning":"soon"}"#;
        let first = TaskRepository::attach_analysis(&pool, "task-1", payload)
            .await
            .unwrap();
        assert!(first.is_some());
        assert_eq!(first.unwrap().ai_analysis.as_deref(), Some(payload));

        // Second attach loses the compare-and-set; stored payload is untouched.
        let second = TaskRepository::attach_analysis(
            &pool,
            "task-1",
            r#"{"urgency":1,"importance":1,"estimatedMinutes":1,"reasoning":"x"}"#,
        )
        .await
        .unwrap();
        assert!(second.is_none());

        let stored = TaskRepository::get_by_task_id(&pool, "task-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.ai_analysis.as_deref(), Some(payload));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let pool = setup_pool().await;

        TaskRepository::create(
            &pool,
            "task-1".to_string(),
            "Task".to_string(),
            "desc".to_string(),
            "low".to_string(),
            None,
        )
        .await
        .unwrap();

        assert_eq!(TaskRepository::delete(&pool, "task-1").await.unwrap(), 1);
        assert_eq!(TaskRepository::delete(&pool, "task-1").await.unwrap(), 0);

        let task = TaskRepository::get_by_task_id(&pool, "task-1").await.unwrap();
        assert!(task.is_none());
    }
}
