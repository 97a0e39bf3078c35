//! SQLite-backed task store implementation.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{FromRow, Pool, Sqlite};

use crate::{NewTask, Task, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult};

/// SQL schema definition
const SCHEMA_SQL: &str = r#"
-- Tasks table
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Index for newest-first listing
CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at);
"#;

const TASK_COLUMNS: &str = "id, title, description, completed, created_at";

/// Database row for Task
#[derive(Debug, FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    description: String,
    completed: bool,
    created_at: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            created_at: chrono::DateTime::parse_from_rfc3339(&row.created_at)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        }
    }
}

/// SQLite-backed task store. Tasks survive process restarts.
pub struct SqliteTaskStore {
    pool: Pool<Sqlite>,
}

impl SqliteTaskStore {
    /// Opens the database at `url` and bootstraps the schema.
    pub async fn connect(url: &str) -> TaskStoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Runs idempotent schema bootstrap. Not called at request time.
    async fn run_migrations(&self) -> TaskStoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::debug!("tasks schema ensured");
        Ok(())
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn create_task(&self, new: NewTask) -> TaskStoreResult<Task> {
        let created_at = chrono::Utc::now().to_rfc3339();

        // Dropping the transaction on the error path rolls it back.
        let mut tx = self.pool.begin().await?;
        let row: TaskRow = sqlx::query_as(&format!(
            "INSERT INTO tasks (title, description, completed, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.completed)
        .bind(&created_at)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(row.into())
    }

    async fn get_task(&self, id: i64) -> TaskStoreResult<Option<Task>> {
        let row: Option<TaskRow> =
            sqlx::query_as(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Task::from))
    }

    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        // Ties on created_at are broken by id so insertion order still wins.
        let rows: Vec<TaskRow> = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn update_task(&self, id: i64, patch: TaskPatch) -> TaskStoreResult<Task> {
        if patch.is_empty() {
            // No recognized fields: return the stored task without writing.
            return self
                .get_task(id)
                .await?
                .ok_or_else(|| TaskStoreError::not_found(id));
        }

        // SET fragments come from a fixed allow-list of columns; values are
        // always bound, never interpolated.
        let mut sets: Vec<&'static str> = Vec::new();
        if patch.title.is_some() {
            sets.push("title = ?");
        }
        if patch.description.is_some() {
            sets.push("description = ?");
        }
        if patch.completed.is_some() {
            sets.push("completed = ?");
        }

        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ? RETURNING {TASK_COLUMNS}",
            sets.join(", "),
        );

        let mut query = sqlx::query_as::<_, TaskRow>(&sql);
        if let Some(title) = &patch.title {
            query = query.bind(title);
        }
        if let Some(description) = &patch.description {
            query = query.bind(description);
        }
        if let Some(completed) = patch.completed {
            query = query.bind(completed);
        }
        query = query.bind(id);

        let mut tx = self.pool.begin().await?;
        let row = query.fetch_optional(&mut *tx).await?;
        tx.commit().await?;

        let row = row.ok_or_else(|| TaskStoreError::not_found(id))?;
        Ok(row.into())
    }

    async fn delete_task(&self, id: i64) -> TaskStoreResult<()> {
        let mut tx = self.pool.begin().await?;
        let deleted: Option<i64> = sqlx::query_scalar("DELETE FROM tasks WHERE id = ? RETURNING id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        deleted.ok_or_else(|| TaskStoreError::not_found(id))?;
        Ok(())
    }
}
