//! Task store trait definition.

use async_trait::async_trait;

use crate::{NewTask, Task, TaskPatch, TaskStoreResult};

/// Trait for task storage operations.
///
/// Both backends expose the same observable contract: ids are assigned
/// monotonically and never reused, `created_at` is set once at creation, and
/// listing returns the newest task first.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Creates a new task, assigning its id and creation time.
    async fn create_task(&self, new: NewTask) -> TaskStoreResult<Task>;

    /// Gets a task by ID.
    async fn get_task(&self, id: i64) -> TaskStoreResult<Option<Task>>;

    /// Lists all tasks, newest first.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Applies a partial update to a task.
    ///
    /// Returns [`TaskStoreError::NotFound`] if no task has the given id. An
    /// empty patch returns the stored task without writing.
    ///
    /// [`TaskStoreError::NotFound`]: crate::TaskStoreError::NotFound
    async fn update_task(&self, id: i64, patch: TaskPatch) -> TaskStoreResult<Task>;

    /// Deletes a task.
    ///
    /// Returns [`TaskStoreError::NotFound`] if no task has the given id.
    ///
    /// [`TaskStoreError::NotFound`]: crate::TaskStoreError::NotFound
    async fn delete_task(&self, id: i64) -> TaskStoreResult<()>;
}
