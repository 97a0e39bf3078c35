//! In-memory task store implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{NewTask, Task, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult};

/// Interior state guarded by a single lock. The id counter and the task
/// collection are always mutated together under the write lock, so concurrent
/// creates cannot hand out duplicate ids.
#[derive(Debug, Default)]
struct MemoryInner {
    /// Tasks in insertion order.
    tasks: Vec<Task>,
    /// Last assigned id. Only ever grows, so ids are never reused.
    last_id: i64,
}

/// In-memory task store. Contents are scoped to the process lifetime.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryTaskStore {
    /// Creates a new in-memory task store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn create_task(&self, new: NewTask) -> TaskStoreResult<Task> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let task = Task {
            id: inner.last_id,
            title: new.title,
            description: new.description,
            completed: new.completed,
            created_at: Utc::now(),
        };
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn get_task(&self, id: i64) -> TaskStoreResult<Option<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        // Insertion order is oldest first; the contract is newest first.
        Ok(inner.tasks.iter().rev().cloned().collect())
    }

    async fn update_task(&self, id: i64, patch: TaskPatch) -> TaskStoreResult<Task> {
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskStoreError::not_found(id))?;
        patch.apply(task);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i64) -> TaskStoreResult<()> {
        let mut inner = self.inner.write().await;
        let len = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        if inner.tasks.len() == len {
            return Err(TaskStoreError::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryTaskStore::new();

        let first = store.create_task(NewTask::new("First")).await.unwrap();
        let second = store.create_task(NewTask::new("Second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.description, "");
        assert!(!first.completed);
    }

    #[tokio::test]
    async fn test_create_with_description_and_completed() {
        let store = MemoryTaskStore::new();

        let task = store
            .create_task(
                NewTask::new("Buy milk")
                    .with_description("2 liters")
                    .with_completed(true),
            )
            .await
            .unwrap();

        assert_eq!(task.description, "2 liters");
        assert!(task.completed);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = MemoryTaskStore::new();

        let a = store.create_task(NewTask::new("A")).await.unwrap();
        let b = store.create_task(NewTask::new("B")).await.unwrap();

        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, b.id);
        assert_eq!(tasks[1].id, a.id);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let store = MemoryTaskStore::new();

        let task = store
            .create_task(NewTask::new("Buy milk").with_description("2 liters"))
            .await
            .unwrap();

        let updated = store
            .update_task(
                task.id,
                TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, "2 liters");
        assert!(updated.completed);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_empty_patch_returns_unchanged_task() {
        let store = MemoryTaskStore::new();

        let task = store.create_task(NewTask::new("Buy milk")).await.unwrap();
        let updated = store
            .update_task(task.id, TaskPatch::default())
            .await
            .unwrap();

        assert_eq!(updated, task);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = MemoryTaskStore::new();

        let err = store
            .update_task(42, TaskPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TaskStoreError::NotFound { id: 42 }));
    }

    #[tokio::test]
    async fn test_delete_removes_task() {
        let store = MemoryTaskStore::new();

        let task = store.create_task(NewTask::new("Buy milk")).await.unwrap();
        store.delete_task(task.id).await.unwrap();

        assert!(store.get_task(task.id).await.unwrap().is_none());
        assert!(store.list_tasks().await.unwrap().is_empty());

        let err = store.delete_task(task.id).await.unwrap_err();
        assert!(matches!(err, TaskStoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryTaskStore::new();

        let first = store.create_task(NewTask::new("First")).await.unwrap();
        store.delete_task(first.id).await.unwrap();

        let second = store.create_task(NewTask::new("Second")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_concurrent_creates_assign_unique_ids() {
        let store = Arc::new(MemoryTaskStore::new());

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_task(NewTask::new(format!("Task {i}")))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}
