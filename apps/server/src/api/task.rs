//! Task API endpoints.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use task_store::{NewTask, Task, TaskPatch, TaskStore};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Request body for creating a task.
///
/// `title` stays optional at the wire level so its absence surfaces as a 400
/// instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title. Required.
    pub title: Option<String>,
    /// Free-form description. Defaults to empty.
    pub description: Option<String>,
    /// Initial completion flag. Defaults to false.
    pub completed: Option<bool>,
}

/// Lists all tasks, newest first.
pub async fn list_tasks<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<Task>>> {
    let tasks = state.store.list_tasks().await?;
    Ok(Json(tasks))
}

/// Creates a new task.
pub async fn create_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Task>)> {
    let Json(request) = body.map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;

    let title = request
        .title
        .ok_or_else(|| ServerError::InvalidRequest("Title is required".to_string()))?;

    let mut new = NewTask::new(title);
    if let Some(description) = request.description {
        new = new.with_description(description);
    }
    if let Some(completed) = request.completed {
        new = new.with_completed(completed);
    }

    let task = state.store.create_task(new).await?;

    tracing::info!(task_id = %task.id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Applies a partial update to a task.
pub async fn update_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> ServerResult<Json<Task>> {
    let Json(patch) = body.map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;

    let task = state.store.update_task(id, patch).await?;

    tracing::info!(task_id = %task.id, "Task updated");

    Ok(Json(task))
}

/// Deletes a task.
pub async fn delete_task<S: TaskStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> ServerResult<Json<serde_json::Value>> {
    state.store.delete_task(id).await?;

    tracing::info!(task_id = %id, "Task deleted");

    Ok(Json(json!({ "message": "Task deleted" })))
}
