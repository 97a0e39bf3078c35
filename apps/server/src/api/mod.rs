//! API endpoints.

pub mod task;

use std::sync::Arc;

use axum::{
    response::Html,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;
use task_store::TaskStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: TaskStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Task endpoints
        .route("/api/tasks", get(task::list_tasks).post(task::create_task))
        .route(
            "/api/tasks/{id}",
            put(task::update_task).delete(task::delete_task),
        )
        // Health check
        .route("/healthtest", get(health_check))
        // Home page
        .route("/", get(home))
}

/// Health check endpoint.
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "message": "Task API is running!" }))
}

/// Home page.
async fn home() -> Html<&'static str> {
    Html(
        "<html><head><title>Task API</title></head><body><h1>Task API</h1><p>This is the home \
         page of the Task API.</p></body></html>",
    )
}
