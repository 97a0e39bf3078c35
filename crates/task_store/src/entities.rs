//! Task entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store. Never reused after deletion.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Whether the task is done.
    pub completed: bool,
    /// When this record was created. Immutable after creation.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Initial completion flag.
    pub completed: bool,
}

impl NewTask {
    /// Creates a new task input with an empty description, not completed.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            completed: false,
        }
    }

    /// Sets the description for this task.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial completion flag for this task.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Partial update for a task. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title, if present.
    pub title: Option<String>,
    /// New description, if present.
    pub description: Option<String>,
    /// New completion flag, if present.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Returns true when no recognized field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Applies the patch to a task, leaving absent fields untouched.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}
