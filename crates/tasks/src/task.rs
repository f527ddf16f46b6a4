//! Task records.

use demo_deck_core::TaskId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task.
    #[must_use]
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    /// Case-insensitive description comparison used for duplicate checks.
    #[must_use]
    pub fn has_description(&self, description: &str) -> bool {
        self.description.to_lowercase() == description.to_lowercase()
    }
}

/// Task validation and lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Task already exists: {0}")]
    Duplicate(String),

    #[error("Task not found: {0}")]
    NotFound(TaskId),
}

/// Seed tasks shown on first run.
#[must_use]
pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task::new(TaskId::new(1), "Complete the project report"),
        Task::new(TaskId::new(2), "Prepare for the client meeting"),
        Task::new(TaskId::new(3), "Update the project documentation"),
    ]
}
