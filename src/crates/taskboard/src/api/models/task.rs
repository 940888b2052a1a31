//! Request and response DTOs for the task endpoints.
//!
//! The external surface speaks camelCase (`taskId`, `dueDate`,
//! `aiAnalysis`), storage speaks snake_case. The mapping lives here and
//! nowhere else: handlers never touch wire names and repositories never
//! see them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::api::middleware::{validate_not_empty, validate_string_length};
use crate::db::models::{Priority, Task, TaskAnalysis, TaskStatus};

/// Request body for creating a task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Validate field contents before anything reaches the database.
    pub fn validate(&self) -> ApiResult<()> {
        validate_not_empty(&self.title, "title")?;
        validate_string_length(&self.title, "title", 1, 255)?;
        validate_not_empty(&self.description, "description")?;
        self.priority
            .parse::<Priority>()
            .map_err(ApiError::ValidationError)?;
        Ok(())
    }
}

/// Request body for updating a task. Every field is optional; only the
/// fields present in the JSON are applied. `dueDate` distinguishes
/// "absent" (leave alone) from explicit `null` (clear the date).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<String>>,
}

/// Wraps a nullable field so that a missing key deserializes to `None`
/// while an explicit `null` deserializes to `Some(None)`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateTaskRequest {
    /// True when at least one field is present.
    pub fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.priority.is_some()
            || self.status.is_some()
            || self.due_date.is_some()
    }

    /// Validate whichever fields are present.
    pub fn validate(&self) -> ApiResult<()> {
        if let Some(title) = &self.title {
            validate_not_empty(title, "title")?;
            validate_string_length(title, "title", 1, 255)?;
        }
        if let Some(priority) = &self.priority {
            priority
                .parse::<Priority>()
                .map_err(ApiError::ValidationError)?;
        }
        if let Some(status) = &self.status {
            status
                .parse::<TaskStatus>()
                .map_err(ApiError::ValidationError)?;
        }
        Ok(())
    }

    /// Apply the present fields onto a stored row.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(priority) = &self.priority {
            task.priority = priority.clone();
        }
        if let Some(status) = &self.status {
            task.status = status.clone();
        }
        if let Some(due_date) = &self.due_date {
            task.due_date = due_date.clone();
        }
    }
}

/// External representation of a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub task_id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub due_date: Option<String>,
    pub ai_analysis: Option<TaskAnalysis>,
    pub created_at: String,
    pub modified_at: String,
}

impl TaskResponse {
    /// Build the external shape from a stored row. A stored analysis
    /// column that fails to decode is a server-side defect, not a
    /// client error.
    pub fn from_task(task: Task) -> ApiResult<Self> {
        let ai_analysis = task
            .analysis()
            .map_err(|e| ApiError::InternalError(format!("stored analysis is corrupt: {}", e)))?;
        Ok(Self {
            id: task.id,
            task_id: task.task_id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            status: task.status,
            due_date: task.due_date,
            ai_analysis,
            created_at: task.created_at,
            modified_at: task.modified_at,
        })
    }
}

/// Response body for a successful enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub message: String,
    pub ai_analysis: TaskAnalysis,
}
