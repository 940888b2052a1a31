//! Task model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

use crate::db::models::TaskAnalysis;

/// Task priority enumeration: low, medium, high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Canonical storage label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "invalid priority '{}', expected one of: low, medium, high",
                other
            )),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task status enumeration: todo, in-progress, completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Canonical storage label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(format!(
                "invalid status '{}', expected one of: todo, in-progress, completed",
                other
            )),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a task row in the tasks table.
///
/// `id` is the storage-internal numeric key; `task_id` is the stable
/// external key callers use. Timestamp fields are ISO8601 strings due
/// to SQLite type limitations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Storage-internal numeric key (autoincrement)
    pub id: i64,

    /// External task identifier (UUID string)
    pub task_id: String,

    /// Task title
    pub title: String,

    /// Optional task description
    pub description: Option<String>,

    /// Task priority: low, medium, high
    pub priority: String,

    /// Current task status: todo, in-progress, completed
    pub status: String,

    /// Optional due date (ISO8601 string)
    pub due_date: Option<String>,

    /// AI analysis payload as JSON string, set at most once
    pub ai_analysis: Option<String>,

    /// Creation timestamp (ISO8601 string)
    pub created_at: String,

    /// Last-modified timestamp (ISO8601 string)
    pub modified_at: String,
}

impl Task {
    /// Parse the stored analysis payload, if any.
    pub fn analysis(&self) -> Result<Option<TaskAnalysis>, serde_json::Error> {
        self.ai_analysis
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_round_trip() {
        for label in ["low", "medium", "high"] {
            let p: Priority = label.parse().unwrap();
            assert_eq!(p.as_str(), label);
        }
    }

    #[test]
    fn test_priority_rejects_unknown() {
        assert!("urgent".parse::<Priority>().is_err());
        assert!("ai-pending".parse::<Priority>().is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for label in ["todo", "in-progress", "completed"] {
            let s: TaskStatus = label.parse().unwrap();
            assert_eq!(s.as_str(), label);
        }
    }

    #[test]
    fn test_status_serde_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn test_task_analysis_none() {
        let task = Task {
            id: 1,
            task_id: "t-1".to_string(),
            title: "Test".to_string(),
            description: None,
            priority: "low".to_string(),
            status: "todo".to_string(),
            due_date: None,
            ai_analysis: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            modified_at: "2026-01-01T00:00:00Z".to_string(),
        };
        assert!(task.analysis().unwrap().is_none());
    }

    #[test]
    fn test_task_analysis_parses_payload() {
        let task = Task {
            id: 1,
            task_id: "t-1".to_string(),
            title: "Test".to_string(),
            description: None,
            priority: "low".to_string(),
            status: "todo".to_string(),
            due_date: None,
            ai_analysis: Some(
                r#"{"urgency":7,"importance":8,"estimatedMinutes":90,"reasoning":"soon"}"#
                    .to_string(),
            ),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            modified_at: "2026-01-01T00:00:00Z".to_string(),
        };
        let analysis = task.analysis().unwrap().unwrap();
        assert_eq!(analysis.urgency, 7);
        assert_eq!(analysis.estimated_minutes, 90);
    }
}
