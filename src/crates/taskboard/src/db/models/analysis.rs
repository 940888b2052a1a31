//! AI analysis payload attached to a task.

use serde::{Deserialize, Serialize};

/// Structured urgency/importance/duration/reasoning assessment.
///
/// Stored as JSON in the `ai_analysis` column and returned to callers
/// under the `aiAnalysis` key. At most one payload exists per task;
/// once set it is never cleared or replaced by the enrichment flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalysis {
    /// Urgency score, 1-10
    pub urgency: u8,

    /// Importance score, 1-10
    pub importance: u8,

    /// Estimated duration in minutes, positive
    pub estimated_minutes: u32,

    /// Brief free-text explanation
    pub reasoning: String,
}

impl TaskAnalysis {
    /// Check the payload against its documented ranges.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=10).contains(&self.urgency) {
            return Err(format!("urgency must be between 1 and 10, got {}", self.urgency));
        }
        if !(1..=10).contains(&self.importance) {
            return Err(format!(
                "importance must be between 1 and 10, got {}",
                self.importance
            ));
        }
        if self.estimated_minutes == 0 {
            return Err("estimatedMinutes must be positive".to_string());
        }
        if self.reasoning.trim().is_empty() {
            return Err("reasoning cannot be empty".to_string());
        }
        Ok(())
    }
}
