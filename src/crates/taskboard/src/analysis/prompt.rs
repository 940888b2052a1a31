//! Prompt construction for the analysis request.

use crate::db::models::Task;
use chrono::DateTime;

/// Build the natural-language prompt for a task.
///
/// Absent fields get literal placeholders ("No description",
/// "No due date") so the model always sees the same shape.
pub fn build_analysis_prompt(task: &Task) -> String {
    let description = task
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("No description");

    let due_date = task
        .due_date
        .as_deref()
        .map(format_due_date)
        .unwrap_or_else(|| "No due date".to_string());

    format!(
        r#"Analyze this task for priority and time estimation:

Task: "{title}"
Description: "{description}"
Due Date: {due_date}
Current Priority: {priority}

Provide analysis in this JSON format:
{{
  "urgency": <number 1-10>,
  "importance": <number 1-10>,
  "estimatedMinutes": <number>,
  "reasoning": "<brief explanation>"
}}"#,
        title = task.title,
        priority = task.priority,
    )
}

/// Render an ISO8601 due date as a human-readable date string
/// (e.g. "Mon Aug 24 2026"). Unparsable input passes through as-is.
fn format_due_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%a %b %d %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
