//! AI analysis enrichment flow
//!
//! The one component with sequencing logic: read the task, check the
//! guard, build the prompt, call the model, extract and validate the
//! JSON payload, write it back. Each invocation performs exactly one
//! read, at most one outbound model call, and at most one write; no
//! step is retried.

pub mod extract;
pub mod prompt;

use thiserror::Error;

use crate::db::connection::DatabasePool;
use crate::db::error::DatabaseError;
use crate::db::models::TaskAnalysis;
use crate::db::repositories::TaskRepository;
use llm::{GenerationOptions, LlmError, TextModel};

/// Failure modes of the enrichment flow, each mapped to a distinct
/// HTTP response by the API layer.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The external key resolved to nothing.
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// The task already carries a payload; enrichment is one-shot.
    /// Carries the stored payload for the caller's convenience.
    #[error("Task already has AI analysis")]
    AlreadyAnalyzed(TaskAnalysis),

    /// The model call failed (transport, upstream status, or empty
    /// response).
    #[error(transparent)]
    Model(#[from] LlmError),

    /// The model's text contained no balanced JSON object.
    #[error("Could not parse AI analysis")]
    Unparsable,

    /// The extracted object failed to decode or violated the payload
    /// ranges.
    #[error("Invalid analysis payload: {0}")]
    InvalidPayload(String),

    /// Database failure.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Produce and persist an analysis payload for the task with the given
/// external key, or fail without mutating stored state.
///
/// The write is a conditional update that only succeeds while the task
/// has no payload, so two racing calls cannot both attach one; the
/// loser answers as already-analyzed with the stored payload.
pub async fn enrich_task(
    pool: &DatabasePool,
    model: &dyn TextModel,
    task_id: &str,
) -> Result<TaskAnalysis, AnalysisError> {
    let task = TaskRepository::get_by_task_id(pool, task_id)
        .await
        .map_err(DatabaseError::from)?
        .ok_or_else(|| AnalysisError::TaskNotFound(task_id.to_string()))?;

    if task.ai_analysis.is_some() {
        tracing::info!(task_id, "task already analyzed, rejecting enrichment");
        return Err(AnalysisError::AlreadyAnalyzed(stored_payload(&task)?));
    }

    let prompt = prompt::build_analysis_prompt(&task);
    tracing::info!(task_id, title = %task.title, "requesting AI analysis");

    let text = model
        .generate(&prompt, &GenerationOptions::structured_json())
        .await?;

    let span = extract::extract_json_object(&text).ok_or(AnalysisError::Unparsable)?;
    let analysis: TaskAnalysis =
        serde_json::from_str(span).map_err(|e| AnalysisError::InvalidPayload(e.to_string()))?;
    analysis.validate().map_err(AnalysisError::InvalidPayload)?;

    let payload = serde_json::to_string(&analysis)
        .map_err(|e| AnalysisError::InvalidPayload(e.to_string()))?;

    match TaskRepository::attach_analysis(pool, task_id, &payload)
        .await
        .map_err(DatabaseError::from)?
    {
        Some(_) => {
            tracing::info!(task_id, "analysis attached");
            Ok(analysis)
        }
        None => {
            // Lost the compare-and-set to a concurrent call; answer as
            // already analyzed with whatever that call stored.
            tracing::warn!(task_id, "concurrent enrichment won the conditional write");
            let current = TaskRepository::get_by_task_id(pool, task_id)
                .await
                .map_err(DatabaseError::from)?
                .ok_or_else(|| AnalysisError::TaskNotFound(task_id.to_string()))?;
            Err(AnalysisError::AlreadyAnalyzed(stored_payload(&current)?))
        }
    }
}

fn stored_payload(task: &crate::db::models::Task) -> Result<TaskAnalysis, AnalysisError> {
    task.analysis()
        .map_err(|e| AnalysisError::InvalidPayload(e.to_string()))?
        .ok_or_else(|| {
            AnalysisError::Database(DatabaseError::Other(
                "expected a stored analysis payload".to_string(),
            ))
        })
}
