//! AI analysis endpoint handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::analysis;
use crate::api::{
    error::ApiResult,
    middleware::validate_not_empty,
    models::AnalyzeResponse,
    routes::AppState,
};

/// Run AI analysis on a task and persist the result
///
/// POST /tasks/:task_id/analyze
pub async fn analyze_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    validate_not_empty(&task_id, "task_id")?;

    let pool = app_state.db.pool();
    let result = analysis::enrich_task(pool, app_state.model.as_ref(), &task_id).await?;

    Ok(Json(AnalyzeResponse {
        message: "Task analyzed successfully".to_string(),
        ai_analysis: result,
    }))
}
