//! Task CRUD endpoint handlers
//!
//! Provides handlers for creating, reading, updating, and deleting tasks.
//! Every item route is keyed by the external `task_id`, never by the
//! numeric row id.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::{
    error::{ApiError, ApiResult},
    models::{CreateTaskRequest, TaskResponse, UpdateTaskRequest},
    routes::AppState,
};
use crate::db::error::DatabaseError;
use crate::db::repositories::TaskRepository;

/// Create a new task
///
/// POST /tasks
pub async fn create_task(
    State(app_state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    req.validate()?;

    let pool = app_state.db.pool();
    let task_id = Uuid::new_v4().to_string();

    let created = TaskRepository::create(
        pool,
        task_id,
        req.title,
        req.description,
        req.priority,
        req.due_date,
    )
    .await
    .map_err(DatabaseError::from)?;

    tracing::info!(task_id = %created.task_id, "created task");
    Ok((StatusCode::CREATED, Json(TaskResponse::from_task(created)?)))
}

/// List all tasks, newest first
///
/// GET /tasks
pub async fn list_tasks(
    State(app_state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let tasks = TaskRepository::list(pool).await.map_err(DatabaseError::from)?;

    let responses = tasks
        .into_iter()
        .map(TaskResponse::from_task)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(Json(responses))
}

/// Get a single task
///
/// GET /tasks/:task_id
pub async fn get_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let task = TaskRepository::get_by_task_id(pool, &task_id)
        .await
        .map_err(DatabaseError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Task not found: {}", task_id)))?;

    Ok(Json(TaskResponse::from_task(task)?))
}

/// Update an existing task
///
/// PUT /tasks/:task_id
pub async fn update_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    if !req.has_updates() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }
    req.validate()?;

    let pool = app_state.db.pool();
    let mut task = TaskRepository::get_by_task_id(pool, &task_id)
        .await
        .map_err(DatabaseError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Task not found: {}", task_id)))?;

    req.apply_to(&mut task);
    let updated = TaskRepository::update(pool, &task)
        .await
        .map_err(DatabaseError::from)?;

    tracing::info!(task_id = %updated.task_id, "updated task");
    Ok(Json(TaskResponse::from_task(updated)?))
}

/// Delete a task
///
/// DELETE /tasks/:task_id
pub async fn delete_task(
    State(app_state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let pool = app_state.db.pool();
    let deleted = TaskRepository::delete(pool, &task_id)
        .await
        .map_err(DatabaseError::from)?;

    if deleted == 0 {
        return Err(ApiError::NotFound(format!("Task not found: {}", task_id)));
    }

    tracing::info!(%task_id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}
