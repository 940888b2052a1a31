//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::{handlers, middleware};
use crate::db::DatabaseConnection;
use llm::TextModel;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub model: Arc<dyn TextModel>,
}

/// Build the complete API router
pub fn create_router(db: DatabaseConnection, model: Arc<dyn TextModel>) -> Router {
    let app_state = AppState { db, model };

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/tasks",
            post(handlers::create_task).get(handlers::list_tasks),
        )
        .route(
            "/tasks/:task_id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/tasks/:task_id/analyze", post(handlers::analyze_task))
        .layer(middleware::logging_layer())
        .layer(middleware::cors_layer())
        .with_state(app_state)
}
