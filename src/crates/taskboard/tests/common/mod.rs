//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use llm::{GenerationOptions, LlmError, TextModel};
use taskboard::api::create_router;
use taskboard::db::DatabaseConnection;

/// Model double that answers every generate call with a fixed result.
pub struct ScriptedModel {
    reply: Result<String, fn() -> LlmError>,
}

impl ScriptedModel {
    pub fn ok(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
        }
    }

    pub fn err(make: fn() -> LlmError) -> Self {
        Self { reply: Err(make) }
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn generate(&self, _prompt: &str, _options: &GenerationOptions) -> llm::Result<String> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

/// Build a router backed by a fresh in-memory database.
///
/// The pool is capped at one connection so every query sees the same
/// in-memory database.
pub async fn test_app(model: ScriptedModel) -> Router {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    let db = DatabaseConnection::from_pool(pool);
    db.run_migrations().await.expect("migrations");

    create_router(db, Arc::new(model))
}

/// Dispatch a single request and return the response.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("infallible")
}

/// Build a JSON request.
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Build a bodyless request.
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Create a task through the API and return its external key.
pub async fn create_task(app: &Router, title: &str) -> String {
    let response = send(
        app,
        json_request(
            "POST",
            "/tasks",
            serde_json::json!({
                "title": title,
                "description": "integration test task",
                "priority": "medium",
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["taskId"].as_str().expect("taskId").to_string()
}
