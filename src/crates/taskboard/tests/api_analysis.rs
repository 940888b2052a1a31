//! Integration tests for the AI analysis endpoint.

mod common;

use axum::http::StatusCode;
use llm::LlmError;

use common::{body_json, create_task, empty_request, send, test_app, ScriptedModel};

const MODEL_REPLY: &str = r#"Sure, here is the analysis:
{"urgency":7,"importance":8,"estimatedMinutes":90,"reasoning":"deadline soon"}
Let me know if you need anything else."#;

#[tokio::test]
async fn test_analyze_persists_payload() {
    let app = test_app(ScriptedModel::ok(MODEL_REPLY)).await;
    let task_id = create_task(&app, "Write report").await;

    let response = send(
        &app,
        empty_request("POST", &format!("/tasks/{}/analyze", task_id)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Task analyzed successfully");
    assert_eq!(body["aiAnalysis"]["urgency"], 7);
    assert_eq!(body["aiAnalysis"]["importance"], 8);
    assert_eq!(body["aiAnalysis"]["estimatedMinutes"], 90);
    assert_eq!(body["aiAnalysis"]["reasoning"], "deadline soon");

    // Payload is visible on subsequent reads.
    let response = send(&app, empty_request("GET", &format!("/tasks/{}", task_id))).await;
    let task = body_json(response).await;
    assert_eq!(task["aiAnalysis"]["estimatedMinutes"], 90);
}

#[tokio::test]
async fn test_second_analyze_returns_existing_payload() {
    let app = test_app(ScriptedModel::ok(MODEL_REPLY)).await;
    let task_id = create_task(&app, "Write report").await;

    let response = send(
        &app,
        empty_request("POST", &format!("/tasks/{}/analyze", task_id)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        empty_request("POST", &format!("/tasks/{}/analyze", task_id)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "ALREADY_ANALYZED");
    assert_eq!(body["aiAnalysis"]["urgency"], 7);
    assert_eq!(body["aiAnalysis"]["reasoning"], "deadline soon");
}

#[tokio::test]
async fn test_analyze_unknown_task_is_404() {
    let app = test_app(ScriptedModel::ok(MODEL_REPLY)).await;

    let response = send(&app, empty_request("POST", "/tasks/no-such-task/analyze")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_upstream_failure_maps_to_500() {
    let app = test_app(ScriptedModel::err(|| LlmError::Api {
        status: 503,
        body: "model overloaded".to_string(),
    }))
    .await;
    let task_id = create_task(&app, "Write report").await;

    let response = send(
        &app,
        empty_request("POST", &format!("/tasks/{}/analyze", task_id)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INTERNAL_ERROR");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("503"));

    // Failed analysis leaves the task unmodified.
    let response = send(&app, empty_request("GET", &format!("/tasks/{}", task_id))).await;
    let task = body_json(response).await;
    assert!(task["aiAnalysis"].is_null());
}

#[tokio::test]
async fn test_unparsable_model_output_maps_to_500() {
    let app = test_app(ScriptedModel::ok("it depends on many factors")).await;
    let task_id = create_task(&app, "Write report").await;

    let response = send(
        &app,
        empty_request("POST", &format!("/tasks/{}/analyze", task_id)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = send(&app, empty_request("GET", &format!("/tasks/{}", task_id))).await;
    let task = body_json(response).await;
    assert!(task["aiAnalysis"].is_null());
}
