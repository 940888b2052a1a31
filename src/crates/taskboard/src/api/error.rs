//! API error types and HTTP response conversion
//!
//! Provides custom error types for API operations with conversion to
//! Axum HTTP responses. Every handler boundary converts errors into
//! this shape; nothing escapes uncaught and nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::db::models::TaskAnalysis;
use crate::db::DatabaseError;

/// API error response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Error code for programmatic handling
    pub code: String,
    /// Existing analysis payload, attached on already-analyzed rejections
    #[serde(rename = "aiAnalysis", skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<TaskAnalysis>,
}

impl ApiErrorResponse {
    /// Create a new API error response
    pub fn new(
        error: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            code: code.into(),
            ai_analysis: None,
        }
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Validation error
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Enrichment rejected because the task already carries a payload
    #[error("Task already has AI analysis")]
    AlreadyAnalyzed(TaskAnalysis),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::AlreadyAnalyzed(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DatabaseError(db_err) => {
                if db_err.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if db_err.is_constraint_violation() {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    /// Get the error code identifier
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::AlreadyAnalyzed(_) => "ALREADY_ANALYZED",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::DatabaseError(db_err) => {
                if db_err.is_not_found() {
                    "DB_NOT_FOUND"
                } else if db_err.is_constraint_violation() {
                    "DB_CONSTRAINT_VIOLATION"
                } else {
                    "DB_ERROR"
                }
            }
        }
    }

    /// Get the error type name
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NotFound",
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::ValidationError(_) => "ValidationError",
            ApiError::AlreadyAnalyzed(_) => "AlreadyAnalyzed",
            ApiError::InternalError(_) => "InternalError",
            ApiError::DatabaseError(_) => "DatabaseError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = ApiErrorResponse::new(self.error_type(), self.to_string(), self.code());
        if let ApiError::AlreadyAnalyzed(analysis) = self {
            body.ai_analysis = Some(analysis);
        }

        tracing::error!("API Error: {:?}", body);

        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::TaskNotFound(id) => ApiError::NotFound(format!("Task not found: {}", id)),
            AnalysisError::AlreadyAnalyzed(analysis) => ApiError::AlreadyAnalyzed(analysis),
            AnalysisError::Model(e) => ApiError::InternalError(e.to_string()),
            AnalysisError::Unparsable => {
                ApiError::InternalError("Could not parse AI analysis".to_string())
            }
            AnalysisError::InvalidPayload(msg) => {
                ApiError::InternalError(format!("Invalid analysis payload: {}", msg))
            }
            AnalysisError::Database(e) => ApiError::DatabaseError(e),
        }
    }
}
