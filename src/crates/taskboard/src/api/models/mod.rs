//! API request/response models

pub mod task;

pub use task::{AnalyzeResponse, CreateTaskRequest, TaskResponse, UpdateTaskRequest};
