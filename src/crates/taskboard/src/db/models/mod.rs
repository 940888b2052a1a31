//! Database models
//!
//! Core data models for the tasks table. All timestamp fields are
//! stored as ISO8601 strings (TEXT in SQLite) due to sqlx and SQLite
//! type limitations with chrono::DateTime<Utc>.

pub mod analysis;
pub mod task;

pub use analysis::TaskAnalysis;
pub use task::{Priority, Task, TaskStatus};
