//! API endpoint handlers

pub mod analysis;
pub mod health;
pub mod tasks;

pub use analysis::analyze_task;
pub use health::health;
pub use tasks::{create_task, delete_task, get_task, list_tasks, update_task};
