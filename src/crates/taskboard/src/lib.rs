//! Taskboard service library
//!
//! A task-management REST API with one-shot AI analysis enrichment.
//! The crate is organized in three layers:
//!
//! - [`db`]: SQLite persistence (connection, models, repositories)
//! - [`analysis`]: the enrichment flow (prompt, model call, JSON
//!   extraction, conditional write)
//! - [`api`]: the Axum HTTP surface (handlers, DTOs, errors, routing)

pub mod analysis;
pub mod api;
pub mod config;
pub mod db;
