//! Core domain logic for the console task tracker.
//! This crate is the single source of truth for task validation and errors.

pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use error::{present_error, TaskError, TaskResult, ERROR_PREFIX};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{
    RequestedId, Task, TaskId, TaskValidationError, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS,
};
pub use repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use service::task_service::TaskService;
pub use validation::{is_blank, parse_task_id, sanitize_input};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
