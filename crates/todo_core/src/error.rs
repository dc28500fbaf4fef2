//! User-facing task errors.
//!
//! # Responsibility
//! - Define the error kinds surfaced by service operations.
//! - Provide the one fixed `Error: ` presentation format.
//!
//! # Invariants
//! - `Display` strings are deterministic and shown to users verbatim.

use crate::model::task::{RequestedId, TaskId, TaskValidationError};
use crate::repo::task_repo::RepoError;
use thiserror::Error;

/// Prefix prepended to every error shown on the console.
pub const ERROR_PREFIX: &str = "Error: ";

pub type TaskResult<T> = Result<T, TaskError>;

/// Service-level error for task use-cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Target task does not exist.
    #[error("Task with ID {0} not found.")]
    NotFound(RequestedId),
    /// Malformed or out-of-range field value.
    #[error(transparent)]
    InvalidInput(#[from] TaskValidationError),
    /// ID already taken; only reachable through explicit-ID inserts.
    #[error("Task with ID {0} already exists.")]
    Duplicate(TaskId),
}

impl TaskError {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "task_not_found",
            Self::InvalidInput(_) => "invalid_task_input",
            Self::Duplicate(_) => "duplicate_task",
        }
    }
}

impl From<RepoError> for TaskError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id.into()),
            RepoError::Duplicate(id) => Self::Duplicate(id),
            RepoError::Validation(err) => Self::InvalidInput(err),
        }
    }
}

/// Formats an error for console display.
pub fn present_error(err: &TaskError) -> String {
    format!("{ERROR_PREFIX}{err}")
}
