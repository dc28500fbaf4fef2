//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by service and CLI layers.
//! - Own the field-level validation errors surfaced to users.
//!
//! # Invariants
//! - `id` is positive and never changes after construction.
//! - `title` is stored trimmed, non-empty and at most `MAX_TITLE_CHARS` chars.
//! - `description` is at most `MAX_DESCRIPTION_CHARS` chars.
//! - Every constructor, setter and deserializer enforces the rules above.

use crate::validation::{check_description, check_task_id, normalize_title};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Stable numeric identifier assigned by the repository.
pub type TaskId = u64;

/// ID as requested by a caller.
///
/// Console input may name integers no task can ever carry (`0`, `-3`, values
/// past `TaskId::MAX`); those are kept in normalized decimal form so lookups
/// can still report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestedId {
    Task(TaskId),
    Unassignable(String),
}

impl From<TaskId> for RequestedId {
    fn from(value: TaskId) -> Self {
        Self::Task(value)
    }
}

impl Display for RequestedId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task(id) => write!(f, "{id}"),
            Self::Unassignable(literal) => f.write_str(literal),
        }
    }
}

/// Maximum title length, counted in chars after trimming.
pub const MAX_TITLE_CHARS: usize = 200;
/// Maximum description length, counted in chars.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Field-level validation failure.
///
/// `Display` output is the exact user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskValidationError {
    #[error("Title cannot be empty or contain only whitespace.")]
    EmptyTitle,
    #[error("Title must not exceed {} characters.", MAX_TITLE_CHARS)]
    TitleTooLong { chars: usize },
    #[error("Description must not exceed {} characters.", MAX_DESCRIPTION_CHARS)]
    DescriptionTooLong { chars: usize },
    /// Raw ID input is not an integer.
    #[error("Invalid task ID. Please enter a number.")]
    InvalidId { input: String },
    /// Record ID is zero.
    #[error("Task ID must be a positive integer.")]
    NonPositiveId { input: String },
    /// No ID can follow this one, so it cannot be stored.
    #[error("Task ID {id} is out of range.")]
    IdOutOfRange { id: TaskId },
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    completed: bool,
}

/// Unvalidated wire shape; converted through `Task::from_parts`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        Self::from_parts(value.id, value.title, value.description, value.completed)
    }
}

impl Task {
    /// Creates an incomplete task after validating every field.
    pub fn new(
        id: TaskId,
        title: impl AsRef<str>,
        description: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::from_parts(id, title, description, false)
    }

    /// Rebuilds a task from stored or imported field values.
    ///
    /// Runs the same validation as [`Task::new`]; the title is re-normalized.
    pub fn from_parts(
        id: TaskId,
        title: impl AsRef<str>,
        description: impl Into<String>,
        completed: bool,
    ) -> Result<Self, TaskValidationError> {
        check_task_id(id)?;
        let title = normalize_title(title.as_ref())?;
        let description = description.into();
        check_description(&description)?;

        Ok(Self {
            id,
            title,
            description,
            completed,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Replaces the title; the current value is kept on failure.
    pub fn set_title(&mut self, title: &str) -> Result<(), TaskValidationError> {
        self.title = normalize_title(title)?;
        Ok(())
    }

    /// Replaces the description; the current value is kept on failure.
    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), TaskValidationError> {
        let description = description.into();
        check_description(&description)?;
        self.description = description;
        Ok(())
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Re-checks all invariants.
    ///
    /// Repositories call this before storing a record.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        check_task_id(self.id)?;
        normalize_title(&self.title)?;
        check_description(&self.description)
    }

    /// Single-char status marker used in listings.
    pub fn status_marker(&self) -> char {
        if self.completed {
            '✓'
        } else {
            '○'
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] ID: {} | Title: {} | Description: {}",
            self.status_marker(),
            self.id,
            self.title,
            self.description
        )
    }
}
