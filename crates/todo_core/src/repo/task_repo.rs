//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD access to the process-local task collection.
//! - Own ID assignment state.
//!
//! # Invariants
//! - Write paths call `Task::validate()` before storing.
//! - IDs are never reused, even after deletion.
//! - `list` returns tasks in ascending ID order.

use crate::model::task::{Task, TaskId, TaskValidationError};
use std::collections::BTreeMap;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    #[error("Task with ID {0} not found.")]
    NotFound(TaskId),
    #[error("Task with ID {0} already exists.")]
    Duplicate(TaskId),
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// ID the next created task should use.
    fn next_id(&self) -> TaskId;
    fn insert(&mut self, task: Task) -> RepoResult<TaskId>;
    fn get(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn list(&self) -> RepoResult<Vec<Task>>;
    /// Replaces the stored record with the same ID.
    fn update(&mut self, task: &Task) -> RepoResult<()>;
    fn remove(&mut self, id: TaskId) -> RepoResult<Task>;
}

/// Ordered in-memory task store.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn next_id(&self) -> TaskId {
        self.next_id
    }

    fn insert(&mut self, task: Task) -> RepoResult<TaskId> {
        task.validate()?;

        let id = task.id();
        if self.tasks.contains_key(&id) {
            return Err(RepoError::Duplicate(id));
        }
        let following = id
            .checked_add(1)
            .ok_or(TaskValidationError::IdOutOfRange { id })?;

        self.tasks.insert(id, task);
        // Explicit-ID inserts may jump ahead of the counter.
        self.next_id = self.next_id.max(following);
        Ok(id)
    }

    fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        Ok(self.tasks.get(&id).cloned())
    }

    fn list(&self) -> RepoResult<Vec<Task>> {
        Ok(self.tasks.values().cloned().collect())
    }

    fn update(&mut self, task: &Task) -> RepoResult<()> {
        task.validate()?;

        match self.tasks.get_mut(&task.id()) {
            Some(stored) => {
                *stored = task.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(task.id())),
        }
    }

    fn remove(&mut self, id: TaskId) -> RepoResult<Task> {
        self.tasks.remove(&id).ok_or(RepoError::NotFound(id))
    }
}
