//! Task use-case service.
//!
//! # Responsibility
//! - Provide create/lookup/update/complete/delete entry points.
//! - Run existence checks before every mutation by ID.
//! - Emit metadata-only log events for each use-case.
//!
//! # Invariants
//! - Operations on absent IDs fail with `TaskError::NotFound`.
//! - Updates validate every provided field before anything is stored.
//! - Titles and descriptions are never written to logs.

use crate::error::{TaskError, TaskResult};
use crate::model::task::{RequestedId, Task, TaskId};
use crate::repo::task_repo::{InMemoryTaskRepository, TaskRepository};
use log::{info, warn};

/// Task service facade over repository implementations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl TaskService<InMemoryTaskRepository> {
    /// Creates a service over an empty in-memory collection.
    pub fn in_memory() -> Self {
        Self::new(InMemoryTaskRepository::new())
    }
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// ID that the next `add_task` call will assign.
    pub fn next_id(&self) -> TaskId {
        self.repo.next_id()
    }

    /// Creates an incomplete task with the next free ID.
    pub fn add_task(&mut self, title: &str, description: &str) -> TaskResult<Task> {
        let id = self.repo.next_id();
        let result = Task::new(id, title, description)
            .map_err(TaskError::from)
            .and_then(|task| {
                self.repo.insert(task.clone())?;
                Ok(task)
            });
        log_result("task_add", id, &result);
        result
    }

    /// Stores a task that already carries an ID, e.g. from an import.
    ///
    /// Fails with `TaskError::Duplicate` when the ID is taken.
    pub fn import_task(&mut self, task: Task) -> TaskResult<TaskId> {
        let id = task.id();
        let result = self.repo.insert(task).map_err(TaskError::from);
        log_result("task_import", id, &result);
        result
    }

    /// Lists all tasks in ascending ID order.
    pub fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.repo.list()?;
        info!(
            "event=task_list module=service status=ok count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    /// Looks up a task without treating absence as an error.
    pub fn find_task(&self, id: TaskId) -> TaskResult<Option<Task>> {
        Ok(self.repo.get(id)?)
    }

    /// Looks up a task that must exist.
    pub fn get_task(&self, id: TaskId) -> TaskResult<Task> {
        let result = self
            .repo
            .get(id)
            .map_err(TaskError::from)
            .and_then(|found| found.ok_or(TaskError::NotFound(id.into())));
        if let Err(err) = &result {
            warn!(
                "event=task_lookup module=service status=error error_code={} task_id={}",
                err.code(),
                id
            );
        }
        result
    }

    /// Looks up a task by an ID parsed from console input.
    ///
    /// IDs no task can carry fail with `TaskError::NotFound` like any other
    /// absent ID.
    pub fn resolve_task(&self, requested: &RequestedId) -> TaskResult<Task> {
        match requested {
            RequestedId::Task(id) => self.get_task(*id),
            RequestedId::Unassignable(_) => {
                warn!(
                    "event=task_lookup module=service status=error error_code=task_not_found task_id=unassignable"
                );
                Err(TaskError::NotFound(requested.clone()))
            }
        }
    }

    /// Replaces title and/or description. `None` keeps the current value.
    pub fn update_task(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> TaskResult<Task> {
        let result = self.get_task(id).and_then(|mut task| {
            if let Some(title) = title {
                task.set_title(title)?;
            }
            if let Some(description) = description {
                task.set_description(description)?;
            }
            self.repo.update(&task)?;
            Ok(task)
        });
        log_result("task_update", id, &result);
        result
    }

    /// Sets the completion flag.
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> TaskResult<Task> {
        let result = self.get_task(id).and_then(|mut task| {
            task.set_completed(completed);
            self.repo.update(&task)?;
            Ok(task)
        });
        log_result("task_set_completed", id, &result);
        result
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self, id: TaskId) -> TaskResult<Task> {
        let current = self.get_task(id)?;
        self.set_completed(id, !current.is_completed())
    }

    /// Deletes a task and returns the removed record.
    pub fn delete_task(&mut self, id: TaskId) -> TaskResult<Task> {
        let result = self
            .get_task(id)
            .and_then(|_| self.repo.remove(id).map_err(TaskError::from));
        log_result("task_delete", id, &result);
        result
    }
}

fn log_result<T>(event: &str, task_id: TaskId, result: &TaskResult<T>) {
    match result {
        Ok(_) => info!("event={event} module=service status=ok task_id={task_id}"),
        Err(err) => warn!(
            "event={event} module=service status=error error_code={} task_id={task_id}",
            err.code()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::TaskService;
    use crate::error::TaskError;
    use crate::model::task::RequestedId;

    #[test]
    fn toggle_flips_both_ways() {
        let mut service = TaskService::in_memory();
        let task = service.add_task("flip", "").unwrap();

        assert!(service.toggle_completed(task.id()).unwrap().is_completed());
        assert!(!service.toggle_completed(task.id()).unwrap().is_completed());
    }

    #[test]
    fn update_is_all_or_nothing() {
        let mut service = TaskService::in_memory();
        let task = service.add_task("original", "body").unwrap();

        let too_long = "d".repeat(1001);
        let err = service
            .update_task(task.id(), Some("renamed"), Some(&too_long))
            .unwrap_err();
        assert!(matches!(err, TaskError::InvalidInput(_)));

        let stored = service.get_task(task.id()).unwrap();
        assert_eq!(stored.title(), "original");
        assert_eq!(stored.description(), "body");
    }

    #[test]
    fn failed_add_does_not_consume_id() {
        let mut service = TaskService::in_memory();
        assert!(service.add_task("   ", "").is_err());
        assert_eq!(service.next_id(), 1);
        assert_eq!(service.add_task("real", "").unwrap().id(), 1);
    }

    #[test]
    fn resolve_reports_unassignable_ids_as_not_found() {
        let mut service = TaskService::in_memory();
        let task = service.add_task("present", "").unwrap();

        assert_eq!(
            service.resolve_task(&RequestedId::Task(task.id())).unwrap(),
            task
        );
        for literal in ["0", "-3", "99999999999999999999999"] {
            let requested = RequestedId::Unassignable(literal.to_string());
            let err = service.resolve_task(&requested).unwrap_err();
            assert_eq!(err.to_string(), format!("Task with ID {literal} not found."));
        }
    }
}
