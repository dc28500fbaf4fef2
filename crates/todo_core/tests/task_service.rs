use todo_core::{
    parse_task_id, present_error, InMemoryTaskRepository, RequestedId, Task, TaskError,
    TaskRepository, TaskService,
};

#[test]
fn add_task_assigns_sequential_ids_and_defaults() {
    let mut service = TaskService::in_memory();

    let first = service.add_task("Task 1", "Description 1").unwrap();
    let second = service.add_task("Task 2", "").unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
    assert!(!first.is_completed());
    assert_eq!(service.next_id(), 3);

    let ids: Vec<_> = service.list_tasks().unwrap().iter().map(Task::id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn full_task_lifecycle() {
    let mut service = TaskService::in_memory();
    let task = service
        .add_task("Integration Test Task", "Integration Test Description")
        .unwrap();

    let updated = service
        .update_task(task.id(), Some("Updated Task"), Some("Updated Description"))
        .unwrap();
    assert_eq!(updated.title(), "Updated Task");
    assert_eq!(updated.description(), "Updated Description");

    assert!(service.set_completed(task.id(), true).unwrap().is_completed());
    assert!(service.get_task(task.id()).unwrap().is_completed());
    assert!(!service.set_completed(task.id(), false).unwrap().is_completed());

    let removed = service.delete_task(task.id()).unwrap();
    assert_eq!(removed.title(), "Updated Task");
    assert_eq!(service.find_task(task.id()).unwrap(), None);
    assert!(service.list_tasks().unwrap().is_empty());
}

#[test]
fn partial_update_keeps_other_field() {
    let mut service = TaskService::in_memory();
    let task = service.add_task("Original Title", "Original Description").unwrap();

    let updated = service
        .update_task(task.id(), Some("Updated Title"), None)
        .unwrap();
    assert_eq!(updated.title(), "Updated Title");
    assert_eq!(updated.description(), "Original Description");
}

#[test]
fn create_with_whitespace_title_reports_empty_title() {
    let mut service = TaskService::in_memory();

    let err = service.add_task("  ", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Title cannot be empty or contain only whitespace."
    );
    assert!(service.list_tasks().unwrap().is_empty());
}

#[test]
fn delete_with_non_numeric_id_reports_invalid_id() {
    let err: TaskError = parse_task_id("abc").unwrap_err().into();
    assert_eq!(
        present_error(&err),
        "Error: Invalid task ID. Please enter a number."
    );
}

#[test]
fn update_absent_id_reports_not_found() {
    let mut service = TaskService::in_memory();
    service.add_task("present", "").unwrap();

    let err = service.update_task(999, Some("new"), None).unwrap_err();
    assert_eq!(err, TaskError::NotFound(RequestedId::Task(999)));
    assert_eq!(present_error(&err), "Error: Task with ID 999 not found.");
}

#[test]
fn non_positive_and_oversized_ids_report_not_found() {
    let mut service = TaskService::in_memory();
    service.add_task("present", "").unwrap();

    for raw in ["0", "-3", "99999999999999999999999"] {
        let requested = parse_task_id(raw).unwrap();
        let err = service.resolve_task(&requested).unwrap_err();
        assert_eq!(
            present_error(&err),
            format!("Error: Task with ID {raw} not found.")
        );
    }
}

#[test]
fn status_and_delete_on_absent_id_report_not_found() {
    let mut service = TaskService::in_memory();

    assert_eq!(
        service.set_completed(42, true).unwrap_err(),
        TaskError::NotFound(RequestedId::Task(42))
    );
    assert_eq!(
        service.toggle_completed(42).unwrap_err(),
        TaskError::NotFound(RequestedId::Task(42))
    );
    assert_eq!(
        service.delete_task(42).unwrap_err(),
        TaskError::NotFound(RequestedId::Task(42))
    );
}

#[test]
fn deleted_ids_are_not_reused() {
    let mut service = TaskService::in_memory();
    service.add_task("one", "").unwrap();
    let two = service.add_task("two", "").unwrap();
    service.delete_task(two.id()).unwrap();

    let three = service.add_task("three", "").unwrap();
    assert_eq!(three.id(), 3);
}

#[test]
fn import_rejects_taken_id() {
    let mut repo = InMemoryTaskRepository::new();
    repo.insert(Task::new(1, "seeded", "").unwrap()).unwrap();
    let mut service = TaskService::new(repo);

    let err = service
        .import_task(Task::new(1, "clash", "").unwrap())
        .unwrap_err();
    assert_eq!(err, TaskError::Duplicate(1));
    assert_eq!(err.to_string(), "Task with ID 1 already exists.");

    let imported = service.import_task(Task::new(8, "later", "").unwrap()).unwrap();
    assert_eq!(imported, 8);
    assert_eq!(service.add_task("next", "").unwrap().id(), 9);
    assert_eq!(service.repository().len(), 3);
}
