use todo_core::{Task, TaskValidationError};

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(12, "Plan sprint", "backlog grooming").unwrap();
    task.set_completed(true);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 12);
    assert_eq!(json["title"], "Plan sprint");
    assert_eq!(json["description"], "backlog grooming");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_defaults_optional_fields() {
    let value = serde_json::json!({ "id": 4, "title": "  padded  " });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.title(), "padded");
    assert_eq!(task.description(), "");
    assert!(!task.is_completed());
}

#[test]
fn deserialize_rejects_whitespace_title() {
    let value = serde_json::json!({
        "id": 1,
        "title": "   ",
        "description": "",
        "completed": false
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("Title cannot be empty or contain only whitespace."),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_zero_id() {
    let value = serde_json::json!({ "id": 0, "title": "zero" });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(err.to_string().contains("Task ID must be a positive integer."));
}

#[test]
fn validation_messages_are_fixed() {
    assert_eq!(
        TaskValidationError::EmptyTitle.to_string(),
        "Title cannot be empty or contain only whitespace."
    );
    assert_eq!(
        TaskValidationError::TitleTooLong { chars: 250 }.to_string(),
        "Title must not exceed 200 characters."
    );
    assert_eq!(
        TaskValidationError::DescriptionTooLong { chars: 1200 }.to_string(),
        "Description must not exceed 1000 characters."
    );
    assert_eq!(
        TaskValidationError::InvalidId {
            input: "abc".to_string()
        }
        .to_string(),
        "Invalid task ID. Please enter a number."
    );
}
