use tasklist_core::{ListLayout, Task, TaskId, TaskList, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("Learn SwiftUI Lists");

    assert!(!task.id.as_uuid().is_nil());
    assert_eq!(task.title, "Learn SwiftUI Lists");
    assert!(!task.is_completed);
    assert!(!task.is_pinned);
}

#[test]
fn ids_are_not_reused() {
    let first = Task::new("a");
    let second = Task::new("a");
    assert_ne!(first.id, second.id);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "invalid").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_id(uuid, "Ship to App Store")
        .unwrap()
        .completed(true)
        .pinned(true);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], uuid.to_string());
    assert_eq!(json["title"], "Ship to App Store");
    assert_eq!(json["is_completed"], true);
    assert_eq!(json["is_pinned"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_nil_task_id() {
    let json = serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000000",
        "title": "imported",
        "is_completed": false,
        "is_pinned": false,
    });

    let err = serde_json::from_value::<Task>(json).unwrap_err();
    assert!(err.to_string().contains("nil uuid"));
}

#[test]
fn deserialized_tasks_build_a_list_with_their_ids() {
    let json = serde_json::json!([
        {
            "id": "11111111-2222-4333-8444-555555555555",
            "title": "a",
            "is_completed": false,
            "is_pinned": true,
        },
        {
            "id": "66666666-7777-4888-9999-aaaaaaaaaaaa",
            "title": "b",
            "is_completed": true,
            "is_pinned": false,
        },
    ]);

    let tasks: Vec<Task> = serde_json::from_value(json).unwrap();
    let list = TaskList::from_tasks(tasks, ListLayout::PinnedFirst).unwrap();
    assert!(list.ids().iter().all(|id| !id.as_uuid().is_nil()));
    assert_eq!(
        list.ids()[1].to_string(),
        "66666666-7777-4888-9999-aaaaaaaaaaaa"
    );
}

#[test]
fn task_id_displays_as_hyphenated_uuid() {
    let uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let id = TaskId::from_uuid(uuid).unwrap();
    assert_eq!(id.to_string(), "11111111-2222-4333-8444-555555555555");
}
