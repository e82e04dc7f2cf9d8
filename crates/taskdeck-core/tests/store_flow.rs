use chrono::{DateTime, Duration, TimeZone, Utc};
use taskdeck_core::datetime::format_datetime;
use taskdeck_core::slot::{FileSlot, KeyValueSlot, MemorySlot};
use taskdeck_core::store::{load_tasks, save_tasks};
use taskdeck_core::{
    ItemId, SubtaskFields, TaskFields, TaskStore, TrackerConfig, ValidationError, view,
};
use tempfile::tempdir;

const KEY: &str = "todo_tasks_v2";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0)
        .single()
        .expect("valid now")
}

fn memory_store() -> TaskStore<MemorySlot> {
    TaskStore::open(MemorySlot::new(), TrackerConfig::default())
}

#[test]
fn empty_title_is_rejected_without_mutation() {
    let mut store = memory_store();

    let err = store
        .add_task(TaskFields::new("   ").with_description("ignored"), now())
        .expect_err("blank title");
    assert_eq!(err, ValidationError::EmptyTaskTitle);
    assert_eq!(err.to_string(), "Enter task title!");
    assert!(store.is_empty());
    assert_eq!(store.slot().get(KEY), None);
}

#[test]
fn deadline_year_range_is_inclusive() {
    let mut store = memory_store();

    for raw in ["1999-06-01T10:00", "2031-06-01T10:00", "not a date"] {
        let err = store
            .add_task(TaskFields::new("x").with_deadline(raw), now())
            .expect_err("out of range");
        assert_eq!(err.to_string(), "Year must be between 2000 and 2030!");
    }
    assert!(store.is_empty());

    for raw in ["2000-06-01T10:00", "2030-06-01T10:00"] {
        store
            .add_task(TaskFields::new("x").with_deadline(raw), now())
            .expect("in range");
    }
    assert_eq!(store.len(), 2);
}

#[test]
fn missing_deadline_defaults_to_one_hour_later() {
    let mut store = memory_store();
    let task = store
        .add_task(TaskFields::new("Call back").with_deadline(""), now())
        .expect("add task");

    assert_eq!(task.created_at, now());
    assert_eq!(task.deadline, Some(now() + Duration::hours(1)));
}

#[test]
fn buy_milk_example() {
    let mut store = memory_store();
    let task = store
        .add_task(
            TaskFields::new("Buy milk").with_deadline("2025-06-01T10:00"),
            now(),
        )
        .expect("add task")
        .clone();

    assert!(!task.completed);
    assert!(task.subtasks.is_empty());
    assert_eq!(task.created_at, now());

    let rendered = view::render(store.tasks());
    let card = &rendered.cards[0];
    assert_eq!(card.title, "Buy milk");
    assert_eq!(card.deadline.as_deref(), Some("01-06-2025 10:00"));
    assert_eq!(card.created, format_datetime(now()));
}

#[test]
fn fields_are_trimmed_on_create() {
    let mut store = memory_store();
    let task = store
        .add_task(
            TaskFields::new("  Taxes  ")
                .with_description(" forms ")
                .with_notes("\tdue soon\n"),
            now(),
        )
        .expect("add task");

    assert_eq!(task.title, "Taxes");
    assert_eq!(task.description, "forms");
    assert_eq!(task.notes, "due soon");
}

#[test]
fn save_then_load_roundtrips_nested_tasks() {
    let mut store = memory_store();
    let first = store
        .add_task(
            TaskFields::new("Move house")
                .with_description("April")
                .with_notes("boxes")
                .with_deadline("2026-04-01T09:15"),
            now(),
        )
        .expect("add task")
        .id
        .clone();
    store
        .add_task(TaskFields::new("Dentist"), now() + Duration::minutes(5))
        .expect("add task");
    for title in ["Rent van", "Pack kitchen", "Change address"] {
        store
            .add_subtask(&first, SubtaskFields::new(title, "soon"))
            .expect("add subtask")
            .expect("parent exists");
    }

    let expected = store.tasks().to_vec();
    let slot = store.into_slot();
    let reloaded = TaskStore::open(slot, TrackerConfig::default());
    assert_eq!(reloaded.tasks(), expected.as_slice());

    let titles: Vec<_> = reloaded.tasks()[0]
        .subtasks
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, ["Rent van", "Pack kitchen", "Change address"]);
}

#[test]
fn delete_task_removes_only_that_task() {
    let mut store = memory_store();
    let keep = store.add_task(TaskFields::new("Keep"), now()).expect("add").id.clone();
    let doomed = store.add_task(TaskFields::new("Drop"), now()).expect("add").id.clone();
    store
        .add_subtask(&doomed, SubtaskFields::new("child", ""))
        .expect("add subtask");

    assert!(!store.delete_task(&ItemId::generate()));
    assert_eq!(store.len(), 2);

    assert!(store.delete_task(&doomed));
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].id, keep);
    assert!(store.task(&doomed).is_none());

    let persisted = load_tasks(store.slot(), KEY);
    assert_eq!(persisted.len(), 1);
}

#[test]
fn invalid_deadline_aborts_whole_edit() {
    let mut store = memory_store();
    let id = store
        .add_task(
            TaskFields::new("Original")
                .with_description("d")
                .with_notes("n"),
            now(),
        )
        .expect("add")
        .id
        .clone();
    let before = store.task(&id).expect("task").clone();

    let err = store
        .edit_task(
            &id,
            TaskFields::new("Changed")
                .with_description("d2")
                .with_notes("n2")
                .with_deadline("2031-01-15T12:00"),
        )
        .expect_err("bad year");
    assert_eq!(
        err,
        ValidationError::DeadlineYearOutOfRange {
            min: 2000,
            max: 2030
        }
    );
    assert_eq!(store.task(&id), Some(&before));
}

#[test]
fn edit_overwrites_fields_and_keeps_identity() {
    let mut store = memory_store();
    let id = store
        .add_task(TaskFields::new("Draft").with_notes("old"), now())
        .expect("add")
        .id
        .clone();
    let before = store.task(&id).expect("task").clone();

    assert!(
        store
            .edit_task(&id, TaskFields::new(" Final ").with_deadline(""))
            .expect("edit")
    );
    let after = store.task(&id).expect("task");
    assert_eq!(after.title, "Final");
    assert_eq!(after.notes, "");
    assert_eq!(after.deadline, before.deadline);
    assert_eq!(after.created_at, before.created_at);

    assert!(
        store
            .edit_task(&id, TaskFields::new("Final").with_deadline("2027-02-02T08:30"))
            .expect("edit")
    );
    assert_eq!(
        store.task(&id).and_then(|t| t.deadline).map(format_datetime).as_deref(),
        Some("02-02-2027 08:30")
    );

    assert!(
        !store
            .edit_task(&ItemId::generate(), TaskFields::new("ghost"))
            .expect("unknown id is a no-op")
    );
}

#[test]
fn deleting_first_subtask_keeps_second_in_place() {
    let mut store = memory_store();
    let task_id = store.add_task(TaskFields::new("Garden"), now()).expect("add").id.clone();
    let first = store
        .add_subtask(&task_id, SubtaskFields::new("Weed", ""))
        .expect("add")
        .expect("parent");
    let second = store
        .add_subtask(&task_id, SubtaskFields::new("Water", "evening"))
        .expect("add")
        .expect("parent");

    assert!(!store.delete_subtask(&task_id, &ItemId::generate()));
    assert!(store.delete_subtask(&task_id, &first));

    let subtasks = &store.task(&task_id).expect("task").subtasks;
    assert_eq!(subtasks.len(), 1);
    assert_eq!(subtasks[0].id, second);
    assert_eq!(subtasks[0].description, "evening");
}

#[test]
fn subtask_edit_allows_blank_title() {
    let mut store = memory_store();
    let task_id = store.add_task(TaskFields::new("Car"), now()).expect("add").id.clone();
    let sub_id = store
        .add_subtask(&task_id, SubtaskFields::new("Oil", "5w30"))
        .expect("add")
        .expect("parent");

    assert!(store.edit_subtask(&task_id, &sub_id, SubtaskFields::new("   ", " synthetic ")));
    let sub = store
        .task(&task_id)
        .and_then(|t| t.subtask(&sub_id))
        .expect("subtask");
    assert_eq!(sub.title, "");
    assert_eq!(sub.description, "synthetic");

    assert!(!store.edit_subtask(&ItemId::generate(), &sub_id, SubtaskFields::default()));
}

#[test]
fn malformed_or_missing_blob_loads_empty() {
    assert!(load_tasks(&MemorySlot::new(), KEY).is_empty());
    assert!(load_tasks(&MemorySlot::with_entry(KEY, "{not json"), KEY).is_empty());
    assert!(load_tasks(&MemorySlot::with_entry(KEY, r#"{"tasks":[]}"#), KEY).is_empty());
    assert!(load_tasks(&MemorySlot::with_entry(KEY, r#"[{"title":"no id"}]"#), KEY).is_empty());

    let store = TaskStore::open(
        MemorySlot::with_entry(KEY, "garbage"),
        TrackerConfig::default(),
    );
    assert!(store.is_empty());
}

#[test]
fn loads_list_written_with_timestamp_ids() {
    let raw = r#"[{
        "id": "t_1717228800000",
        "title": "Buy milk",
        "description": "",
        "notes": "",
        "deadline": "2024-06-01T10:00:00.000Z",
        "createdAt": "2024-06-01T08:00:00.000Z",
        "completed": false,
        "subtasks": [{
            "id": "s_1717228801000",
            "title": "Oat milk",
            "description": "",
            "completed": false
        }]
    }]"#;
    let mut store = TaskStore::open(MemorySlot::with_entry(KEY, raw), TrackerConfig::default());
    assert_eq!(store.len(), 1);

    let task_id = ItemId::from("t_1717228800000");
    let sub_id = ItemId::from("s_1717228801000");
    assert_eq!(
        store
            .task(&task_id)
            .and_then(|t| t.subtask(&sub_id))
            .map(|s| s.title.as_str()),
        Some("Oat milk")
    );

    assert!(store.delete_subtask(&task_id, &sub_id));
    let stored = store.slot().get(KEY).expect("persisted");
    assert!(stored.contains(r#""id":"t_1717228800000""#));
    assert!(!stored.contains("s_1717228801000"));
}

#[test]
fn stored_deadlines_outside_year_range_still_load() {
    let raw = r#"[
        {"id": "a", "title": "Old", "deadline": "1990-03-01T12:00:00.000Z",
         "createdAt": "1990-01-01T12:00:00.000Z"},
        {"id": "b", "title": "Far", "deadline": "2040-03-01T12:00:00.000Z",
         "createdAt": "2025-01-01T12:00:00.000Z"}
    ]"#;
    let store = TaskStore::open(MemorySlot::with_entry(KEY, raw), TrackerConfig::default());
    assert_eq!(store.len(), 2);

    let rendered = view::render(store.tasks());
    let deadlines: Vec<_> = rendered
        .cards
        .iter()
        .map(|card| card.deadline.clone().expect("deadline shown"))
        .collect();
    assert!(deadlines[0].contains("1990"));
    assert!(deadlines[1].contains("2040"));
}

#[test]
fn file_slot_roundtrip() {
    let temp = tempdir().expect("tempdir");
    let slot = FileSlot::open(temp.path()).expect("open file slot");
    assert_eq!(slot.read(KEY).expect("read"), None);

    let mut store = TaskStore::open(slot, TrackerConfig::default());
    store
        .add_task(TaskFields::new("Persist me").with_notes("on disk"), now())
        .expect("add");
    assert!(store.slot().path_for(KEY).exists());

    let reopened = TaskStore::open(
        FileSlot::open(temp.path()).expect("reopen"),
        TrackerConfig::default(),
    );
    assert_eq!(reopened.tasks(), store.tasks());

    let mut raw_slot = FileSlot::open(temp.path()).expect("reopen");
    save_tasks(&mut raw_slot, KEY, &[]).expect("save empty");
    assert_eq!(raw_slot.read(KEY).expect("read").as_deref(), Some("[]"));
}
