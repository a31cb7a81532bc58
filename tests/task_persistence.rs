//! Integration tests for saving and loading task files through the library

use std::fs;
use tasklist::task::{TaskError, TaskManager, RECORD_KEYS};
use tempfile::TempDir;

fn sample_manager() -> TaskManager {
    let mut manager = TaskManager::new();
    manager.create("Buy milk", "2024-01-01", "High").unwrap();
    manager.create("Call mom", "2024-01-02", "Low").unwrap();
    manager.complete(2);
    manager
}

#[test]
fn test_save_load_preserves_tasks_and_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    let original = sample_manager();
    original.save(&path).unwrap();

    let mut loaded = TaskManager::new();
    loaded.load(&path).unwrap();

    assert_eq!(loaded.tasks(), original.tasks());
    assert_eq!(loaded.listing(), original.listing());
    assert_eq!(loaded.next_id(), 3);
}

#[test]
fn test_saved_file_is_array_of_full_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    sample_manager().save(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);
    for record in records {
        let object = record.as_object().unwrap();
        for key in RECORD_KEYS {
            assert!(object.contains_key(key), "missing {}", key);
        }
    }
    assert_eq!(records[1]["completed"], true);
}

#[test]
fn test_save_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    sample_manager().save(&path).unwrap();
    sample_manager().save(&path).unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["tasks.json".to_string()]);
}

#[test]
fn test_failed_load_keeps_existing_list() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, r#"[{"task_id": 9, "description": "x", "due_date": "y", "priority": "z", "completed": false}, 5]"#).unwrap();

    let mut manager = sample_manager();
    let before = manager.tasks().to_vec();
    let err = manager.load(&path).unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(manager.tasks(), before.as_slice());
    assert_eq!(manager.next_id(), 3);
}

#[test]
fn test_missing_file_load_is_io_error() {
    let temp = TempDir::new().unwrap();
    let mut manager = sample_manager();
    let err = manager.load(&temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, TaskError::Io { .. }));
    assert_eq!(manager.len(), 2);
}

#[test]
fn test_loaded_ids_are_not_handed_out_again() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");
    fs::write(
        &path,
        r#"[{"task_id": 7, "description": "a", "due_date": "b", "priority": "c", "completed": false, "tags": []}]"#,
    )
    .unwrap();

    let mut manager = TaskManager::open(&path).unwrap();
    let id = manager.create("next", "d", "p").unwrap();
    assert_eq!(id, 8);
}
