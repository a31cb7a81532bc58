//! Task data model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::error::{Result, TaskError};

/// Flat field-name-to-value mapping used as the serialization unit for one task.
pub type Record = Map<String, Value>;

/// Keys every persisted record carries, in file order.
pub const RECORD_KEYS: [&str; 5] = ["task_id", "description", "due_date", "priority", "completed"];

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identity assigned by the manager, never changed afterwards
    task_id: u64,

    /// Free text, required non-empty at creation
    pub description: String,

    /// Free text, not parsed as a date
    pub due_date: String,

    /// Conventionally High/Medium/Low but not constrained
    pub priority: String,

    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(
        task_id: u64,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            description: description.into(),
            due_date: due_date.into(),
            priority: priority.into(),
            completed: false,
        }
    }

    pub fn task_id(&self) -> u64 {
        self.task_id
    }

    /// Mark the task as done. Calling it again has no further effect.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Overwrite the three editable fields
    pub fn edit(
        &mut self,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: impl Into<String>,
    ) {
        self.description = description.into();
        self.due_date = due_date.into();
        self.priority = priority.into();
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("task_id".to_string(), Value::from(self.task_id));
        record.insert(
            "description".to_string(),
            Value::from(self.description.clone()),
        );
        record.insert("due_date".to_string(), Value::from(self.due_date.clone()));
        record.insert("priority".to_string(), Value::from(self.priority.clone()));
        record.insert("completed".to_string(), Value::from(self.completed));
        record
    }

    /// Rebuild a task from a record. Every key in [`RECORD_KEYS`] must be
    /// present with the right type; extra keys are ignored.
    pub fn from_record(record: &Record) -> Result<Self> {
        if let Some(missing) = RECORD_KEYS.iter().find(|key| !record.contains_key(**key)) {
            return Err(TaskError::malformed(format!("missing key '{}'", missing)));
        }

        serde_json::from_value(Value::Object(record.clone()))
            .map_err(|e| TaskError::malformed(e.to_string()))
    }

    /// One-line entry as shown in the task list
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} (Priority: {})",
            self.task_id, self.description, self.priority
        )
    }

    /// Multi-line dump of every field, followed by a separator line
    pub fn details(&self) -> String {
        format!(
            "Task ID: {}\nDescription: {}\nDue Date: {}\nPriority: {}\nCompleted: {}\n---------------\n",
            self.task_id, self.description, self.due_date, self.priority, self.completed
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_new_task_is_not_completed() {
        let task = Task::new(1, "Buy milk", "2024-01-01", "High");
        assert_eq!(task.task_id(), 1);
        assert!(!task.completed);
    }

    #[test]
    fn test_complete_twice_is_harmless() {
        let mut task = Task::new(1, "Buy milk", "2024-01-01", "High");
        task.complete();
        assert!(task.completed);
        task.complete();
        assert!(task.completed);
    }

    #[test]
    fn test_edit_overwrites_fields_only() {
        let mut task = Task::new(7, "Buy milk", "2024-01-01", "High");
        task.complete();
        task.edit("Buy oat milk", "2024-02-01", "Low");

        assert_eq!(task.task_id(), 7);
        assert!(task.completed);
        assert_eq!(task.description, "Buy oat milk");
        assert_eq!(task.due_date, "2024-02-01");
        assert_eq!(task.priority, "Low");
    }

    #[test]
    fn test_edit_accepts_empty_values() {
        let mut task = Task::new(1, "Buy milk", "2024-01-01", "High");
        task.edit("", "", "");
        assert!(task.description.is_empty());
    }

    #[test]
    fn test_to_record_has_all_keys() {
        let task = Task::new(3, "Call mom", "2024-01-02", "Low");
        let rec = task.to_record();

        assert_eq!(rec.len(), RECORD_KEYS.len());
        assert_eq!(rec["task_id"], json!(3));
        assert_eq!(rec["description"], json!("Call mom"));
        assert_eq!(rec["due_date"], json!("2024-01-02"));
        assert_eq!(rec["priority"], json!("Low"));
        assert_eq!(rec["completed"], json!(false));
    }

    #[test]
    fn test_from_record_restores_completed() {
        let mut task = Task::new(3, "Call mom", "2024-01-02", "Low");
        task.complete();
        let restored = Task::from_record(&task.to_record()).unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn test_from_record_missing_key() {
        let rec = record(json!({
            "task_id": 1,
            "description": "Buy milk",
            "due_date": "2024-01-01",
            "completed": false
        }));
        let err = Task::from_record(&rec).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("priority"));
    }

    #[test]
    fn test_from_record_wrong_type() {
        let rec = record(json!({
            "task_id": "one",
            "description": "Buy milk",
            "due_date": "2024-01-01",
            "priority": "High",
            "completed": false
        }));
        assert!(Task::from_record(&rec).unwrap_err().is_malformed());
    }

    #[test]
    fn test_from_record_ignores_extra_keys() {
        let rec = record(json!({
            "task_id": 2,
            "description": "Gym",
            "due_date": "tomorrow",
            "priority": "Medium",
            "completed": true,
            "color": "blue"
        }));
        let task = Task::from_record(&rec).unwrap();
        assert_eq!(task.task_id(), 2);
        assert!(task.completed);
    }

    #[test]
    fn test_summary_line() {
        let task = Task::new(4, "Water plants", "Friday", "Medium");
        assert_eq!(task.summary_line(), "4: Water plants (Priority: Medium)");
        assert_eq!(task.to_string(), task.summary_line());
    }

    #[test]
    fn test_details_block() {
        let task = Task::new(4, "Water plants", "Friday", "Medium");
        let details = task.details();
        assert!(details.starts_with("Task ID: 4\n"));
        assert!(details.contains("Due Date: Friday\n"));
        assert!(details.contains("Completed: false\n"));
        assert!(details.ends_with("---------------\n"));
    }
}
