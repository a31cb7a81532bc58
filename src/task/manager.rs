//! In-memory task collection with whole-file JSON persistence

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use super::error::{Result, TaskError};
use super::model::Task;

/// Ordered collection of tasks. Insertion order is the only ordering.
#[derive(Debug, Clone)]
pub struct TaskManager {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Load `path` if it exists, otherwise start empty.
    pub fn open(path: &Path) -> Result<Self> {
        let mut manager = Self::new();
        if path.exists() {
            manager.load(path)?;
        } else {
            debug!("No task file at {}, starting empty", path.display());
        }
        Ok(manager)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next `create` call will hand out
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, task_id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.task_id() == task_id)
    }

    /// Append a task. The id counter moves past its id so it is never handed
    /// out again.
    pub fn add(&mut self, task: Task) {
        self.next_id = self.next_id.max(task.task_id().saturating_add(1));
        debug!("Adding task {}", task.task_id());
        self.tasks.push(task);
    }

    /// Build a task from user input and append it. All three fields must be
    /// non-blank.
    pub fn create(&mut self, description: &str, due_date: &str, priority: &str) -> Result<u64> {
        for (field, value) in [
            ("description", description),
            ("due date", due_date),
            ("priority", priority),
        ] {
            if value.trim().is_empty() {
                return Err(TaskError::MissingField { field });
            }
        }

        let task_id = self.next_id;
        self.add(Task::new(task_id, description, due_date, priority));
        Ok(task_id)
    }

    /// Drop every task with this id. Unknown ids are ignored.
    pub fn remove(&mut self, task_id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.task_id() != task_id);
        debug!(
            "Removed {} task(s) with id {}",
            before - self.tasks.len(),
            task_id
        );
    }

    /// Edit the first task with this id. Unknown ids are ignored.
    pub fn edit(&mut self, task_id: u64, description: &str, due_date: &str, priority: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.task_id() == task_id) {
            task.edit(description, due_date, priority);
            debug!("Edited task {}", task_id);
        }
    }

    /// Complete the first task with this id. Returns false for unknown ids.
    pub fn complete(&mut self, task_id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.task_id() == task_id) {
            Some(task) => {
                task.complete();
                debug!("Completed task {}", task_id);
                true
            }
            None => false,
        }
    }

    /// Tasks whose description contains `keyword`, ignoring case
    pub fn filter(&self, keyword: &str) -> Vec<&Task> {
        let keyword = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.description.to_lowercase().contains(&keyword))
            .collect()
    }

    /// Human-readable dump of every task in order
    pub fn listing(&self) -> String {
        self.tasks.iter().map(Task::details).collect()
    }

    /// Write the whole list to `path` as a JSON array of records.
    ///
    /// The content goes to a hidden temporary file in the same directory and
    /// is renamed over `path`. An interrupted or failed save leaves the
    /// previous file intact and no temporary file behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        let records: Vec<Value> = self
            .tasks
            .iter()
            .map(|task| Value::Object(task.to_record()))
            .collect();
        let content = serde_json::to_string_pretty(&records)
            .map_err(|e| TaskError::malformed(e.to_string()).in_file(path))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("tasks");

        // Removed on drop unless persisted
        let mut tmp = tempfile::Builder::new()
            .prefix(&format!(".{}.", file_name))
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| TaskError::io(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| TaskError::io(path, e))?;
        tmp.persist(path)
            .map_err(|e| TaskError::io(path, e.error))?;

        info!("Saved {} task(s) to {}", self.tasks.len(), path.display());
        Ok(())
    }

    /// Replace the whole list with the contents of `path`.
    ///
    /// Nothing changes unless every entry decodes.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| TaskError::io(path, e))?;
        let tasks = parse_tasks(&content).map_err(|e| e.in_file(path))?;

        self.next_id = tasks
            .iter()
            .map(|t| t.task_id().saturating_add(1))
            .fold(self.next_id, u64::max);
        self.tasks = tasks;

        info!("Loaded {} task(s) from {}", self.tasks.len(), path.display());
        Ok(())
    }
}

fn parse_tasks(content: &str) -> Result<Vec<Task>> {
    let root: Value =
        serde_json::from_str(content).map_err(|e| TaskError::malformed(e.to_string()))?;

    let Value::Array(entries) = root else {
        return Err(TaskError::malformed("expected a JSON array of tasks"));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(record) => Task::from_record(record).map_err(|e| match e {
                TaskError::Malformed { reason, .. } => {
                    TaskError::malformed(format!("entry {}: {}", index, reason))
                }
                other => other,
            }),
            _ => Err(TaskError::malformed(format!(
                "entry {} is not an object",
                index
            ))),
        })
        .collect()
}
