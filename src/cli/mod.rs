//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;
pub mod transfer;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use std::path::Path;
use unicode_width::UnicodeWidthChar;

use crate::task::{Task, TaskManager};

/// Open the working task file, starting empty if it does not exist yet.
pub fn open_tasks(path: &Path) -> Result<TaskManager> {
    TaskManager::open(path).with_context(|| format!("Failed to open {}", path.display()))
}

pub fn save_tasks(manager: &TaskManager, path: &Path) -> Result<()> {
    manager
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))
}

pub fn resolve_task(task_id: u64, manager: &TaskManager) -> Result<&Task> {
    manager
        .get(task_id)
        .ok_or_else(|| anyhow::anyhow!("Task not found: {}", task_id))
}

/// Cut `s` to at most `max` terminal columns, ending in "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max {
        return s.to_string();
    }

    let budget = if max <= 3 { max } else { max - 3 };
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max > 3 {
        out.push_str("...");
    }
    out
}
