//! `tasklist add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::{open_tasks, save_tasks};

#[derive(Args)]
pub struct AddArgs {
    /// What needs doing
    description: String,

    /// Due date (free text, e.g. 2024-01-01 or "friday")
    #[arg(short, long)]
    due: String,

    /// Priority (conventionally High, Medium or Low)
    #[arg(short, long, default_value = "Medium")]
    priority: String,
}

pub async fn run(path: &Path, args: AddArgs) -> Result<()> {
    let mut manager = open_tasks(path)?;
    let task_id = manager.create(&args.description, &args.due, &args.priority)?;
    save_tasks(&manager, path)?;

    if let Some(task) = manager.get(task_id) {
        println!("Added: {}", task.summary_line());
    }
    Ok(())
}
