//! `tasklist list` command implementation

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::path::Path;

use super::open_tasks;
use crate::task::Task;

const TABLE_COL_ID: usize = 6;
const TABLE_COL_DONE: usize = 4;
const TABLE_COL_PRIORITY: usize = 10;
const TABLE_COL_DUE: usize = 14;
const TABLE_COL_DESCRIPTION: usize = 44;

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks whose description contains this text (case-insensitive)
    keyword: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_done$} {:<width_priority$} {:<width_due$} DESCRIPTION",
        "ID",
        "DONE",
        "PRIORITY",
        "DUE",
        width_id = TABLE_COL_ID,
        width_done = TABLE_COL_DONE,
        width_priority = TABLE_COL_PRIORITY,
        width_due = TABLE_COL_DUE,
    );
    println!(
        "{}",
        "-".repeat(
            TABLE_COL_ID
                + TABLE_COL_DONE
                + TABLE_COL_PRIORITY
                + TABLE_COL_DUE
                + TABLE_COL_DESCRIPTION
                + 4
        )
    );
}

fn print_table_row(task: &Task) {
    let done = if task.completed { "x" } else { "" };
    let priority = super::truncate(&task.priority, TABLE_COL_PRIORITY);
    let due = super::truncate(&task.due_date, TABLE_COL_DUE);
    let description = super::truncate(&task.description, TABLE_COL_DESCRIPTION);
    println!(
        "{:<width_id$} {:<width_done$} {:<width_priority$} {:<width_due$} {}",
        task.task_id(),
        done,
        priority,
        due,
        description,
        width_id = TABLE_COL_ID,
        width_done = TABLE_COL_DONE,
        width_priority = TABLE_COL_PRIORITY,
        width_due = TABLE_COL_DUE,
    );
}

pub async fn run(path: &Path, args: ListArgs) -> Result<()> {
    let manager = open_tasks(path)?;
    let tasks = manager.filter(args.keyword.as_deref().unwrap_or(""));

    if args.json {
        let records: Vec<Value> = tasks
            .iter()
            .map(|task| Value::Object(task.to_record()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if tasks.is_empty() {
        match &args.keyword {
            Some(keyword) => println!("No tasks matching '{}'.", keyword),
            None => println!("No tasks in {}.", path.display()),
        }
        return Ok(());
    }

    println!("File: {}\n", path.display());
    print_table_header();
    for task in &tasks {
        print_table_row(task);
    }
    println!("\nTotal: {} of {} tasks", tasks.len(), manager.len());

    Ok(())
}
