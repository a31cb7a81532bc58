//! `tasklist edit` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use super::{open_tasks, resolve_task, save_tasks};

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    id: u64,

    /// New description
    #[arg(short = 't', long)]
    description: Option<String>,

    /// New due date
    #[arg(short, long)]
    due: Option<String>,

    /// New priority
    #[arg(short, long)]
    priority: Option<String>,
}

pub async fn run(path: &Path, args: EditArgs) -> Result<()> {
    if args.description.is_none() && args.due.is_none() && args.priority.is_none() {
        bail!("Nothing to change: pass --description, --due or --priority");
    }

    let mut manager = open_tasks(path)?;
    let current = resolve_task(args.id, &manager)?;

    let description = args
        .description
        .unwrap_or_else(|| current.description.clone());
    let due_date = args.due.unwrap_or_else(|| current.due_date.clone());
    let priority = args.priority.unwrap_or_else(|| current.priority.clone());

    manager.edit(args.id, &description, &due_date, &priority);
    save_tasks(&manager, path)?;

    println!("Updated: {}", resolve_task(args.id, &manager)?.summary_line());
    Ok(())
}
