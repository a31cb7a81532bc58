//! `tasklist remove` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::{open_tasks, resolve_task, save_tasks};

#[derive(Args)]
pub struct RemoveArgs {
    /// Task ID
    id: u64,
}

pub async fn run(path: &Path, args: RemoveArgs) -> Result<()> {
    let mut manager = open_tasks(path)?;
    let line = resolve_task(args.id, &manager)?.summary_line();

    manager.remove(args.id);
    save_tasks(&manager, path)?;

    println!("Removed: {}", line);
    Ok(())
}
