//! `tasklist done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::{open_tasks, resolve_task, save_tasks};

#[derive(Args)]
pub struct DoneArgs {
    /// Task ID
    id: u64,
}

pub async fn run(path: &Path, args: DoneArgs) -> Result<()> {
    let mut manager = open_tasks(path)?;
    resolve_task(args.id, &manager)?;

    manager.complete(args.id);
    save_tasks(&manager, path)?;

    println!("Completed: {}", resolve_task(args.id, &manager)?.summary_line());
    Ok(())
}
