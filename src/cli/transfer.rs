//! `tasklist export` and `tasklist import` command implementations

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::{open_tasks, save_tasks};
use crate::task::TaskManager;

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file (overwritten if it exists)
    dest: PathBuf,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file to read tasks from
    source: PathBuf,
}

pub async fn run_export(path: &Path, args: ExportArgs) -> Result<()> {
    let manager = open_tasks(path)?;
    save_tasks(&manager, &args.dest)?;
    println!(
        "Tasks saved to {} ({} tasks)",
        args.dest.display(),
        manager.len()
    );
    Ok(())
}

pub async fn run_import(path: &Path, args: ImportArgs) -> Result<()> {
    let mut manager = TaskManager::new();
    manager
        .load(&args.source)
        .with_context(|| format!("Failed to load {}", args.source.display()))?;
    save_tasks(&manager, path)?;
    println!(
        "Tasks loaded from {} ({} tasks)",
        args.source.display(),
        manager.len()
    );
    Ok(())
}
