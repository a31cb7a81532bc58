//! `tasklist show` command implementation

use anyhow::Result;
use std::path::Path;

use super::open_tasks;

pub async fn run(path: &Path) -> Result<()> {
    let manager = open_tasks(path)?;
    if manager.is_empty() {
        println!("No tasks in {}", path.display());
        return Ok(());
    }
    print!("{}", manager.listing());
    Ok(())
}
