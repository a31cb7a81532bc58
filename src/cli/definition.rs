//! Top-level clap definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::done::DoneArgs;
use super::edit::EditArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;
use super::transfer::{ExportArgs, ImportArgs};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Keep a task list in a JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Task file to work on (defaults to the configured file)
    #[arg(short, long, global = true, env = "TASKLIST_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks, optionally filtered by a keyword
    #[command(alias = "ls")]
    List(ListArgs),

    /// Print every field of every task
    Show,

    /// Change a task's description, due date or priority
    Edit(EditArgs),

    /// Remove a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Mark a task as completed
    Done(DoneArgs),

    /// Save the task list to another file
    Export(ExportArgs),

    /// Replace the task list with the contents of another file
    Import(ImportArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_starts_tui() {
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["tasklist", "show", "--file", "/tmp/t.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/t.json")));
        assert!(matches!(cli.command, Some(Commands::Show)));
    }

    #[test]
    fn test_rm_alias() {
        let cli = Cli::try_parse_from(["tasklist", "rm", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Remove(_))));
    }
}
