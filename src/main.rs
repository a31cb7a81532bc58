//! tasklist - terminal task-list manager

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tasklist::cli::{self, Cli, Commands};
use tasklist::config::Config;
use tasklist::tui;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKLIST_DEBUG").is_ok() {
        let directive =
            std::env::var("TASKLIST_LOG").unwrap_or_else(|_| "tasklist=debug".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completions need neither config nor a task file
    if let Some(Commands::Completion { shell }) = &cli.command {
        generate(*shell, &mut Cli::command(), "tasklist", &mut std::io::stdout());
        return Ok(());
    }

    // A broken config is not fatal when the task file is given explicitly
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if cli.file.is_some() => {
            warn!("Ignoring config: {:#}", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };
    let path = config.task_file(cli.file.as_deref())?;

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&path, args).await,
        Some(Commands::List(args)) => cli::list::run(&path, args).await,
        Some(Commands::Show) => cli::show::run(&path).await,
        Some(Commands::Edit(args)) => cli::edit::run(&path, args).await,
        Some(Commands::Remove(args)) => cli::remove::run(&path, args).await,
        Some(Commands::Done(args)) => cli::done::run(&path, args).await,
        Some(Commands::Export(args)) => cli::transfer::run_export(&path, args).await,
        Some(Commands::Import(args)) => cli::transfer::run_import(&path, args).await,
        None => tui::run(&path, &config).await,
        Some(Commands::Completion { .. }) => Ok(()),
    }
}
